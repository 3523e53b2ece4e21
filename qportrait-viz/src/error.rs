//! Error types for portrait rendering and scheduling

use thiserror::Error;

/// Errors that can occur while drawing portraits or scheduling gates
#[derive(Debug, Error)]
pub enum VizError {
    /// State vector length is not a supported power of two
    ///
    /// The layout only draws binary-recursive subdivisions, so the length
    /// must be in {2, 4, 8, 16, ...}. Unsupported lengths fail here instead
    /// of silently drawing nothing.
    #[error("Invalid state vector length {len}: expected a power of 2 of at least 2")]
    InvalidStateVectorLength { len: usize },

    /// Adjacency matrix failed validation
    #[error("Invalid adjacency matrix: {reason}")]
    InvalidAdjacencyMatrix { reason: String },

    /// Step labels don't line up with the state sequence
    #[error("Got {labels} labels for {steps} steps")]
    LabelCountMismatch { labels: usize, steps: usize },

    /// Nothing to illustrate
    #[error("State sequence is empty")]
    EmptySequence,

    /// Hidden linear function problem definition failed validation
    #[error("Invalid hidden linear function problem: {reason}")]
    InvalidProblem { reason: String },

    /// Error from circuit construction
    #[error(transparent)]
    Circuit(#[from] qportrait_core::CircuitError),

    /// Error from simulation
    #[error(transparent)]
    Simulation(#[from] qportrait_sim::SimError),
}

impl VizError {
    /// Create an invalid adjacency matrix error
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidAdjacencyMatrix {
            reason: reason.into(),
        }
    }

    /// Create an invalid problem error
    pub fn invalid_problem(reason: impl Into<String>) -> Self {
        Self::InvalidProblem {
            reason: reason.into(),
        }
    }
}
