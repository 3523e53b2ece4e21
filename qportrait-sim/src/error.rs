//! Error types for simulation

use thiserror::Error;

/// Errors that can occur during statevector simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid state dimension
    #[error("Invalid state dimension {dimension}, expected a power of 2 of at least 2")]
    InvalidDimension { dimension: usize },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Too many qubits to simulate
    #[error("Circuit has {num_qubits} qubits, maximum supported is {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// Invalid qubit index during gate application
    #[error("Invalid qubit index {qubit} for {num_qubits}-qubit state")]
    InvalidQubit { qubit: usize, num_qubits: usize },

    /// Gate matrix has the wrong size for its arity
    #[error("Gate '{gate}' produced a matrix of {len} entries, expected {expected}")]
    BadGateMatrix {
        gate: String,
        len: usize,
        expected: usize,
    },

    /// Circuit failed validation before execution
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),
}
