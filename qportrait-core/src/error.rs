//! Error types for the circuit model

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur when building or validating circuits
#[derive(Debug, Error)]
pub enum CircuitError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Two operations in one moment touch the same qubit
    #[error("Qubit {0} is already used by another operation in this moment")]
    MomentCollision(QubitId),

    /// Generic circuit validation error
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),
}

impl CircuitError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }
}
