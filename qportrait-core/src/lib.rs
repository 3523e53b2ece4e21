//! Core circuit types for the qportrait illustration toolkit
//!
//! This crate provides the circuit model the portrait renderers consume:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Trait for quantum operations, plus the standard gate set
//! - [`Circuit`]: Moment-based quantum circuit container
//! - [`diagram`]: Plain-text circuit diagrams with configurable spacing
//!
//! # Example
//! ```
//! use qportrait_core::{gates, Circuit, QubitId};
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.append(Arc::new(gates::Hadamard), &[QubitId::new(0)]).unwrap();
//! circuit.append(Arc::new(gates::CNot), &[QubitId::new(0), QubitId::new(1)]).unwrap();
//! assert_eq!(circuit.num_moments(), 2);
//! ```

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod qubit;

// Re-exports for convenience
pub use circuit::{Circuit, Moment};
pub use diagram::{render_diagram, DiagramConfig};
pub use error::CircuitError;
pub use gate::{gates, Gate, GateOp};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in qportrait-core
pub type Result<T> = std::result::Result<T, CircuitError>;
