//! Statevector simulation for the qportrait illustration toolkit
//!
//! Evolves a [`qportrait_core::Circuit`] moment by moment and exposes the
//! intermediate states, which is what the portrait renderers consume: one
//! snapshot per moment, plus the synthesized |0..0⟩ initial step.
//!
//! Qubit 0 is the most significant bit of the state index, so the first
//! half of an amplitude vector is the `|0..⟩` branch of qubit 0. The
//! portrait layout splits vectors exactly along that line.
//!
//! # Example
//! ```
//! use qportrait_core::{gates, Circuit, QubitId};
//! use qportrait_sim::Simulator;
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(1);
//! circuit.append(Arc::new(gates::Hadamard), &[QubitId::new(0)]).unwrap();
//!
//! let states = Simulator::new().state_sequence(&circuit).unwrap();
//! assert_eq!(states.len(), 2); // initial step + one moment
//! ```

pub mod error;
pub mod kernels;
pub mod simulator;
pub mod state;

pub use error::SimError;
pub use simulator::Simulator;
pub use state::StateVector;

/// Type alias for results in qportrait-sim
pub type Result<T> = std::result::Result<T, SimError>;
