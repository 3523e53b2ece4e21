//! Moment-stepping statevector simulator

use crate::kernels::{apply_single_qubit, apply_two_qubit};
use crate::{Result, SimError, StateVector};
use qportrait_core::{Circuit, GateOp};
use rand::Rng;

/// Statevector simulator with per-moment snapshots
///
/// # Example
/// ```
/// use qportrait_core::{gates, Circuit, QubitId};
/// use qportrait_sim::Simulator;
/// use std::sync::Arc;
///
/// let mut circuit = Circuit::new(2);
/// circuit.append(Arc::new(gates::Hadamard), &[QubitId::new(0)]).unwrap();
/// circuit.append(Arc::new(gates::CNot), &[QubitId::new(0), QubitId::new(1)]).unwrap();
///
/// let final_state = Simulator::new().run(&circuit).unwrap();
/// assert!(final_state.is_normalized(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    max_qubits: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    /// Create a simulator with the default qubit limit
    pub fn new() -> Self {
        Self { max_qubits: 24 }
    }

    /// Override the qubit limit
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Run the circuit and return the final state
    ///
    /// # Errors
    /// Returns an error if the circuit fails validation, exceeds the qubit
    /// limit, or contains a gate the kernels cannot apply.
    pub fn run(&self, circuit: &Circuit) -> Result<StateVector> {
        let mut steps = self.moment_steps(circuit)?;
        match steps.pop() {
            Some(state) => Ok(state),
            None => StateVector::zero_state(circuit.num_qubits()),
        }
    }

    /// Simulate the circuit, returning the state after every moment
    ///
    /// The returned sequence has one entry per moment; an empty circuit
    /// yields an empty sequence.
    pub fn moment_steps(&self, circuit: &Circuit) -> Result<Vec<StateVector>> {
        self.check_circuit(circuit)?;

        let mut state = StateVector::zero_state(circuit.num_qubits())?;
        let mut steps = Vec::with_capacity(circuit.num_moments());
        for moment in circuit.moments() {
            for op in moment.operations() {
                self.apply_op(op, state.amplitudes_mut())?;
            }
            steps.push(state.clone());
        }
        Ok(steps)
    }

    /// Simulate the circuit and prepend the synthesized initial step
    ///
    /// Index 0 of the result is the |0..0⟩ basis state, so a circuit with m
    /// moments yields m+1 states. This is the sequence the portrait
    /// compositor draws.
    pub fn state_sequence(&self, circuit: &Circuit) -> Result<Vec<StateVector>> {
        let mut states = self.moment_steps(circuit)?;
        states.insert(0, StateVector::zero_state(circuit.num_qubits())?);
        Ok(states)
    }

    /// Sample a measurement outcome from |ψ|²
    ///
    /// Returns one bit per qubit, qubit 0 first. This is the terminal
    /// measurement of a circuit; mid-circuit measurement is not modeled.
    pub fn sample<R: Rng>(&self, state: &StateVector, rng: &mut R) -> Vec<u8> {
        let mut threshold: f64 = rng.gen();
        let mut outcome = state.dimension() - 1;
        for (index, amplitude) in state.amplitudes().iter().enumerate() {
            threshold -= amplitude.norm_sqr();
            if threshold <= 0.0 {
                outcome = index;
                break;
            }
        }

        let n = state.num_qubits();
        (0..n).map(|q| ((outcome >> (n - 1 - q)) & 1) as u8).collect()
    }

    fn check_circuit(&self, circuit: &Circuit) -> Result<()> {
        circuit
            .validate()
            .map_err(|e| SimError::InvalidCircuit(e.to_string()))?;
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max_qubits: self.max_qubits,
            });
        }
        Ok(())
    }

    fn apply_op(&self, op: &GateOp, state: &mut [num_complex::Complex64]) -> Result<()> {
        let matrix = op.gate().matrix();
        match op.qubits() {
            [q] => {
                expect_matrix_len(op, &matrix, 4)?;
                apply_single_qubit(&matrix, q.index(), state)
            },
            [a, b] => {
                expect_matrix_len(op, &matrix, 16)?;
                apply_two_qubit(&matrix, a.index(), b.index(), state)
            },
            qubits => Err(SimError::InvalidCircuit(format!(
                "Gate '{}' acts on {} qubits; only 1- and 2-qubit gates are supported",
                op.gate().name(),
                qubits.len()
            ))),
        }
    }
}

fn expect_matrix_len(op: &GateOp, matrix: &[num_complex::Complex64], expected: usize) -> Result<()> {
    if matrix.len() != expected {
        return Err(SimError::BadGateMatrix {
            gate: op.gate().name().to_string(),
            len: matrix.len(),
            expected,
        });
    }
    Ok(())
}
