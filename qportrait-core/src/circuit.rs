//! Moment-based quantum circuit representation
//!
//! A circuit is an ordered sequence of [`Moment`]s; the operations within a
//! moment act on pairwise-disjoint qubits and are treated as simultaneous.
//! The portrait renderers draw one state snapshot per moment, so the moment
//! grouping here is the unit of everything downstream: simulation steps,
//! diagram columns, and illustration spacing.

use crate::gate::Gate;
use crate::{CircuitError, GateOp, QubitId, Result};
use std::sync::Arc;

/// One layer of simultaneous operations
#[derive(Clone, Debug, Default)]
pub struct Moment {
    operations: Vec<GateOp>,
}

impl Moment {
    /// Create an empty moment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to this moment
    ///
    /// # Errors
    /// Returns [`CircuitError::MomentCollision`] if the operation shares a
    /// qubit with one already in the moment.
    pub fn push(&mut self, op: GateOp) -> Result<()> {
        for &qubit in op.qubits() {
            if self.touches(qubit) {
                return Err(CircuitError::MomentCollision(qubit));
            }
        }
        self.operations.push(op);
        Ok(())
    }

    /// Whether any operation in this moment acts on `qubit`
    pub fn touches(&self, qubit: QubitId) -> bool {
        self.operations.iter().any(|op| op.qubits().contains(&qubit))
    }

    /// The operations in this moment
    pub fn operations(&self) -> &[GateOp] {
        &self.operations
    }

    /// Whether the moment has no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A quantum circuit as an ordered sequence of moments
///
/// # Example
/// ```
/// use qportrait_core::{gates, Circuit, QubitId};
/// use std::sync::Arc;
///
/// let mut circuit = Circuit::new(2);
/// circuit.append(Arc::new(gates::Hadamard), &[QubitId::new(0)]).unwrap();
/// circuit.append_in_moment(Arc::new(gates::PauliX), &[QubitId::new(1)]).unwrap();
/// assert_eq!(circuit.num_moments(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    moments: Vec<Moment>,
    qubit_names: Vec<Option<String>>,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            moments: Vec::new(),
            qubit_names: vec![None; num_qubits],
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of moments in the circuit
    #[inline]
    pub fn num_moments(&self) -> usize {
        self.moments.len()
    }

    /// Check if the circuit has no moments
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// Total number of gate operations across all moments
    pub fn num_operations(&self) -> usize {
        self.moments.iter().map(|m| m.operations().len()).sum()
    }

    /// Give a qubit a display name used by the diagram renderer
    ///
    /// # Errors
    /// Returns error if the qubit is out of range.
    pub fn name_qubit(&mut self, qubit: QubitId, name: impl Into<String>) -> Result<()> {
        self.check_qubits(&[qubit])?;
        self.qubit_names[qubit.index()] = Some(name.into());
        Ok(())
    }

    /// The display name for a qubit, defaulting to `q{n}`
    pub fn qubit_name(&self, qubit: QubitId) -> String {
        self.qubit_names
            .get(qubit.index())
            .and_then(|n| n.clone())
            .unwrap_or_else(|| format!("{}", qubit))
    }

    /// Append a gate in a fresh moment at the end of the circuit
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds or the operation
    /// itself is malformed.
    pub fn append(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        self.check_qubits(qubits)?;
        let op = GateOp::new(gate, qubits)?;
        let mut moment = Moment::new();
        moment.push(op)?;
        self.moments.push(moment);
        Ok(())
    }

    /// Append a gate into the last moment, extending it
    ///
    /// Falls back to opening a fresh moment when the circuit is empty or the
    /// last moment already touches one of the qubits.
    pub fn append_in_moment(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        self.check_qubits(qubits)?;
        let op = GateOp::new(gate, qubits)?;

        let collides = match self.moments.last() {
            Some(last) => qubits.iter().any(|&q| last.touches(q)),
            None => true,
        };
        if collides {
            let mut moment = Moment::new();
            moment.push(op)?;
            self.moments.push(moment);
        } else {
            self.moments
                .last_mut()
                .expect("last moment exists when no collision")
                .push(op)?;
        }
        Ok(())
    }

    /// Append a pre-built moment
    ///
    /// # Errors
    /// Returns error if any operation uses an out-of-range qubit.
    pub fn push_moment(&mut self, moment: Moment) -> Result<()> {
        for op in moment.operations() {
            self.check_qubits(op.qubits())?;
        }
        self.moments.push(moment);
        Ok(())
    }

    /// Get an iterator over the moments
    pub fn moments(&self) -> impl Iterator<Item = &Moment> {
        self.moments.iter()
    }

    /// Get an iterator over all operations, in moment order
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.moments.iter().flat_map(|m| m.operations().iter())
    }

    /// Validate the circuit
    pub fn validate(&self) -> Result<()> {
        for (i, moment) in self.moments.iter().enumerate() {
            let mut seen: Vec<QubitId> = Vec::new();
            for op in moment.operations() {
                for &qubit in op.qubits() {
                    if qubit.index() >= self.num_qubits {
                        return Err(CircuitError::ValidationError(format!(
                            "Moment {} uses invalid qubit {}",
                            i, qubit
                        )));
                    }
                    if seen.contains(&qubit) {
                        return Err(CircuitError::MomentCollision(qubit));
                    }
                    seen.push(qubit);
                }
            }
        }
        Ok(())
    }

    fn check_qubits(&self, qubits: &[QubitId]) -> Result<()> {
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(CircuitError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} moments)",
            self.num_qubits,
            self.num_moments()
        )?;
        for (i, moment) in self.moments.iter().enumerate() {
            write!(f, "  {}:", i)?;
            for op in moment.operations() {
                write!(f, " {}", op)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::gates::{CNot, Hadamard, PauliX};

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_moments(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_circuit_zero_qubits() {
        Circuit::new(0);
    }

    #[test]
    fn test_append_opens_fresh_moments() {
        let mut circuit = Circuit::new(2);
        circuit.append(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.append(Arc::new(PauliX), &[QubitId::new(1)]).unwrap();
        assert_eq!(circuit.num_moments(), 2);
        assert_eq!(circuit.num_operations(), 2);
    }

    #[test]
    fn test_append_in_moment_packs_disjoint_ops() {
        let mut circuit = Circuit::new(2);
        circuit.append_in_moment(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.append_in_moment(Arc::new(PauliX), &[QubitId::new(1)]).unwrap();
        assert_eq!(circuit.num_moments(), 1);

        // Colliding qubit opens the next moment
        circuit.append_in_moment(Arc::new(PauliX), &[QubitId::new(0)]).unwrap();
        assert_eq!(circuit.num_moments(), 2);
    }

    #[test]
    fn test_append_invalid_qubit() {
        let mut circuit = Circuit::new(2);
        let result = circuit.append(Arc::new(Hadamard), &[QubitId::new(5)]);
        assert!(matches!(result, Err(CircuitError::InvalidQubit(5, 2))));
    }

    #[test]
    fn test_moment_collision() {
        let mut moment = Moment::new();
        moment
            .push(GateOp::new(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap())
            .unwrap();
        let result =
            moment.push(GateOp::new(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)]).unwrap());
        assert!(matches!(result, Err(CircuitError::MomentCollision(_))));
    }

    #[test]
    fn test_push_moment() {
        let mut moment = Moment::new();
        moment
            .push(GateOp::new(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap())
            .unwrap();
        moment
            .push(GateOp::new(Arc::new(Hadamard), &[QubitId::new(1)]).unwrap())
            .unwrap();

        let mut circuit = Circuit::new(2);
        circuit.push_moment(moment).unwrap();
        assert_eq!(circuit.num_moments(), 1);
        assert_eq!(circuit.num_operations(), 2);
    }

    #[test]
    fn test_qubit_names() {
        let mut circuit = Circuit::new(2);
        circuit.name_qubit(QubitId::new(0), "photon A").unwrap();
        assert_eq!(circuit.qubit_name(QubitId::new(0)), "photon A");
        assert_eq!(circuit.qubit_name(QubitId::new(1)), "q1");
    }

    #[test]
    fn test_validate() {
        let mut circuit = Circuit::new(2);
        circuit.append(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)]).unwrap();
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.append(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        let display = format!("{}", circuit);
        assert!(display.contains("2 qubits"));
        assert!(display.contains("1 moments"));
    }
}
