//! Quantum gate trait, the standard gate set, and gate operations

use crate::{CircuitError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for quantum gate operations
///
/// All gates in the portrait toolkit are unitary; terminal measurement is
/// expressed by sampling in the simulator, not as a circuit operation.
/// Gates are stateless and reusable across multiple circuits.
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "CZ")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// The unitary matrix for this gate as a flattened vector
    ///
    /// The matrix is stored in row-major order. For an n-qubit gate the
    /// returned vector has length (2^n)^2.
    fn matrix(&self) -> Vec<Complex64>;

    /// Label shown on the wire in text diagrams
    ///
    /// Defaults to the gate name; parametric gates override this to show
    /// their parameter.
    fn label(&self) -> String {
        self.name().to_string()
    }
}

/// A gate operation applied to specific qubits
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 2]>, // Most gates are 1-2 qubits
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Qubit count doesn't match gate requirements
    /// - Duplicate qubits specified
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(CircuitError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(CircuitError::DuplicateQubit(qubits[i]));
                }
            }
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Standard gate implementations with pre-computed matrices
pub mod gates {
    use super::Gate;
    use num_complex::Complex64;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);
    const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
    const I: Complex64 = Complex64::new(0.0, 1.0);
    const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

    const HADAMARD: [Complex64; 4] = [
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        Complex64::new(FRAC_1_SQRT_2, 0.0),
        Complex64::new(-FRAC_1_SQRT_2, 0.0),
    ];
    const PAULI_X: [Complex64; 4] = [ZERO, ONE, ONE, ZERO];
    const PAULI_Y: [Complex64; 4] = [ZERO, NEG_I, I, ZERO];
    const PAULI_Z: [Complex64; 4] = [ONE, ZERO, ZERO, NEG_ONE];
    const S_MATRIX: [Complex64; 4] = [ONE, ZERO, ZERO, I];

    /// Hadamard gate
    ///
    /// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
    #[derive(Debug, Clone, Copy)]
    pub struct Hadamard;

    impl Gate for Hadamard {
        fn name(&self) -> &str {
            "H"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            HADAMARD.to_vec()
        }
    }

    /// Pauli-X gate (NOT gate)
    #[derive(Debug, Clone, Copy)]
    pub struct PauliX;

    impl Gate for PauliX {
        fn name(&self) -> &str {
            "X"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            PAULI_X.to_vec()
        }
    }

    /// Pauli-Y gate
    #[derive(Debug, Clone, Copy)]
    pub struct PauliY;

    impl Gate for PauliY {
        fn name(&self) -> &str {
            "Y"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            PAULI_Y.to_vec()
        }
    }

    /// Pauli-Z gate (phase flip)
    #[derive(Debug, Clone, Copy)]
    pub struct PauliZ;

    impl Gate for PauliZ {
        fn name(&self) -> &str {
            "Z"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            PAULI_Z.to_vec()
        }
    }

    /// S gate (quarter-turn phase)
    ///
    /// S|1⟩ = i|1⟩; two S gates make a Z.
    #[derive(Debug, Clone, Copy)]
    pub struct SGate;

    impl Gate for SGate {
        fn name(&self) -> &str {
            "S"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            S_MATRIX.to_vec()
        }
    }

    /// T gate (eighth-turn phase)
    #[derive(Debug, Clone, Copy)]
    pub struct TGate;

    impl Gate for TGate {
        fn name(&self) -> &str {
            "T"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            vec![ONE, ZERO, ZERO, Complex64::from_polar(1.0, FRAC_PI_4)]
        }
    }

    /// Fractional power of the Pauli-X gate
    ///
    /// X^t = e^{iπt/2} (cos(πt/2) I − i sin(πt/2) X), so the phase portrait
    /// of X^t matches what a t-fraction of a NOT looks like in simulators
    /// that track global phase. `XPow::new(1.0)` is exactly [`PauliX`].
    #[derive(Debug, Clone, Copy)]
    pub struct XPow {
        exponent: f64,
    }

    impl XPow {
        /// Create an X^t gate for the given exponent
        pub fn new(exponent: f64) -> Self {
            Self { exponent }
        }

        /// The exponent t
        pub fn exponent(&self) -> f64 {
            self.exponent
        }
    }

    impl Gate for XPow {
        fn name(&self) -> &str {
            "X^t"
        }

        fn num_qubits(&self) -> usize {
            1
        }

        fn matrix(&self) -> Vec<Complex64> {
            let half_turn = FRAC_PI_2 * self.exponent;
            let phase = Complex64::from_polar(1.0, half_turn);
            let c = phase * half_turn.cos();
            let s = phase * NEG_I * half_turn.sin();
            vec![c, s, s, c]
        }

        fn label(&self) -> String {
            format!("X^{}", self.exponent)
        }
    }

    /// Controlled-NOT gate
    ///
    /// First qubit is the control, second the target.
    #[derive(Debug, Clone, Copy)]
    pub struct CNot;

    impl Gate for CNot {
        fn name(&self) -> &str {
            "CNOT"
        }

        fn num_qubits(&self) -> usize {
            2
        }

        fn matrix(&self) -> Vec<Complex64> {
            vec![
                ONE, ZERO, ZERO, ZERO, //
                ZERO, ONE, ZERO, ZERO, //
                ZERO, ZERO, ZERO, ONE, //
                ZERO, ZERO, ONE, ZERO, //
            ]
        }
    }

    /// Controlled-Z gate
    ///
    /// Symmetric: either qubit can be read as the control.
    #[derive(Debug, Clone, Copy)]
    pub struct CZGate;

    impl Gate for CZGate {
        fn name(&self) -> &str {
            "CZ"
        }

        fn num_qubits(&self) -> usize {
            2
        }

        fn matrix(&self) -> Vec<Complex64> {
            vec![
                ONE, ZERO, ZERO, ZERO, //
                ZERO, ONE, ZERO, ZERO, //
                ZERO, ZERO, ONE, ZERO, //
                ZERO, ZERO, ZERO, NEG_ONE, //
            ]
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_relative_eq;
        use std::f64::consts::PI;

        #[test]
        fn test_hadamard_matrix() {
            let m = Hadamard.matrix();
            assert_eq!(m.len(), 4);
            assert_relative_eq!(m[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
            assert_relative_eq!(m[3].re, -FRAC_1_SQRT_2, epsilon = 1e-12);
        }

        #[test]
        fn test_xpow_full_turn_is_pauli_x() {
            let m = XPow::new(1.0).matrix();
            let x = PauliX.matrix();
            for (a, b) in m.iter().zip(x.iter()) {
                assert_relative_eq!(a.re, b.re, epsilon = 1e-12);
                assert_relative_eq!(a.im, b.im, epsilon = 1e-12);
            }
        }

        #[test]
        fn test_xpow_is_unitary() {
            let m = XPow::new(0.3).matrix();
            // Columns of a 2x2 unitary are orthonormal
            let col0 = m[0].norm_sqr() + m[2].norm_sqr();
            let col1 = m[1].norm_sqr() + m[3].norm_sqr();
            assert_relative_eq!(col0, 1.0, epsilon = 1e-12);
            assert_relative_eq!(col1, 1.0, epsilon = 1e-12);
            let dot = m[0].conj() * m[1] + m[2].conj() * m[3];
            assert_relative_eq!(dot.norm(), 0.0, epsilon = 1e-12);
        }

        #[test]
        fn test_s_gate_squares_to_z() {
            let s = S_MATRIX;
            // S·S diagonal entries
            let d0 = s[0] * s[0];
            let d1 = s[3] * s[3];
            assert_relative_eq!(d0.re, 1.0, epsilon = 1e-12);
            assert_relative_eq!(d1.re, -1.0, epsilon = 1e-12);
        }

        #[test]
        fn test_t_gate_phase() {
            let m = TGate.matrix();
            assert_relative_eq!(m[3].arg(), PI / 4.0, epsilon = 1e-12);
        }

        #[test]
        fn test_xpow_label() {
            let g = XPow::new(0.3);
            assert_eq!(g.label(), "X^0.3");
            assert_eq!(g.name(), "X^t");
        }
    }
}
