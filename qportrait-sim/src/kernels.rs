//! Dense gate application kernels
//!
//! All kernels use big-endian qubit indexing: qubit `q` of an n-qubit state
//! occupies bit `n-1-q` of the amplitude index.

use crate::{Result, SimError};
use num_complex::Complex64;

/// Apply a single-qubit gate (2x2 row-major matrix) to a dense state
///
/// # Errors
/// Returns an error if the qubit index is out of bounds.
pub fn apply_single_qubit(
    matrix: &[Complex64],
    qubit: usize,
    state: &mut [Complex64],
) -> Result<()> {
    let n = state.len();
    let num_qubits = n.trailing_zeros() as usize;
    if qubit >= num_qubits {
        return Err(SimError::InvalidQubit { qubit, num_qubits });
    }

    let stride = 1usize << (num_qubits - 1 - qubit);
    let mut i = 0;
    while i < n {
        for j in 0..stride {
            let idx0 = i + j;
            let idx1 = idx0 + stride;

            let a = state[idx0];
            let b = state[idx1];

            state[idx0] = matrix[0] * a + matrix[1] * b;
            state[idx1] = matrix[2] * a + matrix[3] * b;
        }
        i += stride * 2;
    }
    Ok(())
}

/// Apply a two-qubit gate (4x4 row-major matrix) to a dense state
///
/// The matrix rows/columns are indexed by the two-bit value `(q_a, q_b)`
/// with the first qubit as the high bit.
///
/// # Errors
/// Returns an error if either qubit index is out of bounds or the qubits
/// coincide.
pub fn apply_two_qubit(
    matrix: &[Complex64],
    qubit_a: usize,
    qubit_b: usize,
    state: &mut [Complex64],
) -> Result<()> {
    let n = state.len();
    let num_qubits = n.trailing_zeros() as usize;
    for &q in &[qubit_a, qubit_b] {
        if q >= num_qubits {
            return Err(SimError::InvalidQubit { qubit: q, num_qubits });
        }
    }
    if qubit_a == qubit_b {
        return Err(SimError::InvalidQubit {
            qubit: qubit_a,
            num_qubits,
        });
    }

    let bit_a = 1usize << (num_qubits - 1 - qubit_a);
    let bit_b = 1usize << (num_qubits - 1 - qubit_b);

    for base in 0..n {
        if base & (bit_a | bit_b) != 0 {
            continue;
        }
        let idx = [base, base | bit_b, base | bit_a, base | bit_a | bit_b];
        let v = [state[idx[0]], state[idx[1]], state[idx[2]], state[idx[3]]];
        for (row, &target) in idx.iter().enumerate() {
            let mut acc = Complex64::new(0.0, 0.0);
            for (col, &amp) in v.iter().enumerate() {
                acc += matrix[4 * row + col] * amp;
            }
            state[target] = acc;
        }
    }
    Ok(())
}
