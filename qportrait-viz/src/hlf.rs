//! The hidden linear function problem
//!
//! A strictly upper-triangular 0/1 matrix A and a binary vector b define
//! the mod-4 quadratic form q(x) = 2·xᵀAx + b·x. Restricted to the
//! subspace L_q on which it is additive, q hides a linear function
//! q(x) = 2·z·x, and the problem is to find such a z. Two solvers live
//! here: brute force over all binary vectors, and the constant-depth
//! circuit that encodes A through CZ moments scheduled by
//! [`edge_coloring`] and b through S gates, every measurement of which
//! yields a valid z.

use crate::schedule::{edge_coloring, AdjacencyMatrix};
use crate::{Result, VizError};
use qportrait_core::{gates, Circuit, GateOp, Moment, QubitId};
use qportrait_sim::Simulator;
use rand::Rng;
use std::sync::Arc;

/// One instance of the hidden linear function problem
///
/// # Example
/// ```
/// use qportrait_viz::{AdjacencyMatrix, HiddenLinearFunctionProblem};
///
/// let a = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
/// let problem = HiddenLinearFunctionProblem::new(a, vec![1, 0]).unwrap();
/// assert_eq!(problem.quadratic_form(&[1, 1]), 3); // 2·1 + 1 mod 4
/// ```
#[derive(Debug, Clone)]
pub struct HiddenLinearFunctionProblem {
    matrix: AdjacencyMatrix,
    linear: Vec<u8>,
}

/// Everything the brute-force solver finds about an instance
#[derive(Debug, Clone)]
pub struct BruteforceSolution {
    /// The vectors of L_q, the subspace where the form is additive
    pub subspace: Vec<Vec<u8>>,
    /// Every z satisfying q(x) = 2·z·x on that subspace
    pub solutions: Vec<Vec<u8>>,
}

impl HiddenLinearFunctionProblem {
    /// Define a problem from quadratic coefficients A and linear
    /// coefficients b
    ///
    /// # Errors
    /// Returns [`VizError::InvalidProblem`] when b's length does not match
    /// the matrix, b has entries other than 0/1, or the instance has zero
    /// variables.
    pub fn new(matrix: AdjacencyMatrix, linear: Vec<u8>) -> Result<Self> {
        let n = matrix.size();
        if n == 0 {
            return Err(VizError::invalid_problem("need at least one variable"));
        }
        if linear.len() != n {
            return Err(VizError::invalid_problem(format!(
                "linear coefficients have length {}, expected {}",
                linear.len(),
                n
            )));
        }
        if let Some(i) = linear.iter().position(|&bit| bit > 1) {
            return Err(VizError::invalid_problem(format!(
                "linear coefficient {} is {}, expected 0 or 1",
                i, linear[i]
            )));
        }
        Ok(Self { matrix, linear })
    }

    /// Number of variables (qubits in the circuit solver)
    pub fn num_variables(&self) -> usize {
        self.matrix.size()
    }

    /// The quadratic coefficients A
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// The linear coefficients b
    pub fn linear(&self) -> &[u8] {
        &self.linear
    }

    /// Evaluate q(x) = 2·xᵀAx + b·x mod 4 on a binary vector
    ///
    /// `x` must have one 0/1 entry per variable; that is the caller's
    /// precondition.
    pub fn quadratic_form(&self, x: &[u8]) -> u8 {
        debug_assert_eq!(x.len(), self.num_variables());
        let n = self.num_variables();
        let mut total = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.matrix.get(i, j) == 1 {
                    total += 2 * (x[i] & x[j]) as usize;
                }
            }
        }
        for (xi, bi) in x.iter().zip(&self.linear) {
            total += (xi & bi) as usize;
        }
        (total % 4) as u8
    }

    /// Solve the instance by definition, trying every binary vector
    ///
    /// Enumerates L_q (the x where q(x⊕y) = q(x) + q(y) mod 4 for all y)
    /// and then every z consistent with it. Exponential in the number of
    /// variables; meant for small instances and for certifying the circuit
    /// solver.
    pub fn bruteforce_solve(&self) -> BruteforceSolution {
        let n = self.num_variables();
        let total = 1usize << n;
        let edges = self.matrix.edges();
        let linear_mask = bits_to_mask(&self.linear);

        // q over all vectors once; masks index variable i at bit i
        let form: Vec<u8> = (0..total)
            .map(|m| {
                let quad = edges
                    .iter()
                    .filter(|&&(i, j)| m >> i & 1 == 1 && m >> j & 1 == 1)
                    .count();
                let lin = (m & linear_mask).count_ones() as usize;
                ((2 * quad + lin) % 4) as u8
            })
            .collect();

        let subspace: Vec<usize> = (0..total)
            .filter(|&x| (0..total).all(|y| form[x ^ y] == (form[x] + form[y]) % 4))
            .collect();

        let solutions: Vec<usize> = (0..total)
            .filter(|&z| {
                subspace
                    .iter()
                    .all(|&x| form[x] == 2 * ((z & x).count_ones() % 2) as u8)
            })
            .collect();

        BruteforceSolution {
            subspace: subspace.into_iter().map(|m| mask_to_bits(m, n)).collect(),
            solutions: solutions.into_iter().map(|m| mask_to_bits(m, n)).collect(),
        }
    }

    /// Whether `z` solves this instance, given the enumerated subspace
    pub fn is_solution(&self, z: &[u8], subspace: &[Vec<u8>]) -> bool {
        subspace.iter().all(|x| {
            let dot = z.iter().zip(x).fold(0u8, |acc, (zi, xi)| acc ^ (zi & xi));
            self.quadratic_form(x) == 2 * dot
        })
    }
}

fn bits_to_mask(bits: &[u8]) -> usize {
    bits.iter()
        .enumerate()
        .fold(0usize, |mask, (i, &bit)| mask | ((bit as usize) << i))
}

fn mask_to_bits(mask: usize, n: usize) -> Vec<u8> {
    (0..n).map(|i| (mask >> i & 1) as u8).collect()
}

/// Draw a random problem instance on `n` variables
///
/// Every strictly-upper-triangular entry of A and every entry of b is an
/// independent fair coin flip.
///
/// # Errors
/// Fails when `n` is zero.
pub fn random_problem<R: Rng>(n: usize, rng: &mut R) -> Result<HiddenLinearFunctionProblem> {
    let mut matrix = AdjacencyMatrix::zeros(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_range(0..=1) == 1 {
                matrix.set_edge(i, j)?;
            }
        }
    }
    let linear = (0..n).map(|_| rng.gen_range(0..=1u8)).collect();
    HiddenLinearFunctionProblem::new(matrix, linear)
}

/// Search for an instance whose subspace L_q has at least `min_subspace`
/// vectors
///
/// Draws up to 1000 random instances and returns the first with a large
/// enough subspace and at least one edge, or `None` when the budget runs
/// out. Larger subspaces make the hidden function harder to find
/// classically, which is what makes an instance interesting to illustrate.
///
/// # Errors
/// Fails when `n` is zero.
pub fn find_interesting_problem<R: Rng>(
    n: usize,
    min_subspace: usize,
    rng: &mut R,
) -> Result<Option<HiddenLinearFunctionProblem>> {
    for _ in 0..1000 {
        let problem = random_problem(n, rng)?;
        if problem.matrix().num_edges() == 0 {
            continue;
        }
        if problem.bruteforce_solve().subspace.len() >= min_subspace {
            return Ok(Some(problem));
        }
    }
    Ok(None)
}

/// Build the circuit that solves a problem instance
///
/// One Hadamard moment over all qubits, one CZ moment per
/// [`edge_coloring`] layer of A, one S moment on the qubits where b is 1,
/// and a closing Hadamard moment. The S moment is kept even when b is all
/// zero, so instances sharing a matrix produce step sequences of the same
/// shape. Terminal measurement is sampling in the simulator, not a gate.
///
/// # Errors
/// Fails when circuit assembly rejects an operation.
pub fn circuit_for_problem(problem: &HiddenLinearFunctionProblem) -> Result<Circuit> {
    let n = problem.num_variables();
    let mut circuit = Circuit::new(n);

    let mut opening = Moment::new();
    for q in 0..n {
        opening.push(GateOp::new(Arc::new(gates::Hadamard), &[QubitId::new(q)])?)?;
    }
    circuit.push_moment(opening)?;

    for layer in edge_coloring(problem.matrix()) {
        let mut moment = Moment::new();
        for (i, j) in layer {
            moment.push(GateOp::new(
                Arc::new(gates::CZGate),
                &[QubitId::new(i), QubitId::new(j)],
            )?)?;
        }
        circuit.push_moment(moment)?;
    }

    let mut phases = Moment::new();
    for (q, &bit) in problem.linear().iter().enumerate() {
        if bit == 1 {
            phases.push(GateOp::new(Arc::new(gates::SGate), &[QubitId::new(q)])?)?;
        }
    }
    circuit.push_moment(phases)?;

    let mut closing = Moment::new();
    for q in 0..n {
        closing.push(GateOp::new(Arc::new(gates::Hadamard), &[QubitId::new(q)])?)?;
    }
    circuit.push_moment(closing)?;

    Ok(circuit)
}

/// Solve a problem instance on the simulator
///
/// Builds the circuit, simulates it, and samples the final state once.
/// Every basis state with nonzero amplitude at the end is a valid z, so a
/// single sample suffices.
///
/// # Errors
/// Fails when circuit assembly or simulation fails.
pub fn solve_problem<R: Rng>(
    problem: &HiddenLinearFunctionProblem,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let circuit = circuit_for_problem(problem)?;
    let simulator = Simulator::new();
    let state = simulator.run(&circuit)?;
    Ok(simulator.sample(&state, rng))
}
