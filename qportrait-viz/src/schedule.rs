//! Gate scheduling by greedy edge coloring
//!
//! A strictly upper-triangular 0/1 adjacency matrix describes which qubit
//! pairs receive a two-qubit gate. [`edge_coloring`] partitions those edges
//! into layers with no shared vertex inside a layer, so each layer can run
//! as one circuit moment. The partition is greedy (row-major, first fit,
//! one pass per layer), which makes the output deterministic; the layer
//! count is a heuristic minimum, not a proven optimum.

use crate::{Result, VizError};

/// Validated gate adjacency matrix
///
/// Square, 0/1, strictly upper triangular: `a[i][j]` is meaningful only for
/// `i < j`. Invalid input is rejected at construction; the scheduler never
/// guesses an intended graph.
///
/// # Example
/// ```
/// use qportrait_viz::{edge_coloring, AdjacencyMatrix};
///
/// let a = AdjacencyMatrix::from_rows(&[
///     vec![0, 1],
///     vec![0, 0],
/// ]).unwrap();
/// let layers = edge_coloring(&a);
/// assert_eq!(layers, vec![vec![(0, 1)]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    data: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Create an all-zero matrix on `n` vertices
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Build a matrix from rows, validating shape and content
    ///
    /// # Errors
    /// Returns [`VizError::InvalidAdjacencyMatrix`] if the rows are not
    /// square, contain entries other than 0/1, or have a nonzero entry on
    /// or below the diagonal.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(VizError::invalid_matrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &entry) in row.iter().enumerate() {
                if entry > 1 {
                    return Err(VizError::invalid_matrix(format!(
                        "entry ({}, {}) is {}, expected 0 or 1",
                        i, j, entry
                    )));
                }
                if entry == 1 && j <= i {
                    return Err(VizError::invalid_matrix(format!(
                        "entry ({}, {}) is on or below the diagonal",
                        i, j
                    )));
                }
            }
        }

        let mut matrix = Self::zeros(n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate() {
                matrix.data[i * n + j] = entry;
            }
        }
        Ok(matrix)
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.n
    }

    /// Entry at (i, j)
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.data[i * self.n + j]
    }

    /// Mark the edge (i, j)
    ///
    /// # Errors
    /// Returns error unless `i < j < n`.
    pub fn set_edge(&mut self, i: usize, j: usize) -> Result<()> {
        if j >= self.n || i >= j {
            return Err(VizError::invalid_matrix(format!(
                "edge ({}, {}) is not strictly upper triangular in a {}x{} matrix",
                i, j, self.n, self.n
            )));
        }
        self.data[i * self.n + j] = 1;
        Ok(())
    }

    /// All edges (i, j) with a 1 entry, in row-major order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..self.n {
            for j in 0..self.n {
                if self.get(i, j) == 1 {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Total number of edges
    pub fn num_edges(&self) -> usize {
        self.data.iter().filter(|&&e| e == 1).count()
    }
}

/// Partition the matrix's edges into vertex-disjoint layers
///
/// Repeatedly scans (i, j) pairs in row-major order, building one layer per
/// pass by accepting every edge whose endpoints are still free in that
/// pass, until no edges remain. Works on a private copy; the input is never
/// mutated. An all-zero matrix yields zero layers. Terminates because every
/// pass removes at least one edge.
pub fn edge_coloring(a: &AdjacencyMatrix) -> Vec<Vec<(usize, usize)>> {
    let n = a.size();
    let mut remaining = a.clone();
    let mut layers = Vec::new();

    while remaining.num_edges() > 0 {
        let mut layer = Vec::new();
        let mut used = vec![false; n];
        for i in 0..n {
            for j in 0..n {
                if remaining.get(i, j) == 1 && !used[i] && !used[j] {
                    layer.push((i, j));
                    remaining.data[i * n + j] = 0;
                    used[i] = true;
                    used[j] = true;
                }
            }
        }
        layers.push(layer);
    }
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn triangle() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(&[vec![0, 1, 1], vec![0, 0, 1], vec![0, 0, 0]]).unwrap()
    }

    #[test]
    fn test_zero_matrix_yields_no_layers() {
        let a = AdjacencyMatrix::zeros(4);
        assert!(edge_coloring(&a).is_empty());
    }

    #[test]
    fn test_single_edge() {
        let a = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        let layers = edge_coloring(&a);
        assert_eq!(layers, vec![vec![(0, 1)]]);
    }

    #[test]
    fn test_triangle_layers_are_greedy_deterministic() {
        // Every pair of triangle edges shares a vertex, so layers are
        // singletons and the row-major greedy order is fixed
        let layers = edge_coloring(&triangle());
        assert_eq!(
            layers,
            vec![vec![(0, 1)], vec![(0, 2)], vec![(1, 2)]]
        );
    }

    #[test]
    fn test_union_of_layers_is_edge_set() {
        let a = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 1, 0],
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();

        let layers = edge_coloring(&a);
        let mut seen = HashSet::new();
        for layer in &layers {
            let mut used = HashSet::new();
            for &(i, j) in layer {
                assert!(used.insert(i), "vertex {} repeated in a layer", i);
                assert!(used.insert(j), "vertex {} repeated in a layer", j);
                assert!(seen.insert((i, j)), "edge ({}, {}) duplicated", i, j);
            }
        }
        let expected: HashSet<_> = a.edges().into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_input_not_mutated() {
        let a = triangle();
        let before = a.clone();
        let _ = edge_coloring(&a);
        assert_eq!(a, before);
    }

    #[test]
    fn test_layer_count_stays_small() {
        // Max degree 3 on 4 vertices; greedy needs 3 layers here
        let a = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 1, 0],
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let layers = edge_coloring(&a);
        assert!(layers.len() <= 3, "got {} layers", layers.len());
        assert_eq!(layers.iter().map(|l| l.len()).sum::<usize>(), a.num_edges());
    }

    #[test]
    fn test_worst_case_bound_is_two_delta_minus_one() {
        // Every pass takes a maximal matching, so an edge (u, v) can wait
        // at most deg(u) + deg(v) - 2 passes: never more than 2Δ-1 layers.
        // K5 actually reaches 7 under row-major order.
        let n = 5;
        let mut rows = vec![vec![0u8; n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                if j > i {
                    *entry = 1;
                }
            }
        }
        let a = AdjacencyMatrix::from_rows(&rows).unwrap();
        let layers = edge_coloring(&a);
        assert!(layers.len() <= 2 * (n - 1) - 1);
        assert_eq!(layers.iter().map(|l| l.len()).sum::<usize>(), a.num_edges());
    }

    #[test]
    fn test_relabeling_keeps_layer_count_close() {
        // Path 0-1-2-3 and the same path relabeled (0,1,2,3) -> (1,3,0,2)
        let path = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let relabeled = AdjacencyMatrix::from_rows(&[
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(edge_coloring(&path).len(), edge_coloring(&relabeled).len());
    }

    #[test]
    fn test_rejects_non_square() {
        let result = AdjacencyMatrix::from_rows(&[vec![0, 1]]);
        assert!(matches!(result, Err(VizError::InvalidAdjacencyMatrix { .. })));
    }

    #[test]
    fn test_rejects_lower_triangle_entry() {
        let result = AdjacencyMatrix::from_rows(&[vec![0, 0], vec![1, 0]]);
        assert!(matches!(result, Err(VizError::InvalidAdjacencyMatrix { .. })));
    }

    #[test]
    fn test_rejects_diagonal_entry() {
        let result = AdjacencyMatrix::from_rows(&[vec![1, 0], vec![0, 0]]);
        assert!(matches!(result, Err(VizError::InvalidAdjacencyMatrix { .. })));
    }

    #[test]
    fn test_rejects_non_binary_entry() {
        let result = AdjacencyMatrix::from_rows(&[vec![0, 2], vec![0, 0]]);
        assert!(matches!(result, Err(VizError::InvalidAdjacencyMatrix { .. })));
    }

    #[test]
    fn test_set_edge_bounds() {
        let mut a = AdjacencyMatrix::zeros(3);
        a.set_edge(0, 2).unwrap();
        assert_eq!(a.get(0, 2), 1);
        assert!(a.set_edge(2, 0).is_err());
        assert!(a.set_edge(1, 1).is_err());
        assert!(a.set_edge(0, 3).is_err());
    }
}
