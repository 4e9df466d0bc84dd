//! All-pairs shortest paths (Floyd–Warshall).
//!
//! Relaxes every ordered pair `(i, j)` through every intermediate node `k`
//! in index order. The weight matrix is rewritten in place: afterwards
//! `matrix[i][j]` holds the shortest directed distance from `i` to `j`, or
//! [`EdgeWeight::NONE`] when `j` is unreachable from `i`.
//!
//! Weights are expected to be non-negative. Negative cycles are not
//! detected.

use rayon::prelude::*;

use crate::models::{EdgeMatrix, EdgeWeight, LabeledGraph};

/// Shortest-path configuration.
#[derive(Debug, Clone)]
pub struct ShortestPathConfig {
    /// Relax rows of each round in parallel.
    pub parallel: bool,
    /// Minimum order before the parallel path is taken.
    pub parallel_threshold: usize,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 128,
        }
    }
}

impl ShortestPathConfig {
    /// Create new shortest-path configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable parallel execution.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Set the minimum order for parallel execution.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Sequential Floyd–Warshall over `matrix`, in place.
///
/// O(n³) time, no extra storage.
pub fn floyd_warshall(matrix: &mut EdgeMatrix) {
    floyd_warshall_with_config(matrix, &ShortestPathConfig::default());
}

/// Parallel Floyd–Warshall over `matrix`, in place.
///
/// Rows are relaxed concurrently within each round once the matrix order
/// reaches the default threshold.
pub fn floyd_warshall_parallel(matrix: &mut EdgeMatrix) {
    floyd_warshall_with_config(matrix, &ShortestPathConfig::default().parallel());
}

/// Floyd–Warshall with configuration.
pub fn floyd_warshall_with_config(matrix: &mut EdgeMatrix, config: &ShortestPathConfig) {
    let n = matrix.order();
    if n == 0 {
        return;
    }

    let parallel = config.parallel && n >= config.parallel_threshold;
    tracing::debug!(nodes = n, parallel, "Computing all-pairs shortest paths");

    for i in 0..n {
        matrix.put(i, i, EdgeWeight::ZERO);
    }

    if parallel {
        relax_parallel_impl(matrix);
    } else {
        relax_sequential_impl(matrix);
    }

    tracing::debug!(nodes = n, reachable = matrix.num_edges(), "Shortest paths complete");
}

/// Store `candidate` in `slot` if it is shorter than the current entry.
#[inline]
fn relax(slot: &mut EdgeWeight, candidate: EdgeWeight) {
    if slot.is_none() || *slot > candidate {
        *slot = candidate;
    }
}

fn relax_sequential_impl(matrix: &mut EdgeMatrix) {
    let n = matrix.order();

    for k in 0..n {
        for i in 0..n {
            let ik = matrix.at(i, k);
            if ik.is_none() {
                continue;
            }
            for j in 0..n {
                let Some(through_k) = ik.join(matrix.at(k, j)) else {
                    continue;
                };
                let mut ij = matrix.at(i, j);
                relax(&mut ij, through_k);
                matrix.put(i, j, ij);
            }
        }
    }
}

/// Row-parallel relaxation using rayon.
///
/// Within round `k` only row `k` is read across rows. With `dist[k][k] = 0`
/// the round cannot change row `k`, so a snapshot of it taken before the
/// round gives the same result as the sequential order.
fn relax_parallel_impl(matrix: &mut EdgeMatrix) {
    let n = matrix.order();
    let mut pivot = vec![EdgeWeight::NONE; n];

    for k in 0..n {
        for (j, slot) in pivot.iter_mut().enumerate() {
            *slot = matrix.at(k, j);
        }

        let (rows, stride) = matrix.rows_mut();
        rows.par_chunks_mut(stride).for_each(|row| {
            let ik = row[k];
            if ik.is_none() {
                return;
            }
            for (slot, &kj) in row[..n].iter_mut().zip(&pivot) {
                if let Some(through_k) = ik.join(kj) {
                    relax(slot, through_k);
                }
            }
        });
    }
}

impl LabeledGraph {
    /// Replace every edge weight with the shortest directed distance.
    ///
    /// This discards the direct-edge topology; use
    /// [`LabeledGraph::shortest_paths`] to keep the original graph.
    pub fn add_shortest_paths(&mut self) {
        floyd_warshall(self.edges_mut());
    }

    /// In-place shortest paths with configuration.
    pub fn add_shortest_paths_with_config(&mut self, config: &ShortestPathConfig) {
        floyd_warshall_with_config(self.edges_mut(), config);
    }

    /// Independent copy of this graph with edges replaced by shortest distances.
    pub fn shortest_paths(&self) -> LabeledGraph {
        let mut closure = self.clone();
        closure.add_shortest_paths();
        closure
    }
}
