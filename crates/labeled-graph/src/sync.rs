//! Shared ownership of a graph across threads.
//!
//! A [`SharedGraph`] guards one [`LabeledGraph`] with a single reader-writer
//! lock. Every mutating sequence runs under the write lock, so insertions,
//! edge updates and shortest-path relaxation never interleave with reads of
//! the same graph. Independent copies are handed out with
//! [`SharedGraph::snapshot`]; they share no storage with the guarded graph.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::algorithms::ShortestPathConfig;
use crate::models::LabeledGraph;

/// Cloneable handle to a lock-protected graph.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<LabeledGraph>>,
}

impl SharedGraph {
    /// Wrap `graph` for shared access.
    pub fn new(graph: LabeledGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<R>(&self, f: impl FnOnce(&LabeledGraph) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive write access.
    ///
    /// The lock is held for the whole closure, so a sequence of mutations
    /// inside it is observed atomically by readers.
    pub fn write<R>(&self, f: impl FnOnce(&mut LabeledGraph) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Deep copy of the current graph.
    pub fn snapshot(&self) -> LabeledGraph {
        self.inner.read().clone()
    }

    /// Shortest-path closure of the current graph.
    ///
    /// The graph is copied under the read lock and relaxed after the lock is
    /// released, so writers are not blocked for the O(n³) computation.
    pub fn shortest_paths(&self) -> LabeledGraph {
        self.shortest_paths_with_config(&ShortestPathConfig::default())
    }

    /// Shortest-path closure with configuration.
    pub fn shortest_paths_with_config(&self, config: &ShortestPathConfig) -> LabeledGraph {
        let mut closure = self.snapshot();
        closure.add_shortest_paths_with_config(config);
        closure
    }

    /// Unwrap the graph if this is the last handle.
    pub fn try_into_inner(self) -> Result<LabeledGraph, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl From<LabeledGraph> for SharedGraph {
    fn from(graph: LabeledGraph) -> Self {
        Self::new(graph)
    }
}
