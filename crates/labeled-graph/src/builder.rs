//! Incremental graph construction from node records.
//!
//! Input formats that describe a graph as a list of
//! `(key, value, neighbor keys)` records often mention a neighbor before
//! its own record appears. [`GraphBuilder`] applies such records in order:
//! a node record inserts or updates its value, and a neighbor that has not
//! been seen yet is inserted with value 0 so its edge can be recorded
//! immediately.

use crate::models::LabeledGraph;
use crate::{GraphError, KeyRole, Result};

/// Builder applying node and neighbor-list requests to a [`LabeledGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: LabeledGraph,
}

impl GraphBuilder {
    /// Create a builder over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on top of an existing graph.
    pub fn from_graph(graph: LabeledGraph) -> Self {
        Self { graph }
    }

    /// Insert `key` with `value`, or overwrite the value of an existing node.
    pub fn node(&mut self, key: &str, value: i64) -> &mut Self {
        // Upsert cannot fail: the key is either updated or freshly inserted
        let _ = self.graph.upsert_node(key, value);
        self
    }

    /// Connect `key` to each of `neighbors` with undirected edges of `weight`.
    ///
    /// Neighbors not yet in the graph are inserted with value 0. `key`
    /// itself must already exist.
    pub fn link<S: AsRef<str>>(
        &mut self,
        key: &str,
        neighbors: &[S],
        weight: i64,
    ) -> Result<&mut Self> {
        if !self.graph.has_node(key) {
            return Err(GraphError::UnknownKey {
                key: key.to_string(),
                role: KeyRole::Source,
            });
        }
        for neighbor in neighbors {
            let neighbor = neighbor.as_ref();
            if !self.graph.has_node(neighbor) {
                self.graph.add_node(neighbor, 0)?;
            }
            self.graph.set_edge_undirected(key, neighbor, weight)?;
        }
        Ok(self)
    }

    /// Apply one full record: upsert `key` with `value`, then link its neighbors.
    pub fn record<S: AsRef<str>>(
        &mut self,
        key: &str,
        value: i64,
        neighbors: &[S],
        weight: i64,
    ) -> Result<&mut Self> {
        self.node(key, value);
        self.link(key, neighbors, weight)
    }

    /// Graph built so far.
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    /// Finish building.
    pub fn build(self) -> LabeledGraph {
        tracing::debug!(
            nodes = self.graph.size(),
            edges = self.graph.edges().num_edges(),
            "Graph built"
        );
        self.graph
    }
}
