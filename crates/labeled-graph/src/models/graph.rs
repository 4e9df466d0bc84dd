//! Labeled weighted graph with dense storage.
//!
//! Nodes are addressed by string keys externally and by dense
//! [`NodeIndex`] values internally:
//! - `index[key]` = position of the node in every parallel store
//! - `keys[i]`, `values[i]` = key and payload of node `i`
//! - `edges` = `order x order` weight matrix, row = source, column = target

use std::collections::HashMap;

use super::matrix::EdgeMatrix;
use super::node::{EdgeWeight, NodeIndex};
use crate::{GraphError, KeyRole, Result};

/// Directed weighted graph keyed by strings, with one integer value per node.
///
/// The graph only grows: nodes are never removed and an edge, once set,
/// can be overwritten with another weight but never cleared. `clone()`
/// produces a fully independent copy.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    index: HashMap<String, NodeIndex>,
    keys: Vec<String>,
    values: Vec<i64>,
    edges: EdgeMatrix,
}

impl LabeledGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            edges: EdgeMatrix::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys ordered by index.
    pub fn keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    /// Check if a node with `key` exists.
    pub fn has_node(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Index assigned to `key`.
    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }

    /// Key stored at `index`.
    pub fn key_of(&self, index: NodeIndex) -> Option<&str> {
        self.keys.get(index.as_usize()).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in index order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Read-only view of the weight matrix.
    pub fn edges(&self) -> &EdgeMatrix {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut EdgeMatrix {
        &mut self.edges
    }

    /// Insert a new node.
    ///
    /// The node gets the next free index and no edges. Fails with
    /// [`GraphError::DuplicateKey`] if `key` is already present, leaving the
    /// graph untouched.
    pub fn add_node(&mut self, key: impl Into<String>, value: i64) -> Result<NodeIndex> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(GraphError::DuplicateKey(key));
        }

        let idx = self.edges.grow();
        debug_assert_eq!(idx.as_usize(), self.keys.len());

        tracing::trace!(key = %key, index = idx.get(), value, "Node added");

        self.index.insert(key.clone(), idx);
        self.keys.push(key);
        self.values.push(value);
        Ok(idx)
    }

    /// Overwrite the value of an existing node. Edges are not affected.
    pub fn set_node(&mut self, key: &str, value: i64) -> Result<()> {
        let idx = self.lookup(key, KeyRole::Node)?;
        self.values[idx.as_usize()] = value;
        Ok(())
    }

    /// Insert `key` with `value`, or overwrite the value if it already exists.
    pub fn upsert_node(&mut self, key: &str, value: i64) -> Result<NodeIndex> {
        match self.index_of(key) {
            Some(idx) => {
                self.values[idx.as_usize()] = value;
                Ok(idx)
            }
            None => self.add_node(key, value),
        }
    }

    /// Set the directed edge `source -> target`, replacing any previous weight.
    ///
    /// Fails with [`GraphError::UnknownKey`] naming the missing side, or with
    /// [`GraphError::ReservedWeight`] if `weight` is the no-edge sentinel.
    pub fn set_edge(&mut self, source: &str, target: &str, weight: i64) -> Result<()> {
        let from = self.lookup(source, KeyRole::Source)?;
        let to = self.lookup(target, KeyRole::Target)?;
        let weight = EdgeWeight::new(weight);
        if weight.is_none() {
            return Err(GraphError::ReservedWeight(weight.0));
        }
        self.edges.set(from, to, weight)
    }

    /// Set both `a -> b` and `b -> a` to `weight`.
    ///
    /// The two directions are applied in that order. If the second fails its
    /// error is returned and the first direction stays set.
    pub fn set_edge_undirected(&mut self, a: &str, b: &str, weight: i64) -> Result<()> {
        self.set_edge(a, b, weight)?;
        self.set_edge(b, a, weight)
    }

    /// Value of the node `key`.
    pub fn node(&self, key: &str) -> Result<i64> {
        let idx = self.lookup(key, KeyRole::Node)?;
        Ok(self.values[idx.as_usize()])
    }

    /// Weight of the directed edge `source -> target`, or
    /// [`EdgeWeight::NONE`] if there is none.
    pub fn edge(&self, source: &str, target: &str) -> Result<EdgeWeight> {
        let from = self.lookup(source, KeyRole::Source)?;
        let to = self.lookup(target, KeyRole::Target)?;
        Ok(self.edges.at(from.as_usize(), to.as_usize()))
    }

    /// Keys whose `(key, value)` pair satisfies `predicate`, in index order.
    pub fn filter_nodes<F>(&self, mut predicate: F) -> Vec<String>
    where
        F: FnMut(&str, i64) -> bool,
    {
        self.nodes()
            .filter(|&(key, value)| predicate(key, value))
            .map(|(key, _)| key.to_string())
            .collect()
    }

    fn lookup(&self, key: &str, role: KeyRole) -> Result<NodeIndex> {
        self.index_of(key).ok_or_else(|| GraphError::UnknownKey {
            key: key.to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_graph(nodes: &[(&str, i64)]) -> LabeledGraph {
        let mut g = LabeledGraph::new();
        for &(key, value) in nodes {
            g.add_node(key, value).unwrap();
        }
        g
    }

    #[test]
    fn test_empty_graph() {
        let g = LabeledGraph::new();
        assert_eq!(g.size(), 0);
        assert!(g.is_empty());
        assert!(g.keys().is_empty());
        assert!(!g.has_node("A"));
    }

    #[test]
    fn test_growth_invariant() {
        let g = make_graph(&[("C", 1), ("A", 2), ("B", 3)]);

        assert_eq!(g.size(), 3);
        assert_eq!(g.keys(), vec!["C", "A", "B"]);
        assert_eq!(g.edges().order(), 3);

        for a in g.keys() {
            for b in g.keys() {
                assert_eq!(g.edge(&a, &b).unwrap(), EdgeWeight::NONE);
            }
        }
    }

    #[test]
    fn test_indices_follow_insertion_order() {
        let g = make_graph(&[("X", 0), ("Y", 0)]);
        assert_eq!(g.index_of("X"), Some(NodeIndex(0)));
        assert_eq!(g.index_of("Y"), Some(NodeIndex(1)));
        assert_eq!(g.key_of(NodeIndex(1)), Some("Y"));
        assert_eq!(g.key_of(NodeIndex(2)), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut g = make_graph(&[("A", 1), ("B", 2)]);
        g.set_edge("A", "B", 4).unwrap();

        let result = g.add_node("A", 99);
        assert!(matches!(result, Err(GraphError::DuplicateKey(ref k)) if k == "A"));

        assert_eq!(g.size(), 2);
        assert_eq!(g.keys(), vec!["A", "B"]);
        assert_eq!(g.node("A").unwrap(), 1);
        assert_eq!(g.edge("A", "B").unwrap(), EdgeWeight(4));
        assert_eq!(g.edge("B", "A").unwrap(), EdgeWeight::NONE);
    }

    #[test]
    fn test_set_node() {
        let mut g = make_graph(&[("A", 1)]);
        g.set_node("A", 20).unwrap();
        assert_eq!(g.node("A").unwrap(), 20);

        let result = g.set_node("Z", 1);
        assert!(matches!(
            result,
            Err(GraphError::UnknownKey { role: KeyRole::Node, .. })
        ));
    }

    #[test]
    fn test_upsert_node() {
        let mut g = LabeledGraph::new();
        let a = g.upsert_node("A", 0).unwrap();
        let again = g.upsert_node("A", 13).unwrap();

        assert_eq!(a, again);
        assert_eq!(g.size(), 1);
        assert_eq!(g.node("A").unwrap(), 13);
    }

    #[test]
    fn test_set_edge_directed() {
        let mut g = make_graph(&[("A", 0), ("B", 0)]);
        g.set_edge("A", "B", 5).unwrap();

        assert_eq!(g.edge("A", "B").unwrap(), EdgeWeight(5));
        assert_eq!(g.edge("B", "A").unwrap(), EdgeWeight::NONE);

        // Overwrite
        g.set_edge("A", "B", 2).unwrap();
        assert_eq!(g.edge("A", "B").unwrap(), EdgeWeight(2));
    }

    #[test]
    fn test_set_edge_unknown_side() {
        let mut g = make_graph(&[("A", 0)]);

        let err = g.set_edge("Q", "A", 1).unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnknownKey { ref key, role: KeyRole::Source } if key == "Q"
        ));

        let err = g.set_edge("A", "R", 1).unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnknownKey { ref key, role: KeyRole::Target } if key == "R"
        ));
    }

    #[test]
    fn test_reserved_weight_rejected() {
        let mut g = make_graph(&[("A", 0), ("B", 0)]);
        g.set_edge("A", "B", 3).unwrap();

        let result = g.set_edge("A", "B", i64::MAX);
        assert!(matches!(result, Err(GraphError::ReservedWeight(_))));
        assert_eq!(g.edge("A", "B").unwrap(), EdgeWeight(3));
    }

    #[test]
    fn test_undirected_symmetry() {
        let mut g = make_graph(&[("A", 0), ("B", 0)]);
        g.set_edge_undirected("A", "B", 7).unwrap();

        assert_eq!(g.edge("A", "B").unwrap(), EdgeWeight(7));
        assert_eq!(g.edge("B", "A").unwrap(), EdgeWeight(7));
    }

    #[test]
    fn test_undirected_missing_endpoint() {
        let mut g = make_graph(&[("A", 0)]);
        let result = g.set_edge_undirected("A", "B", 1);
        assert!(matches!(
            result,
            Err(GraphError::UnknownKey { role: KeyRole::Target, .. })
        ));
        assert_eq!(g.edges().num_edges(), 0);
    }

    #[test]
    fn test_node_and_edge_unknown() {
        let g = make_graph(&[("A", 0)]);
        assert!(g.node("B").is_err());
        assert!(g.edge("A", "B").is_err());
        assert!(g.edge("B", "A").is_err());
    }

    #[test]
    fn test_filter_nodes() {
        let g = make_graph(&[("A", 0), ("B", 3), ("C", 0)]);
        let positive = g.filter_nodes(|_, value| value > 0);
        assert_eq!(positive, vec!["B"]);

        let by_key = g.filter_nodes(|key, _| key != "B");
        assert_eq!(by_key, vec!["A", "C"]);
    }

    #[test]
    fn test_clone_independence() {
        let mut original = make_graph(&[("A", 1), ("B", 2)]);
        original.set_edge("A", "B", 1).unwrap();

        let mut copy = original.clone();
        copy.set_node("A", 100).unwrap();
        copy.set_edge("A", "B", 50).unwrap();
        copy.add_node("C", 0).unwrap();

        assert_eq!(original.node("A").unwrap(), 1);
        assert_eq!(original.edge("A", "B").unwrap(), EdgeWeight(1));
        assert!(!original.has_node("C"));

        original.set_edge("B", "A", 9).unwrap();
        assert_eq!(copy.edge("B", "A").unwrap(), EdgeWeight::NONE);
    }

    #[test]
    fn test_nodes_iterator() {
        let g = make_graph(&[("A", 4), ("B", 5)]);
        let pairs: Vec<_> = g.nodes().collect();
        assert_eq!(pairs, vec![("A", 4), ("B", 5)]);
    }
}
