//! Integration tests for graph construction, queries and cloning.

use labeled_graph::prelude::*;

fn graph_with(nodes: &[(&str, i64)]) -> LabeledGraph {
    let mut g = LabeledGraph::new();
    for &(key, value) in nodes {
        g.add_node(key, value).unwrap();
    }
    g
}

/// Test that every insertion grows keys, values and the matrix together.
#[test]
fn test_growth_invariant() {
    let keys: Vec<String> = (0..20).map(|i| format!("K{:02}", 19 - i)).collect();

    let mut g = LabeledGraph::new();
    for (n, key) in keys.iter().enumerate() {
        let idx = g.add_node(key.as_str(), n as i64).unwrap();
        assert_eq!(idx, NodeIndex::from(n));
        assert_eq!(g.size(), n + 1);
        assert_eq!(g.edges().order(), n + 1);
    }

    assert_eq!(g.keys(), keys);
    for a in &keys {
        for b in &keys {
            assert_eq!(g.edge(a, b).unwrap(), EdgeWeight::NONE);
        }
    }
}

/// Test that a duplicate insert changes nothing.
#[test]
fn test_duplicate_rejection() {
    let mut g = graph_with(&[("A", 1), ("B", 2), ("C", 3)]);
    g.set_edge_undirected("A", "C", 4).unwrap();
    let before = g.to_string();

    let err = g.add_node("B", 7).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateKey(ref k) if k == "B"));

    assert_eq!(g.size(), 3);
    assert_eq!(g.keys(), vec!["A", "B", "C"]);
    assert_eq!(g.node("B").unwrap(), 2);
    assert_eq!(g.to_string(), before);
}

/// Test that undirected edges are stored in both directions.
#[test]
fn test_undirected_symmetry() {
    let mut g = graph_with(&[("A", 0), ("B", 0), ("C", 0)]);
    for (a, b, w) in [("A", "B", 1), ("B", "C", 9), ("C", "A", 0)] {
        g.set_edge_undirected(a, b, w).unwrap();
        assert_eq!(g.edge(a, b).unwrap(), EdgeWeight::new(w));
        assert_eq!(g.edge(b, a).unwrap(), EdgeWeight::new(w));
    }
}

/// Test that a clone and its source never observe each other's writes.
#[test]
fn test_clone_independence() {
    let mut original = graph_with(&[("A", 1), ("B", 2)]);
    original.set_edge("A", "B", 3).unwrap();

    let mut copy = original.clone();
    copy.set_node("B", 20).unwrap();
    copy.set_edge("B", "A", 30).unwrap();
    copy.add_shortest_paths();

    assert_eq!(original.node("B").unwrap(), 2);
    assert_eq!(original.edge("B", "A").unwrap(), EdgeWeight::NONE);
    assert_eq!(original.edge("A", "A").unwrap(), EdgeWeight::NONE);

    original.set_node("A", 10).unwrap();
    original.set_edge("A", "B", 1).unwrap();

    assert_eq!(copy.node("A").unwrap(), 1);
    assert_eq!(copy.edge("A", "B").unwrap(), EdgeWeight::new(3));
}

/// Test node filtering by value.
#[test]
fn test_filter_by_value() {
    let g = graph_with(&[("A", 0), ("B", 3), ("C", 0)]);
    assert_eq!(g.filter_nodes(|_, v| v > 0), vec!["B"]);
    assert!(g.filter_nodes(|_, v| v > 3).is_empty());
    assert_eq!(g.filter_nodes(|_, _| true), g.keys());
}

/// Test that lookups of unknown keys report which side was missing.
#[test]
fn test_unknown_key_errors() {
    let mut g = graph_with(&[("A", 0)]);

    match g.edge("A", "B") {
        Err(GraphError::UnknownKey { key, role }) => {
            assert_eq!(key, "B");
            assert_eq!(role, KeyRole::Target);
        }
        other => panic!("expected UnknownKey, got {:?}", other),
    }

    match g.set_edge("B", "A", 1) {
        Err(GraphError::UnknownKey { key, role }) => {
            assert_eq!(key, "B");
            assert_eq!(role, KeyRole::Source);
        }
        other => panic!("expected UnknownKey, got {:?}", other),
    }

    assert!(matches!(
        g.node("B"),
        Err(GraphError::UnknownKey { role: KeyRole::Node, .. })
    ));
}
