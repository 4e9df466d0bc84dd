//! Fuzz target for labeled graph operations.
//!
//! Applies random operation sequences to a graph and checks the storage
//! invariants after every step, then verifies the shortest-path closure
//! against the triangle inequality.

#![no_main]

use arbitrary::Arbitrary;
use labeled_graph::{EdgeWeight, GraphError, LabeledGraph, ShortestPathConfig};
use libfuzzer_sys::fuzz_target;

/// Operations that can be performed on the graph.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    /// Insert a node.
    AddNode { key: u8, value: i16 },
    /// Update a node value.
    SetNode { key: u8, value: i16 },
    /// Set a directed edge.
    SetEdge { source: u8, target: u8, weight: u16 },
    /// Set an undirected edge.
    SetEdgeUndirected { a: u8, b: u8, weight: u16 },
    /// Clone and mutate the copy.
    CloneAndMutate { key: u8 },
}

/// Fuzz input: operation sequence and relaxation mode.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    ops: Vec<GraphOp>,
    parallel: bool,
}

fn key(k: u8) -> String {
    // Small key space so operations hit existing nodes
    format!("k{}", k % 24)
}

fuzz_target!(|input: FuzzInput| {
    // Limit operations
    if input.ops.len() > 400 {
        return;
    }

    let mut graph = LabeledGraph::new();

    for op in &input.ops {
        let size_before = graph.size();
        match op {
            GraphOp::AddNode { key: k, value } => {
                let existed = graph.has_node(&key(*k));
                match graph.add_node(key(*k), *value as i64) {
                    Ok(_) => assert!(!existed),
                    Err(GraphError::DuplicateKey(_)) => {
                        assert!(existed);
                        assert_eq!(graph.size(), size_before);
                    }
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
            GraphOp::SetNode { key: k, value } => {
                let result = graph.set_node(&key(*k), *value as i64);
                assert_eq!(result.is_ok(), graph.has_node(&key(*k)));
                if result.is_ok() {
                    assert_eq!(graph.node(&key(*k)).unwrap(), *value as i64);
                }
            }
            GraphOp::SetEdge { source, target, weight } => {
                let (s, t) = (key(*source), key(*target));
                let before = graph.edge(&s, &t).ok();
                match graph.set_edge(&s, &t, *weight as i64) {
                    Ok(()) => {
                        assert_eq!(graph.edge(&s, &t).unwrap(), EdgeWeight::new(*weight as i64));
                    }
                    Err(GraphError::UnknownKey { .. }) => assert!(before.is_none()),
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
            GraphOp::SetEdgeUndirected { a, b, weight } => {
                let (a, b) = (key(*a), key(*b));
                if graph.set_edge_undirected(&a, &b, *weight as i64).is_ok() {
                    let w = EdgeWeight::new(*weight as i64);
                    assert_eq!(graph.edge(&a, &b).unwrap(), w);
                    assert_eq!(graph.edge(&b, &a).unwrap(), w);
                }
            }
            GraphOp::CloneAndMutate { key: k } => {
                let rendered = graph.to_string();
                let mut copy = graph.clone();
                let _ = copy.add_node(format!("clone-{}", k), 1);
                let _ = copy.set_node(&key(*k), -1);
                copy.add_shortest_paths();
                assert_eq!(graph.to_string(), rendered);
            }
        }

        // Storage invariants
        assert_eq!(graph.keys().len(), graph.size());
        assert_eq!(graph.edges().order(), graph.size());
        assert!(graph.size() >= size_before);
    }

    let mut closure = graph.clone();
    let config = if input.parallel {
        ShortestPathConfig::new().parallel().with_parallel_threshold(1)
    } else {
        ShortestPathConfig::new()
    };
    closure.add_shortest_paths_with_config(&config);

    // Closure never exceeds direct edges and satisfies the triangle inequality
    let keys = closure.keys();
    for a in &keys {
        assert_eq!(closure.edge(a, a).unwrap(), EdgeWeight::ZERO);
        for b in &keys {
            let ab = closure.edge(a, b).unwrap();
            let direct = graph.edge(a, b).unwrap();
            if direct.is_some() && a != b {
                assert!(ab.is_some() && ab <= direct);
            }
            for c in &keys {
                if let Some(through) = ab.join(closure.edge(b, c).unwrap()) {
                    let ac = closure.edge(a, c).unwrap();
                    assert!(ac.is_some() && ac <= through);
                }
            }
        }
    }
});
