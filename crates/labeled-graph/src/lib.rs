//! Dense labeled weighted graphs with all-pairs shortest paths.
//!
//! This crate provides a small graph library for problems where nodes are
//! named by strings, carry an integer payload, and are few enough that a
//! dense adjacency matrix is the natural representation. It includes:
//!
//! - **LabeledGraph**: key-addressed nodes with insertion-ordered indices
//! - **EdgeMatrix**: row-major weight storage with an explicit no-edge sentinel
//! - **Floyd–Warshall**: in-place all-pairs shortest paths (sequential or rayon)
//! - **MatrixFormatter**: tab-delimited rendering of the weight matrix
//! - **GraphBuilder**: insert-or-update construction from neighbor lists
//! - **SharedGraph**: a single-lock handle for concurrent embedding
//!
//! # Example
//!
//! ```
//! use labeled_graph::{EdgeWeight, LabeledGraph};
//!
//! let mut graph = LabeledGraph::new();
//! graph.add_node("A", 0)?;
//! graph.add_node("B", 3)?;
//! graph.add_node("C", 0)?;
//! graph.set_edge("A", "B", 1)?;
//! graph.set_edge("B", "C", 2)?;
//! graph.set_edge("A", "C", 10)?;
//!
//! let distances = graph.shortest_paths();
//! assert_eq!(distances.edge("A", "C")?, EdgeWeight::new(3));
//! assert_eq!(distances.edge("C", "A")?, EdgeWeight::NONE);
//!
//! // The source graph keeps its direct edges
//! assert_eq!(graph.edge("A", "C")?, EdgeWeight::new(10));
//! # Ok::<(), labeled_graph::GraphError>(())
//! ```

use std::fmt;

pub mod algorithms;
pub mod builder;
pub mod format;
pub mod models;
pub mod sync;

// Re-export main types
pub use algorithms::shortest_paths::{
    floyd_warshall, floyd_warshall_parallel, floyd_warshall_with_config, ShortestPathConfig,
};
pub use builder::GraphBuilder;
pub use format::{format_matrix, MatrixFormatter};
pub use models::graph::LabeledGraph;
pub use models::matrix::EdgeMatrix;
pub use models::node::{EdgeWeight, NodeIndex};
pub use sync::SharedGraph;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::algorithms::{floyd_warshall, floyd_warshall_parallel, ShortestPathConfig};
    pub use crate::builder::GraphBuilder;
    pub use crate::format::{format_matrix, MatrixFormatter};
    pub use crate::models::{EdgeMatrix, EdgeWeight, LabeledGraph, NodeIndex};
    pub use crate::sync::SharedGraph;
    pub use crate::{GraphError, KeyRole, Result};
}

/// Which side of an operation referenced a missing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// The key of a node lookup or update.
    Node,
    /// The source endpoint of an edge.
    Source,
    /// The target endpoint of an edge.
    Target,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Node => f.write_str("node"),
            KeyRole::Source => f.write_str("source node"),
            KeyRole::Target => f.write_str("target node"),
        }
    }
}

/// Graph error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node insertion with a key that already exists.
    #[error("Node with key {0} already exists")]
    DuplicateKey(String),

    /// Operation referenced a key that is not in the graph.
    #[error("Unknown {role}: {key}")]
    UnknownKey {
        /// The missing key.
        key: String,
        /// Which argument carried it.
        role: KeyRole,
    },

    /// Weight equal to the no-edge sentinel.
    #[error("Weight {0} is reserved for missing edges")]
    ReservedWeight(i64),

    /// Matrix index outside the current order.
    #[error("Invalid node index: {0}")]
    InvalidIndex(u32),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
