//! Graph algorithms.
//!
//! This module provides algorithms over dense weight matrices:
//! - [`shortest_paths`]: All-pairs shortest paths (Floyd–Warshall)

pub mod shortest_paths;

pub use shortest_paths::{
    floyd_warshall, floyd_warshall_parallel, floyd_warshall_with_config, ShortestPathConfig,
};
