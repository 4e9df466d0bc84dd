//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`LabeledGraph`]: Key-addressed nodes, values and edges
//! - [`EdgeMatrix`]: Dense square matrix of edge weights
//! - [`NodeIndex`], [`EdgeWeight`]: Storage index and weight types

pub mod graph;
pub mod matrix;
pub mod node;

pub use graph::LabeledGraph;
pub use matrix::EdgeMatrix;
pub use node::{EdgeWeight, NodeIndex};
