//! Node and weight types for labeled graphs.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`NodeIndex`]: Dense storage index assigned at insertion time
//! - [`EdgeWeight`]: Directed edge weight, or [`EdgeWeight::NONE`] for no edge

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Dense node index.
///
/// Indices are assigned in insertion order starting at zero and never
/// change for the lifetime of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Create a new node index.
    pub const fn new(index: u32) -> Self {
        NodeIndex(index)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index as a `usize`, for addressing storage.
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(index: u32) -> Self {
        NodeIndex(index)
    }
}

impl From<usize> for NodeIndex {
    fn from(index: usize) -> Self {
        NodeIndex(index as u32)
    }
}

impl From<NodeIndex> for usize {
    fn from(index: NodeIndex) -> Self {
        index.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// SAFETY: NodeIndex is #[repr(transparent)] over u32
unsafe impl Zeroable for NodeIndex {}
unsafe impl Pod for NodeIndex {}

/// Directed edge weight.
///
/// `EdgeWeight::NONE` marks the absence of an edge. It is an out-of-band
/// value and must be checked with [`EdgeWeight::is_none`] before any two
/// weights are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EdgeWeight(pub i64);

impl EdgeWeight {
    /// No edge.
    pub const NONE: EdgeWeight = EdgeWeight(i64::MAX);

    /// Zero weight (self-distance).
    pub const ZERO: EdgeWeight = EdgeWeight(0);

    /// Create a new weight.
    pub const fn new(weight: i64) -> Self {
        EdgeWeight(weight)
    }

    /// Check if this is the no-edge sentinel.
    pub const fn is_none(&self) -> bool {
        self.0 == i64::MAX
    }

    /// Check if an edge (or path) exists.
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// The weight, or `None` for the sentinel.
    pub const fn get(&self) -> Option<i64> {
        if self.is_none() {
            None
        } else {
            Some(self.0)
        }
    }

    /// Length of the path `self` followed by `next`.
    ///
    /// Returns `None` if either leg is missing or the total is not
    /// representable as a real weight.
    pub fn join(self, next: EdgeWeight) -> Option<EdgeWeight> {
        if self.is_none() || next.is_none() {
            return None;
        }
        match self.0.checked_add(next.0) {
            Some(total) if total != i64::MAX => Some(EdgeWeight(total)),
            _ => None,
        }
    }
}

impl Default for EdgeWeight {
    fn default() -> Self {
        EdgeWeight::NONE
    }
}

impl From<i64> for EdgeWeight {
    fn from(weight: i64) -> Self {
        EdgeWeight(weight)
    }
}

impl From<Option<i64>> for EdgeWeight {
    fn from(weight: Option<i64>) -> Self {
        weight.map_or(EdgeWeight::NONE, EdgeWeight)
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(w) => write!(f, "{}", w),
            None => f.write_str("-"),
        }
    }
}

// SAFETY: EdgeWeight is #[repr(transparent)] over i64
unsafe impl Zeroable for EdgeWeight {}
unsafe impl Pod for EdgeWeight {}
