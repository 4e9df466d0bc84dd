//! Dense square edge-weight matrix.
//!
//! Weights are stored row-major in a single flat buffer. The row stride is
//! the matrix capacity rather than its order, so adding a node only touches
//! the buffer when capacity runs out; capacity doubles at that point which
//! keeps insertion amortized O(order).
//!
//! Memory layout:
//! - `data[row * stride + col]` = weight of the edge `row -> col`
//! - every slot outside `[0, order) x [0, order)` holds [`EdgeWeight::NONE`]

use super::node::{EdgeWeight, NodeIndex};
use crate::{GraphError, Result};

/// Square matrix of directed edge weights.
#[derive(Debug, Clone, Default)]
pub struct EdgeMatrix {
    order: usize,
    stride: usize,
    data: Vec<EdgeWeight>,
}

impl EdgeMatrix {
    /// Create an empty 0 x 0 matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty matrix with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: 0,
            stride: capacity,
            data: vec![EdgeWeight::NONE; capacity * capacity],
        }
    }

    /// Create an `order` x `order` matrix with no edges.
    pub fn with_order(order: usize) -> Self {
        let mut matrix = Self::with_capacity(order);
        matrix.order = order;
        matrix
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of nodes that fit before the buffer is reallocated.
    pub fn capacity(&self) -> usize {
        self.stride
    }

    /// Check if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Append one row and one column of [`EdgeWeight::NONE`].
    ///
    /// Returns the index of the new row/column.
    pub fn grow(&mut self) -> NodeIndex {
        if self.order == self.stride {
            let new_stride = (self.stride * 2).max(4);
            self.reallocate(new_stride);
        }
        let index = NodeIndex::from(self.order);
        self.order += 1;
        index
    }

    /// Move the live region into a buffer with a larger stride.
    fn reallocate(&mut self, new_stride: usize) {
        debug_assert!(new_stride > self.stride);
        let mut data = vec![EdgeWeight::NONE; new_stride * new_stride];
        for row in 0..self.order {
            let dst = row * new_stride;
            data[dst..dst + self.order].copy_from_slice(self.row_slice(row));
        }
        self.data = data;
        self.stride = new_stride;
    }

    /// Weight of the edge `from -> to`, or `None` if either index is out of range.
    pub fn get(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeWeight> {
        let (i, j) = (from.as_usize(), to.as_usize());
        if i >= self.order || j >= self.order {
            return None;
        }
        Some(self.at(i, j))
    }

    /// Overwrite the weight of the edge `from -> to`.
    pub fn set(&mut self, from: NodeIndex, to: NodeIndex, weight: EdgeWeight) -> Result<()> {
        let (i, j) = (from.as_usize(), to.as_usize());
        if i >= self.order {
            return Err(GraphError::InvalidIndex(from.get()));
        }
        if j >= self.order {
            return Err(GraphError::InvalidIndex(to.get()));
        }
        self.put(i, j, weight);
        Ok(())
    }

    /// Outgoing weights of `from`, one per column.
    pub fn row(&self, from: NodeIndex) -> Option<&[EdgeWeight]> {
        let i = from.as_usize();
        if i >= self.order {
            return None;
        }
        Some(self.row_slice(i))
    }

    /// Outgoing weights of `from` as raw integers (`i64::MAX` for no edge).
    pub fn raw_row(&self, from: NodeIndex) -> Option<&[i64]> {
        self.row(from).map(bytemuck::cast_slice)
    }

    /// Iterate over rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[EdgeWeight]> + '_ {
        (0..self.order).map(move |i| self.row_slice(i))
    }

    /// Number of entries that are not [`EdgeWeight::NONE`].
    pub fn num_edges(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|w| w.is_some()).count())
            .sum()
    }

    #[inline]
    fn row_slice(&self, i: usize) -> &[EdgeWeight] {
        let start = i * self.stride;
        &self.data[start..start + self.order]
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> EdgeWeight {
        self.data[i * self.stride + j]
    }

    #[inline]
    pub(crate) fn put(&mut self, i: usize, j: usize, weight: EdgeWeight) {
        self.data[i * self.stride + j] = weight;
    }

    /// Live rows as one mutable buffer together with the row stride.
    ///
    /// Each `stride`-sized chunk is one row; only its first `order` entries
    /// are live.
    pub(crate) fn rows_mut(&mut self) -> (&mut [EdgeWeight], usize) {
        let end = self.order * self.stride;
        (&mut self.data[..end], self.stride)
    }
}
