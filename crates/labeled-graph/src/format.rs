//! Tabular rendering of a graph's weight matrix.
//!
//! Output layout, with keys in lexicographic order:
//!
//! ```text
//! \tA\tB\t
//! A\t-\t5\t
//! B\t-\t-\t
//! ```
//!
//! The header starts with an empty cell. Every cell, including the last in
//! a row, is followed by the delimiter. Missing edges print as `-`.

use std::fmt::{self, Write};

use crate::models::{LabeledGraph, NodeIndex};

/// Matrix renderer configuration.
#[derive(Debug, Clone)]
pub struct MatrixFormatter {
    /// Cell text for [`EdgeWeight::NONE`](crate::EdgeWeight::NONE).
    pub none_marker: char,
    /// Cell terminator.
    pub delimiter: char,
}

impl Default for MatrixFormatter {
    fn default() -> Self {
        Self {
            none_marker: '-',
            delimiter: '\t',
        }
    }
}

impl MatrixFormatter {
    /// Create a formatter with the default `-` marker and tab delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker printed for missing edges.
    pub fn with_none_marker(mut self, marker: char) -> Self {
        self.none_marker = marker;
        self
    }

    /// Set the cell delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write the matrix of `graph` to `out`.
    pub fn write_to<W: Write>(&self, graph: &LabeledGraph, out: &mut W) -> fmt::Result {
        let mut order: Vec<(&str, NodeIndex)> = graph
            .nodes()
            .enumerate()
            .map(|(i, (key, _))| (key, NodeIndex::from(i)))
            .collect();
        order.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let edges = graph.edges();

        out.write_char(self.delimiter)?;
        for (key, _) in &order {
            out.write_str(key)?;
            out.write_char(self.delimiter)?;
        }
        out.write_char('\n')?;

        for &(key, from) in &order {
            out.write_str(key)?;
            out.write_char(self.delimiter)?;
            for &(_, to) in &order {
                let weight = edges.at(from.as_usize(), to.as_usize());
                match weight.get() {
                    Some(w) => write!(out, "{}", w)?,
                    None => out.write_char(self.none_marker)?,
                }
                out.write_char(self.delimiter)?;
            }
            out.write_char('\n')?;
        }

        Ok(())
    }

    /// Render the matrix of `graph` into a new string.
    pub fn format(&self, graph: &LabeledGraph) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(graph, &mut out);
        out
    }
}

/// Render the matrix of `graph` with the default layout.
pub fn format_matrix(graph: &LabeledGraph) -> String {
    MatrixFormatter::default().format(graph)
}

impl fmt::Display for LabeledGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MatrixFormatter::default().write_to(self, f)
    }
}
