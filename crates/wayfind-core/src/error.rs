//! Error types for graph construction and queries

use std::fmt;

/// Which dimension of the input disagreed with the label list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Number of matrix rows.
    Rows,
    /// Number of cells in the given row.
    Row(usize),
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "row count"),
            Axis::Row(row) => write!(f, "length of row {}", row),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The matrix is not square or does not match the label count. No graph is produced.
    #[error("dimension mismatch: {axis} is {found}, expected {expected}")]
    DimensionMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A traversal or search was asked to start from a label the graph does not have.
    #[error("start node not found: {0}")]
    StartNotFound(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
