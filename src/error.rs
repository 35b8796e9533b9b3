//! Error type shared by the tree, the matrix and the path search.

use thiserror::Error;

/// Failures reported by fallible operations in this crate.
///
/// Lookups with a natural "absent" answer (`contains`, `floor`, `get_by_rank`, ...)
/// return `bool` or `Option` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A positional lookup fell outside `[0, len)`.
    #[error("index {index} is out of range for a tree of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// `first` or `last` was requested from an empty tree.
    #[error("cannot retrieve the {0} element of an empty tree")]
    NoSuchElement(&'static str),

    /// The tree changed after a traversal was started.
    #[error("tree was modified during iteration")]
    ConcurrentModification,

    /// A row passed to a matrix did not match its fixed column count.
    #[error("row has {actual} columns but the matrix has {expected}")]
    RowWidthMismatch { expected: usize, actual: usize },

    /// A matrix cell lookup fell outside the populated rows or the columns.
    #[error("cell ({row}, {column}) is out of range for a {rows}x{columns} matrix")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
