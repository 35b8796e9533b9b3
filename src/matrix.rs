//! A row-appendable matrix stored in one flat buffer.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::{Error, Result};

/// A two-dimensional buffer with a fixed number of columns and a growing number
/// of rows.
///
/// Rows are stored back to back in a single allocation. When the buffer is full
/// its capacity doubles (or, when empty, grows to exactly one row), so
/// [`append`](GrowableMatrix::append) is amortized O(1) per row.
///
/// # Examples
///
/// ```
/// use bst_mountain::GrowableMatrix;
///
/// let mut matrix = GrowableMatrix::new(2);
/// matrix.append(&[1, 2]).unwrap();
/// matrix.append(&[3, 4]).unwrap();
///
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix.get(1, 0), Ok(&3));
/// assert!(matrix.append(&[5]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct GrowableMatrix<E> {
    columns: usize,
    rows: usize,
    buffer: Vec<E>,
}

impl<E> GrowableMatrix<E> {
    /// Creates an empty matrix whose rows hold `columns` elements.
    ///
    /// Does not allocate until the first row is appended.
    #[must_use]
    pub const fn new(columns: usize) -> Self {
        GrowableMatrix {
            columns,
            rows: 0,
            buffer: Vec::new(),
        }
    }

    /// Creates an empty matrix with room for `rows` rows before reallocating.
    #[must_use]
    pub fn with_row_capacity(columns: usize, rows: usize) -> Self {
        GrowableMatrix {
            columns,
            rows: 0,
            buffer: Vec::with_capacity(rows.saturating_mul(columns)),
        }
    }

    /// Returns the number of rows appended so far.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the fixed row width.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `true` if no rows have been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns how many rows fit before the next reallocation.
    #[must_use]
    pub fn row_capacity(&self) -> usize {
        match self.columns {
            0 => usize::MAX,
            columns => self.buffer.capacity() / columns,
        }
    }

    /// Returns the element at `row`, `column`.
    ///
    /// # Errors
    ///
    /// [`Error::CellOutOfRange`] if `row >= self.rows()` or
    /// `column >= self.columns()`.
    pub fn get(&self, row: usize, column: usize) -> Result<&E> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::CellOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(&self.buffer[row * self.columns + column])
    }

    /// Returns a whole row.
    ///
    /// # Errors
    ///
    /// [`Error::CellOutOfRange`] if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Result<&[E]> {
        if row >= self.rows {
            return Err(Error::CellOutOfRange {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(self.row_unchecked(row))
    }

    fn row_unchecked(&self, row: usize) -> &[E] {
        let start = row * self.columns;
        &self.buffer[start..start + self.columns]
    }

    /// Returns an iterator over the rows, first appended first.
    pub fn iter_rows(&self) -> Rows<'_, E> {
        Rows {
            matrix: self,
            front: 0,
            back: self.rows,
        }
    }

    /// Makes room for one more row, doubling the buffer when it is full.
    fn grow_for_row(&mut self) {
        let len = self.buffer.len();
        let capacity = self.buffer.capacity();
        if len + self.columns <= capacity {
            return;
        }
        let target = if capacity == 0 {
            self.columns
        } else {
            core::cmp::max(capacity * 2, len + self.columns)
        };
        self.buffer.reserve_exact(target - len);
    }
}

impl<E: Clone> GrowableMatrix<E> {
    /// Copies `row` onto the end of the matrix.
    ///
    /// # Errors
    ///
    /// [`Error::RowWidthMismatch`] if `row.len() != self.columns()`. The matrix
    /// is unchanged in that case.
    pub fn append(&mut self, row: &[E]) -> Result<()> {
        if row.len() != self.columns {
            return Err(Error::RowWidthMismatch {
                expected: self.columns,
                actual: row.len(),
            });
        }
        self.grow_for_row();
        self.buffer.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for GrowableMatrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

/// An iterator over the rows of a [`GrowableMatrix`].
///
/// Created by [`GrowableMatrix::iter_rows`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rows<'a, E> {
    matrix: &'a GrowableMatrix<E>,
    front: usize,
    back: usize,
}

impl<'a, E> Iterator for Rows<'a, E> {
    type Item = &'a [E];

    fn next(&mut self) -> Option<&'a [E]> {
        if self.front == self.back {
            return None;
        }
        let matrix = self.matrix;
        self.front += 1;
        Some(matrix.row_unchecked(self.front - 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, E> DoubleEndedIterator for Rows<'a, E> {
    fn next_back(&mut self) -> Option<&'a [E]> {
        if self.front == self.back {
            return None;
        }
        let matrix = self.matrix;
        self.back -= 1;
        Some(matrix.row_unchecked(self.back))
    }
}

impl<E> ExactSizeIterator for Rows<'_, E> {}

impl<E> FusedIterator for Rows<'_, E> {}

impl<E> Clone for Rows<'_, E> {
    fn clone(&self) -> Self {
        Rows {
            matrix: self.matrix,
            front: self.front,
            back: self.back,
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Rows<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<'a, E> IntoIterator for &'a GrowableMatrix<E> {
    type Item = &'a [E];
    type IntoIter = Rows<'a, E>;

    fn into_iter(self) -> Rows<'a, E> {
        self.iter_rows()
    }
}
