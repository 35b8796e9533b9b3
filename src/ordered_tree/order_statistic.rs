use core::borrow::Borrow;
use core::ops::Index;

use super::OrderedTree;
use crate::{Error, Rank, Result};

impl<T> OrderedTree<T> {
    /// Returns the element at position `index` in ascending order.
    ///
    /// Each step compares `index` with the cached size of the current node's
    /// left subtree: smaller goes left, equal is a hit, larger goes right with
    /// the left subtree and the node subtracted.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_mountain::{Error, OrderedTree};
    ///
    /// let tree = OrderedTree::from([30, 10, 20]);
    /// assert_eq!(tree.get(0), Ok(&10));
    /// assert_eq!(tree.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.raw.get_by_rank(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Returns the element at position `rank` in ascending order, or `None` if
    /// `rank` is out of bounds.
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.raw.get_by_rank(rank)
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Returns the zero-based position of `value` in ascending order, or `None`
    /// if it is not present.
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree = OrderedTree::from([10, 20]);
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(value)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use bst_mountain::{OrderedTree, Rank};
///
/// let tree = OrderedTree::from(['b', 'c', 'a']);
/// assert_eq!(tree[Rank(2)], 'c');
/// ```
impl<T> Index<Rank> for OrderedTree<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
