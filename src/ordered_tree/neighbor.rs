use core::borrow::Borrow;

use super::OrderedTree;
use crate::raw::Side;
use crate::{Error, Result};

impl<T> OrderedTree<T> {
    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the tree is empty.
    pub fn first(&self) -> Result<&T> {
        self.raw.first().ok_or(Error::NoSuchElement("first"))
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchElement`] if the tree is empty.
    pub fn last(&self) -> Result<&T> {
        self.raw.last().ok_or(Error::NoSuchElement("last"))
    }
}

// Each query is one descent that remembers the best candidate seen so far.
impl<T: Ord> OrderedTree<T> {
    /// Returns the greatest element less than or equal to `value`.
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree = OrderedTree::from([10, 20, 30]);
    /// assert_eq!(tree.floor(&20), Some(&20));
    /// assert_eq!(tree.floor(&25), Some(&20));
    /// assert_eq!(tree.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.neighbor(value, Side::Below, true)
    }

    /// Returns the least element greater than or equal to `value`.
    #[must_use]
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.neighbor(value, Side::Above, true)
    }

    /// Returns the greatest element strictly less than `value`.
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree = OrderedTree::from([10, 20, 30]);
    /// assert_eq!(tree.lower(&20), Some(&10));
    /// assert_eq!(tree.higher(&20), Some(&30));
    /// assert_eq!(tree.higher(&30), None);
    /// ```
    #[must_use]
    pub fn lower<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.neighbor(value, Side::Below, false)
    }

    /// Returns the least element strictly greater than `value`.
    #[must_use]
    pub fn higher<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.neighbor(value, Side::Above, false)
    }
}
