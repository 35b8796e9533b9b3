use super::OrderedTree;
use crate::raw::RawTree;

impl<T> OrderedTree<T> {
    /// Creates an empty tree with node storage for at least `capacity` elements.
    ///
    /// Node slots freed by removals are reused before the storage grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree: OrderedTree<u32> = OrderedTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTree {
            raw: RawTree::with_capacity(capacity),
            version: 0,
        }
    }

    /// Returns the number of node slots allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
