use core::borrow::Borrow;
use core::fmt;

use crate::raw::RawTree;

mod capacity;
mod format;
mod neighbor;
mod order_statistic;
mod traversal;

pub use format::TreeFormat;
pub use traversal::{Iter, Traversal};

/// An ordered set backed by an unbalanced binary search tree whose nodes cache
/// their subtree size and height.
///
/// Elements are placed in arrival order; the tree never rotates. Use
/// [`OrderedTree::balanced`] to build a shallow tree from a known collection.
///
/// The size cache turns rank queries ([`get`](OrderedTree::get),
/// [`rank_of`](OrderedTree::rank_of)) into a single descent, and the height
/// cache sizes the explicit stacks used by every walk, so no operation recurses
/// regardless of the tree's shape.
///
/// Every successful mutation bumps a [`version`](OrderedTree::version) counter.
/// Borrowing iterators are protected by the borrow checker; the detached
/// [`Traversal`] cursor checks the counter at runtime instead.
///
/// # Examples
///
/// ```
/// use bst_mountain::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for letter in ['K', 'D', 'P', 'B', 'J'] {
///     tree.insert(letter);
/// }
///
/// assert!(!tree.insert('D'));
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.get(1), Ok(&'D'));
/// assert_eq!(tree.floor(&'L'), Some(&'K'));
/// assert_eq!(tree.to_string(), "[B, D, J, K, P]");
/// ```
pub struct OrderedTree<T> {
    raw: RawTree<T>,
    version: u64,
}

impl<T> OrderedTree<T> {
    /// Makes a new, empty `OrderedTree`.
    ///
    /// Does not allocate anything on its own.
    #[must_use]
    pub const fn new() -> Self {
        OrderedTree {
            raw: RawTree::new(),
            version: 0,
        }
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// A single leaf has height 1 and an empty tree has height 0.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the modification counter.
    ///
    /// The counter changes whenever the tree's contents change and is what a
    /// [`Traversal`] compares against to detect interleaved mutation.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if !self.raw.is_empty() {
            self.raw.clear();
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub(crate) fn raw(&self) -> &RawTree<T> {
        &self.raw
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Adds `value` to the tree.
    ///
    /// Returns `false`, leaving the tree and its version untouched, if an equal
    /// element is already present.
    ///
    /// # Complexity
    ///
    /// O(height) time and O(height) auxiliary space.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.raw.insert(value);
        if inserted {
            self.bump();
        }
        inserted
    }

    /// Removes the element equal to `value`. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([1, 2, 3]);
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_string(), "[1, 3]");
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to `value`, if any.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let removed = self.raw.remove(value);
        if removed.is_some() {
            self.bump();
        }
        removed
    }

    /// Returns `true` if the tree contains an element equal to `value`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value).is_some()
    }

    /// Returns a reference to the stored element equal to `value`, if any.
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree = OrderedTree::from([String::from("ridge")]);
    /// assert_eq!(tree.lookup("ridge").map(String::as_str), Some("ridge"));
    /// assert!(tree.lookup("valley").is_none());
    /// ```
    #[must_use]
    pub fn lookup<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(value)
    }
}

impl<T: Ord + Clone> OrderedTree<T> {
    /// Builds a tree of minimal height holding the distinct elements of `values`.
    ///
    /// The caller's slice is left untouched. The copy is sorted with an iterative
    /// median-of-three quicksort, then each range's median is inserted ahead of
    /// its halves, so the result has height `ceil(log2(n + 1))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree = OrderedTree::balanced(&[7, 6, 5, 4, 3, 2, 1]);
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
    /// ```
    #[must_use]
    pub fn balanced(values: &[T]) -> Self {
        let raw = RawTree::balanced_from(values);

        #[cfg(feature = "tracing")]
        tracing::debug!(input = values.len(), len = raw.len(), height = raw.height(), "built balanced tree");

        OrderedTree { raw, version: 0 }
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    fn clone(&self) -> Self {
        OrderedTree {
            raw: self.raw.clone(),
            version: 0,
        }
    }
}

/// Two trees are equal when they hold the same elements, whatever their shape.
impl<T: Ord> PartialEq for OrderedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Ord> Eq for OrderedTree<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    /// Inserts the items in iteration order; later duplicates are ignored.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedTree<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
