use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use super::OrderedTree;
use crate::raw::{Handle, Order, RawTree};
use crate::{Error, Result};

/// An iterator over the elements of an `OrderedTree` in one of the three
/// depth-first orders.
///
/// The visiting order is computed up front, when the iterator is created, into a
/// buffer holding one entry per element. The walk that fills it keeps an explicit
/// stack no deeper than the tree, so arbitrarily skewed trees are safe to iterate.
///
/// Created by [`OrderedTree::iter`], [`OrderedTree::preorder`],
/// [`OrderedTree::postorder`] and [`OrderedTree::traverse`].
///
/// # Examples
///
/// ```
/// use bst_mountain::OrderedTree;
///
/// let tree = OrderedTree::from([2, 1, 3]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    tree: &'a RawTree<T>,
    handles: alloc::vec::IntoIter<Handle>,
}

/// A traversal cursor that does not borrow its tree.
///
/// Unlike [`Iter`], a `Traversal` may be held across mutations of the tree it
/// was created from. It records the tree's [`version`](OrderedTree::version) at
/// creation and refuses to advance once that version has moved on.
///
/// A `Traversal` must only be advanced with the tree that created it.
///
/// # Examples
///
/// ```
/// use bst_mountain::{Error, Order, OrderedTree};
///
/// let mut tree = OrderedTree::from(['b', 'a', 'c']);
/// let mut cursor = tree.traversal(Order::PreOrder);
/// assert_eq!(cursor.advance(&tree), Ok(Some(&'b')));
///
/// tree.insert('d');
/// assert_eq!(cursor.advance(&tree), Err(Error::ConcurrentModification));
/// ```
pub struct Traversal {
    order: Order,
    handles: Vec<Handle>,
    position: usize,
    version: u64,
}

impl<T> OrderedTree<T> {
    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse(Order::InOrder)
    }

    /// Returns an iterator that visits each node before its subtrees.
    ///
    /// ```
    /// use bst_mountain::OrderedTree;
    ///
    /// let tree = OrderedTree::from([2, 1, 3]);
    /// assert_eq!(tree.preorder().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// assert_eq!(tree.postorder().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn preorder(&self) -> Iter<'_, T> {
        self.traverse(Order::PreOrder)
    }

    /// Returns an iterator that visits each node after its subtrees.
    pub fn postorder(&self) -> Iter<'_, T> {
        self.traverse(Order::PostOrder)
    }

    /// Returns an iterator in the given `order`.
    pub fn traverse(&self, order: Order) -> Iter<'_, T> {
        Iter {
            tree: &self.raw,
            handles: self.raw.collect(order).into_iter(),
        }
    }

    /// Returns a detached cursor in the given `order`.
    #[must_use]
    pub fn traversal(&self, order: Order) -> Traversal {
        Traversal {
            order,
            handles: self.raw.collect(order),
            position: 0,
            version: self.version,
        }
    }
}

impl Traversal {
    /// Returns the next element, or `Ok(None)` once the walk is exhausted.
    ///
    /// # Errors
    ///
    /// [`Error::ConcurrentModification`] if `tree` has been modified since this
    /// cursor was created. The cursor does not move in that case.
    pub fn advance<'t, T>(&mut self, tree: &'t OrderedTree<T>) -> Result<Option<&'t T>> {
        if tree.version != self.version {
            return Err(Error::ConcurrentModification);
        }
        let Some(&handle) = self.handles.get(self.position) else {
            return Ok(None);
        };
        let node = tree.raw.try_node(handle).ok_or(Error::ConcurrentModification)?;
        self.position += 1;
        Ok(Some(node.value()))
    }

    /// Returns `true` if [`advance`](Traversal::advance) has elements left to yield.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.handles.len()
    }

    /// Returns how many elements are left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.handles.len() - self.position
    }

    /// Returns the order this cursor walks in.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }
}

impl fmt::Debug for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("remaining", &self.remaining())
            .field("version", &self.version)
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree;
        self.handles.next().map(|h| tree.node(h).value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let tree = self.tree;
        self.handles.next_back().map(|h| tree.node(h).value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            handles: self.handles.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
