use super::handle::Handle;

/// A binary search tree node.
///
/// `size` and `height` describe the subtree rooted here and are refreshed
/// bottom-up by [`Node::refresh`] whenever a descendant link changes.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    // Number of nodes in this subtree, including this one.
    size: usize,
    // Longest downward path in nodes; a leaf has height 1.
    height: usize,
}

impl<T> Node<T> {
    /// Creates a detached leaf.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            size: 1,
            height: 1,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    /// Swaps the payload while keeping the node in place.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes the caches from the children's `(size, height)` pairs.
    /// Absent children contribute `(0, 0)`.
    pub(crate) fn refresh(&mut self, left: (usize, usize), right: (usize, usize)) {
        self.size = 1 + left.0 + right.0;
        self.height = 1 + core::cmp::max(left.1, right.1);
    }
}
