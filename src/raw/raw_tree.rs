use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::sort::quicksort;

/// Ancestors visited on the way down, root first.
type Path = SmallVec<[Handle; 32]>;

/// The visiting order of a depth-first traversal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields elements in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// Which side of a probe key a neighbor query looks on.
#[derive(Clone, Copy)]
pub(crate) enum Side {
    Below,
    Above,
}

/// The unbalanced binary search tree backing `OrderedTree`.
///
/// Every walk here is a loop over an explicit stack; nothing recurses, so deep
/// (degenerate) trees cannot exhaust the call stack.
#[derive(Clone)]
pub(crate) struct RawTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
}

impl<T> RawTree<T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height in nodes; zero for an empty tree.
    pub(crate) fn height(&self) -> usize {
        self.height_of(self.root)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    pub(crate) fn try_node(&self, handle: Handle) -> Option<&Node<T>> {
        self.nodes.try_get(handle)
    }

    fn size_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.nodes.get(h).size())
    }

    fn height_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.nodes.get(h).height())
    }

    /// Recomputes the caches of one node from its children.
    fn refresh(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let left = node.left();
        let right = node.right();
        let left = (self.size_of(left), self.height_of(left));
        let right = (self.size_of(right), self.height_of(right));
        self.nodes.get_mut(handle).refresh(left, right);
    }

    /// Refreshes every node on `path`, deepest first.
    fn refresh_path(&mut self, path: &Path) {
        for &handle in path.iter().rev() {
            self.refresh(handle);
        }
    }

    /// Points whichever link of `parent` referenced `old` at `new` instead.
    /// A `None` parent means `old` was the root.
    fn relink(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.nodes.get_mut(parent);
                if parent.left() == Some(old) {
                    parent.set_left(new);
                } else {
                    debug_assert_eq!(parent.right(), Some(old), "relink: `old` is not a child of `parent`");
                    parent.set_right(new);
                }
            }
        }
    }

    fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left() {
            handle = left;
        }
        handle
    }

    fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right() {
            handle = right;
        }
        handle
    }

    pub(crate) fn first(&self) -> Option<&T> {
        self.root.map(|root| self.nodes.get(self.leftmost(root)).value())
    }

    pub(crate) fn last(&self) -> Option<&T> {
        self.root.map(|root| self.nodes.get(self.rightmost(root)).value())
    }

    /// Gets the element at `rank` (0-indexed position in sorted order).
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;

        loop {
            let node = self.nodes.get(current);
            let left_size = self.size_of(node.left());
            match remaining.cmp(&left_size) {
                Less => current = node.left()?,
                Equal => return Some(node.value()),
                Greater => {
                    remaining -= left_size + 1;
                    current = node.right()?;
                }
            }
        }
    }

    /// Collects the handles of all nodes in the given order.
    ///
    /// The output buffer is sized to the node count and the explicit stack to the
    /// tree height, which bounds the walk's auxiliary space.
    pub(crate) fn collect(&self, order: Order) -> Vec<Handle> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<Handle> = Vec::with_capacity(self.height());
        let mut current = self.root;

        match order {
            Order::InOrder => loop {
                while let Some(handle) = current {
                    stack.push(handle);
                    current = self.nodes.get(handle).left();
                }
                let Some(handle) = stack.pop() else { break };
                out.push(handle);
                current = self.nodes.get(handle).right();
            },
            Order::PreOrder => loop {
                while let Some(handle) = current {
                    out.push(handle);
                    stack.push(handle);
                    current = self.nodes.get(handle).left();
                }
                let Some(handle) = stack.pop() else { break };
                current = self.nodes.get(handle).right();
            },
            Order::PostOrder => {
                let mut last_emitted: Option<Handle> = None;
                loop {
                    while let Some(handle) = current {
                        stack.push(handle);
                        current = self.nodes.get(handle).left();
                    }
                    let Some(&top) = stack.last() else { break };
                    let right = self.nodes.get(top).right();
                    if right.is_some() && right != last_emitted {
                        // First return from the left side: walk the right side next.
                        current = right;
                    } else {
                        out.push(top);
                        last_emitted = stack.pop();
                    }
                }
            }
        }

        debug_assert_eq!(out.len(), self.len(), "collect: traversal missed nodes");
        out
    }

    /// Walks the tree root first, left before right, yielding each node's depth.
    /// A node with exactly one child also yields `None` at the missing child's
    /// position so that renderings can show the gap.
    pub(crate) fn walk_with_gaps(&self, mut visit: impl FnMut(usize, Option<&T>)) {
        let mut stack: Vec<(Option<Handle>, usize)> = Vec::with_capacity(self.height() + 1);
        if let Some(root) = self.root {
            stack.push((Some(root), 0));
        }

        while let Some((slot, depth)) = stack.pop() {
            let Some(handle) = slot else {
                visit(depth, None);
                continue;
            };
            let node = self.nodes.get(handle);
            visit(depth, Some(node.value()));
            if !node.is_leaf() {
                stack.push((node.right(), depth + 1));
                stack.push((node.left(), depth + 1));
            }
        }
    }
}

impl<T: Ord> RawTree<T> {
    /// Finds the node holding `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.value().borrow()) {
                Less => node.left(),
                Equal => return Some(handle),
                Greater => node.right(),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|h| self.nodes.get(h).value())
    }

    /// Returns the zero-based rank of `key`, or `None` if it is absent.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.value().borrow()) {
                Less => node.left(),
                Equal => return Some(rank + self.size_of(node.left())),
                Greater => {
                    rank += self.size_of(node.left()) + 1;
                    node.right()
                }
            };
        }
        None
    }

    /// Single-descent neighbor search.
    ///
    /// Looks for the closest element on `side` of `key`; `inclusive` also accepts
    /// an element equal to `key`.
    pub(crate) fn neighbor<Q>(&self, key: &Q, side: Side, inclusive: bool) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let ordering = key.cmp(node.value().borrow()).reverse();
            if ordering == Equal && inclusive {
                return Some(node.value());
            }
            current = match (side, ordering) {
                (Side::Below, Less) => {
                    best = Some(node.value());
                    node.right()
                }
                (Side::Below, _) => node.left(),
                (Side::Above, Greater) => {
                    best = Some(node.value());
                    node.left()
                }
                (Side::Above, _) => node.right(),
            };
        }
        best
    }

    /// Adds `value` as a new leaf. Returns `false` (leaving the tree untouched)
    /// if an equal element is already present.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::leaf(value)));
            return true;
        };

        let mut path: Path = SmallVec::with_capacity(self.height());
        let mut current = root;

        loop {
            path.push(current);
            let node = self.nodes.get(current);
            let ordering = value.cmp(node.value());
            let next = match ordering {
                Equal => return false,
                Less => node.left(),
                Greater => node.right(),
            };

            match next {
                Some(child) => current = child,
                None => {
                    let leaf = Some(self.nodes.alloc(Node::leaf(value)));
                    let parent = self.nodes.get_mut(current);
                    if ordering == Less {
                        parent.set_left(leaf);
                    } else {
                        parent.set_right(leaf);
                    }
                    break;
                }
            }
        }

        self.refresh_path(&path);
        true
    }

    /// Removes the element equal to `key` and returns it.
    ///
    /// A node with two children keeps its place in the tree: its in-order
    /// successor is unlinked and the successor's value moves into it.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path: Path = SmallVec::with_capacity(self.height());
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            let next = match key.cmp(node.value().borrow()) {
                Equal => break,
                Less => node.left(),
                Greater => node.right(),
            };
            path.push(current);
            current = next?;
        }

        let found = self.nodes.get(current);
        let removed = match (found.left(), found.right()) {
            (Some(_), Some(right)) => {
                path.push(current);
                let mut successor = right;
                while let Some(left) = self.nodes.get(successor).left() {
                    path.push(successor);
                    successor = left;
                }
                // `path` ends with the successor's parent.
                let successor_right = self.nodes.get(successor).right();
                self.relink(path.last().copied(), successor, successor_right);
                let value = self.nodes.take(successor).into_value();
                self.nodes.get_mut(current).replace_value(value)
            }
            (child, None) | (None, child) => {
                self.relink(path.last().copied(), current, child);
                self.nodes.take(current).into_value()
            }
        };

        self.refresh_path(&path);
        Some(removed)
    }
}

impl<T: Ord + Clone> RawTree<T> {
    /// Builds a tree of near-minimal height from an arbitrary slice.
    ///
    /// The slice is copied and sorted, then the median of each sorted range is
    /// inserted before the medians of its two halves. The halves are driven by an
    /// explicit range stack. Duplicates collapse to one element.
    pub(crate) fn balanced_from(values: &[T]) -> Self {
        let mut sorted: Vec<T> = values.to_vec();
        quicksort(&mut sorted);
        let mut pending: Vec<Option<T>> = sorted.into_iter().map(Some).collect();

        let mut tree = Self::with_capacity(pending.len());
        let mut ranges: SmallVec<[(usize, usize); 32]> = SmallVec::new();
        ranges.push((0, pending.len()));

        while let Some((lo, hi)) = ranges.pop() {
            if lo >= hi {
                continue;
            }
            let mid = lo + (hi - lo) / 2;
            if let Some(value) = pending[mid].take() {
                tree.insert(value);
            }
            ranges.push((mid + 1, hi));
            ranges.push((lo, mid));
        }

        tree
    }
}
