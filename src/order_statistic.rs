/// A zero-based position in the ascending order of an [`OrderedTree`](crate::OrderedTree).
///
/// Used with the `Index` operator; [`OrderedTree::get`](crate::OrderedTree::get)
/// is the fallible equivalent.
///
/// # Examples
///
/// ```
/// use bst_mountain::{OrderedTree, Rank};
///
/// let tree = OrderedTree::from(["pass", "col", "summit"]);
/// assert_eq!(tree[Rank(0)], "col");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
