use core::fmt::{self, Display, Write};

use super::OrderedTree;

/// Renders the tree's shape, one node per line.
///
/// Lines follow a pre-order walk with two spaces of indentation per level. A node
/// that has only one child gets a `null` line where the other child would be, so
/// left and right can be told apart.
///
/// Created by [`OrderedTree::tree_format`].
///
/// # Examples
///
/// ```
/// use bst_mountain::OrderedTree;
///
/// let tree = OrderedTree::from(['K', 'D', 'P', 'M']);
/// assert_eq!(tree.tree_format().to_string(), "K\n  D\n  P\n    M\n    null\n");
/// ```
pub struct TreeFormat<'a, T> {
    tree: &'a OrderedTree<T>,
}

impl<T> OrderedTree<T> {
    /// Returns an adapter that displays the tree's shape.
    #[must_use]
    pub fn tree_format(&self) -> TreeFormat<'_, T> {
        TreeFormat { tree: self }
    }
}

impl<T: Display> Display for TreeFormat<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.tree.raw.walk_with_gaps(|depth, value| {
            if result.is_err() {
                return;
            }
            result = write!(f, "{:indent$}", "", indent = depth * 2).and_then(|()| match value {
                Some(value) => writeln!(f, "{value}"),
                None => f.write_str("null\n"),
            });
        });
        result
    }
}

impl<T> fmt::Debug for TreeFormat<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Lists the elements in ascending order, as in `[A, B, C]`.
impl<T: Display> Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_char(']')
    }
}
