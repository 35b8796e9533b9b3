mod arena;
mod handle;
mod node;
mod raw_tree;
mod sort;

pub(crate) use handle::Handle;
pub use raw_tree::Order;
pub(crate) use raw_tree::{RawTree, Side};
