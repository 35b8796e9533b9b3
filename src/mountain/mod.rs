//! Rest stops arranged in a search tree, and the search for every path a hiker
//! can survive from the summit down to the base.

mod config;
mod hiker;
mod paths;
mod rest_stop;

pub use config::{ClimbConfig, RationPolicy};
pub use hiker::Hiker;
pub use rest_stop::{RestStop, Supplies};

use crate::OrderedTree;

/// A mountain whose rest stops form a binary search tree keyed by label.
///
/// The summit is the tree's root and each downward trail leads to a child. Stops
/// are placed in the order they are added.
///
/// # Examples
///
/// ```
/// use bst_mountain::{Mountain, RestStop};
///
/// let mountain: Mountain = [
///     RestStop::new("M", 1, 0, 0),
///     RestStop::new("F", -2, 0, 0),
///     RestStop::new("T", 0, 0, 0),
/// ]
/// .into_iter()
/// .collect();
///
/// let paths = mountain.find_paths().unwrap();
/// assert_eq!(paths.rows(), 1);
/// assert_eq!(paths.row(0).unwrap()[1].label(), "T");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Mountain {
    stops: OrderedTree<RestStop>,
}

impl Mountain {
    #[must_use]
    pub const fn new() -> Self {
        Mountain {
            stops: OrderedTree::new(),
        }
    }

    /// Builds a mountain by adding `stops` in order. Stops whose label is
    /// already taken are skipped.
    pub fn from_stops(stops: impl IntoIterator<Item = RestStop>) -> Self {
        Mountain {
            stops: stops.into_iter().collect(),
        }
    }

    /// Adds a stop. Returns `false` if a stop with the same label exists.
    pub fn insert(&mut self, stop: RestStop) -> bool {
        self.stops.insert(stop)
    }

    /// Read access to the underlying tree for inspection.
    #[must_use]
    pub const fn tree(&self) -> &OrderedTree<RestStop> {
        &self.stops
    }
}

impl From<OrderedTree<RestStop>> for Mountain {
    fn from(stops: OrderedTree<RestStop>) -> Self {
        Mountain { stops }
    }
}

impl FromIterator<RestStop> for Mountain {
    fn from_iter<I: IntoIterator<Item = RestStop>>(iter: I) -> Self {
        Mountain::from_stops(iter)
    }
}
