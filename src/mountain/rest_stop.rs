use alloc::string::String;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign};

/// Net food, raft and axe counts.
///
/// Any counter may be negative: a rest stop whose obstacles outweigh its
/// supplies takes from the hiker instead of giving.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Supplies {
    pub food: i32,
    pub rafts: i32,
    pub axes: i32,
}

impl Supplies {
    #[must_use]
    pub const fn new(food: i32, rafts: i32, axes: i32) -> Self {
        Supplies { food, rafts, axes }
    }

    /// Returns `true` if any counter has gone below zero.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.food < 0 || self.rafts < 0 || self.axes < 0
    }
}

impl Add for Supplies {
    type Output = Supplies;

    fn add(self, other: Supplies) -> Supplies {
        Supplies {
            food: self.food.saturating_add(other.food),
            rafts: self.rafts.saturating_add(other.rafts),
            axes: self.axes.saturating_add(other.axes),
        }
    }
}

impl AddAssign for Supplies {
    fn add_assign(&mut self, other: Supplies) {
        *self = *self + other;
    }
}

/// A labelled stop on the mountain.
///
/// Stops are ordered, compared and hashed by label alone, and can be looked up
/// in a tree by `&str`.
///
/// # Examples
///
/// ```
/// use bst_mountain::{RestStop, Supplies};
///
/// // Two rations and a raft, but two rivers to cross and one fallen tree.
/// let stop = RestStop::with_obstacles("ridge", 2, 1, 0, 2, 1);
/// assert_eq!(stop.supplies(), Supplies::new(2, -1, -1));
/// assert_eq!(stop, RestStop::new("ridge", 0, 0, 0));
/// ```
#[derive(Clone)]
pub struct RestStop {
    label: String,
    supplies: Supplies,
}

impl RestStop {
    /// Creates a stop whose obstacles are already netted into the counts.
    pub fn new(label: impl Into<String>, food: i32, rafts: i32, axes: i32) -> Self {
        RestStop {
            label: label.into(),
            supplies: Supplies::new(food, rafts, axes),
        }
    }

    /// Creates a stop from separate supply and obstacle counts.
    ///
    /// Crossing a river costs a raft and clearing a fallen tree costs an axe.
    pub fn with_obstacles(
        label: impl Into<String>,
        food: i32,
        rafts: i32,
        axes: i32,
        rivers: i32,
        fallen_trees: i32,
    ) -> Self {
        RestStop::new(label, food, rafts.saturating_sub(rivers), axes.saturating_sub(fallen_trees))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn supplies(&self) -> Supplies {
        self.supplies
    }
}

impl PartialEq for RestStop {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for RestStop {}

impl PartialOrd for RestStop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RestStop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}

impl Hash for RestStop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl Borrow<str> for RestStop {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for RestStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl fmt::Debug for RestStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestStop")
            .field("label", &self.label)
            .field("food", &self.supplies.food)
            .field("rafts", &self.supplies.rafts)
            .field("axes", &self.supplies.axes)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn counts_saturate_at_the_bounds() {
        let mut supplies = Supplies::new(i32::MAX, i32::MIN, 0);
        supplies += Supplies::new(1, -1, 0);
        assert_eq!(supplies, Supplies::new(i32::MAX, i32::MIN, 0));

        let stop = RestStop::with_obstacles("rapids", 0, i32::MIN, 0, 1, i32::MIN);
        assert_eq!(stop.supplies(), Supplies::new(0, i32::MIN, i32::MAX));
    }
}
