use super::{RationPolicy, RestStop, Supplies};

/// The supply state carried down one path.
///
/// `Hiker` is `Copy`: every fork in the search hands each branch its own copy,
/// so sibling branches never see each other's consumption.
///
/// # Examples
///
/// ```
/// use bst_mountain::{Hiker, RationPolicy, RestStop, Supplies};
///
/// let mut hiker = Hiker::new(Supplies::default());
/// hiker.visit(&RestStop::new("camp", 1, 0, 0), RationPolicy::ConsumePerStop);
/// assert!(hiker.is_alive());
///
/// hiker.visit(&RestStop::with_obstacles("ford", 0, 0, 0, 1, 0), RationPolicy::Netted);
/// assert!(!hiker.is_alive());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Hiker {
    // Running totals are kept wider than a stop's counts so no path can overflow them.
    food: i64,
    rafts: i64,
    axes: i64,
}

impl Hiker {
    #[must_use]
    pub fn new(supplies: Supplies) -> Self {
        Hiker {
            food: i64::from(supplies.food),
            rafts: i64::from(supplies.rafts),
            axes: i64::from(supplies.axes),
        }
    }

    /// Collects the stop's supplies and pays for its obstacles.
    pub fn visit(&mut self, stop: &RestStop, rations: RationPolicy) {
        let supplies = stop.supplies();
        self.food += i64::from(supplies.food);
        self.rafts += i64::from(supplies.rafts);
        self.axes += i64::from(supplies.axes);
        if rations == RationPolicy::ConsumePerStop {
            self.food -= 1;
        }
    }

    /// Returns `true` while no counter is negative.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.food >= 0 && self.rafts >= 0 && self.axes >= 0
    }

    /// Returns the running totals, each clamped to the `i32` range.
    #[must_use]
    pub fn supplies(&self) -> Supplies {
        let clamp = |count: i64| i32::try_from(count).unwrap_or(if count < 0 { i32::MIN } else { i32::MAX });
        Supplies::new(clamp(self.food), clamp(self.rafts), clamp(self.axes))
    }
}
