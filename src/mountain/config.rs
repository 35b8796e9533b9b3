use super::Supplies;

/// How food is accounted for at each stop.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RationPolicy {
    /// Only the stop's net supplies are applied.
    #[default]
    Netted,
    /// After collecting the stop's supplies the hiker also eats one ration.
    ConsumePerStop,
}

/// Settings for a path search.
///
/// # Examples
///
/// ```
/// use bst_mountain::{ClimbConfig, RationPolicy, Supplies};
///
/// let config = ClimbConfig {
///     rations: RationPolicy::ConsumePerStop,
///     starting_supplies: Supplies::new(1, 0, 0),
/// };
/// assert_ne!(config, ClimbConfig::default());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClimbConfig {
    pub rations: RationPolicy,
    /// The hiker's counters before the first stop.
    pub starting_supplies: Supplies,
}
