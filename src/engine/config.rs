use crate::solvers::EnumerationLimits;

/// The configuration of a [SemanticsEngine](super::SemanticsEngine).
///
/// # Example
///
/// ```
/// # use dungsem::engine::EngineConfig;
/// # use dungsem::solvers::EnumerationLimits;
/// let config = EngineConfig::default()
///     .with_limits(EnumerationLimits::default().with_max_sets(1000))
///     .with_consistency_check(true);
/// assert_eq!(Some(1000), config.limits().max_sets());
/// assert!(config.check_consistency());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    limits: EnumerationLimits,
    check_consistency: bool,
}

impl EngineConfig {
    /// Sets the limits applied to the admissible set search.
    pub fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets whether the consistency laws are checked each time the extensions are recomputed.
    ///
    /// Violations are logged at the `error` level.
    pub fn with_consistency_check(mut self, check_consistency: bool) -> Self {
        self.check_consistency = check_consistency;
        self
    }

    /// Returns the limits applied to the admissible set search.
    pub fn limits(&self) -> EnumerationLimits {
        self.limits
    }

    /// Returns `true` iff the consistency laws are checked after each recomputation.
    pub fn check_consistency(&self) -> bool {
        self.check_consistency
    }
}
