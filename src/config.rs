//! Search configuration: candidate length bounds and the enumeration time budget.

use crate::errors::InputError;
use std::time::Duration;

/// Shortest candidate registered by default.
pub const DEFAULT_MIN_LEN: usize = 3;
/// Longest candidate by default; walks stop growing here.
pub const DEFAULT_MAX_LEN: usize = 8;
/// Wall-clock allowance for the enumeration phase (in seconds).
///
/// An optimized build walks a 6x6 board of distinct letters in a few seconds;
/// unoptimized builds can take several times longer and may hit this limit.
pub const DEFAULT_TIME_BUDGET_SECS: u64 = 30;

/// Inclusive word-length bounds plus how long enumeration may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_len: usize,
    pub max_len: usize,
    pub time_budget: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            time_budget: Duration::from_secs(DEFAULT_TIME_BUDGET_SECS),
        }
    }
}

impl SearchConfig {
    /// Default budget with the given length bounds.
    #[must_use]
    pub fn with_lengths(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len, ..Self::default() }
    }

    #[must_use]
    pub fn time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }

    /// Budget in milliseconds from a caller that may not have one (JavaScript);
    /// `None` keeps the current budget.
    #[must_use]
    pub fn time_budget_millis(self, millis: Option<u32>) -> Self {
        match millis {
            Some(ms) => self.time_budget(Duration::from_millis(u64::from(ms))),
            None => self,
        }
    }

    /// Reject bad bounds before any search work. Nothing is clamped.
    ///
    /// # Errors
    ///
    /// `InvalidLengthBounds` if `max_len` is zero, `ContradictoryBounds` if `min_len > max_len`.
    /// A `min_len` of zero is accepted: no walk is shorter than one cell.
    pub fn validate(&self) -> Result<(), InputError> {
        let (min, max) = (self.min_len, self.max_len);
        if max == 0 {
            return Err(InputError::InvalidLengthBounds { min, max });
        }
        if min > max {
            return Err(InputError::ContradictoryBounds { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SearchConfig::default();
        assert_eq!((config.min_len, config.max_len), (3, 8));
        assert_eq!(config.time_budget, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_contradictory_bounds() {
        assert_eq!(
            SearchConfig::with_lengths(6, 4).validate(),
            Err(InputError::ContradictoryBounds { min: 6, max: 4 })
        );
    }

    #[test]
    fn test_zero_max_len() {
        assert_eq!(
            SearchConfig::with_lengths(3, 0).validate(),
            Err(InputError::InvalidLengthBounds { min: 3, max: 0 })
        );
        assert_eq!(
            SearchConfig::with_lengths(0, 0).validate(),
            Err(InputError::InvalidLengthBounds { min: 0, max: 0 })
        );
    }

    #[test]
    fn test_zero_min_len_is_accepted() {
        assert!(SearchConfig::with_lengths(0, 5).validate().is_ok());
    }

    #[test]
    fn test_equal_bounds_allowed() {
        assert!(SearchConfig::with_lengths(4, 4).validate().is_ok());
    }

    #[test]
    fn test_time_budget_millis() {
        let config = SearchConfig::default().time_budget_millis(Some(120_000));
        assert_eq!(config.time_budget, Duration::from_secs(120));
        let config = SearchConfig::default().time_budget_millis(None);
        assert_eq!(config.time_budget, Duration::from_secs(DEFAULT_TIME_BUDGET_SECS));
    }

    #[test]
    fn test_time_budget_builder() {
        let config = SearchConfig::default().time_budget(Duration::from_millis(5));
        assert_eq!(config.time_budget, Duration::from_millis(5));
    }
}
