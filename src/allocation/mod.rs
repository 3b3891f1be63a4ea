//! Study-time allocation strategies.
//!
//! Two strategies turn subjects into daily study sessions:
//!
//! | Strategy | Driven by | Hours per session |
//! |----------|-----------|-------------------|
//! | `Weighted` | urgency + importance | `weight / Σweight × budget`, 2 decimals |
//! | `FixedSplit` | material range | `budget / subject_count`, 1 decimal |
//!
//! A subject with a usable numeric range is split over its remaining days;
//! any other subject shares the budget by weight. The two are never
//! mixed for the same subject.

mod partition;
mod weight;
mod weighted;

pub use partition::{partition, partition_subject, DailyChunk, RangeChunk};
pub use weight::{compute_weight, urgency, IMPORTANCE_SHARE, MAX_IMPORTANCE, URGENCY_SHARE};
pub use weighted::{allocate, allocate_indexed};

use serde::{Deserialize, Serialize};

use crate::models::Subject;

/// How a single subject's study time is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationStrategy {
    /// Proportional share of the daily budget by weight.
    Weighted,
    /// Equal share of the daily budget, material split into daily chunks.
    FixedSplit,
}

impl AllocationStrategy {
    /// `FixedSplit` if the subject has a usable numeric range, `Weighted`
    /// otherwise (including range text that fails to parse).
    pub fn for_subject(subject: &Subject) -> Self {
        if subject.range().is_some() {
            Self::FixedSplit
        } else {
            Self::Weighted
        }
    }
}

/// Run-wide strategy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategySelection {
    /// Per subject, see [`AllocationStrategy::for_subject`].
    #[default]
    Auto,
    /// Every subject is weighted; ranges are ignored.
    Weighted,
    /// Every subject is range-split; subjects without a usable range get nothing.
    FixedSplit,
}

impl StrategySelection {
    /// The strategy to use for `subject` under this selection.
    pub fn resolve(self, subject: &Subject) -> AllocationStrategy {
        match self {
            Self::Auto => AllocationStrategy::for_subject(subject),
            Self::Weighted => AllocationStrategy::Weighted,
            Self::FixedSplit => AllocationStrategy::FixedSplit,
        }
    }
}

/// Where the division remainder goes when a range is split over days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// The first `total mod days` days take one extra unit each.
    FirstDaysAbsorb,
    /// The last day's chunk is extended to the end of the range.
    #[default]
    LastDayAbsorbs,
}

/// Rounds half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_strategy_for_subject() {
        let plain = Subject::new("Math", day(5), 3, day(1));
        assert_eq!(
            AllocationStrategy::for_subject(&plain),
            AllocationStrategy::Weighted
        );

        let ranged = Subject::new("Bio", day(5), 3, day(1)).with_range("p.1", "p.9");
        assert_eq!(
            AllocationStrategy::for_subject(&ranged),
            AllocationStrategy::FixedSplit
        );

        // Unusable range text falls back to weighting.
        let broken = Subject::new("Art", day(5), 3, day(1)).with_range("abc", "xyz");
        assert_eq!(
            AllocationStrategy::for_subject(&broken),
            AllocationStrategy::Weighted
        );
        let reversed = Subject::new("Bio", day(5), 3, day(1)).with_range("p.9", "p.1");
        assert_eq!(
            AllocationStrategy::for_subject(&reversed),
            AllocationStrategy::Weighted
        );
    }

    #[test]
    fn test_selection_override() {
        let ranged = Subject::new("Bio", day(5), 3, day(1)).with_range("1", "9");
        assert_eq!(
            StrategySelection::Weighted.resolve(&ranged),
            AllocationStrategy::Weighted
        );
        let plain = Subject::new("Math", day(5), 3, day(1));
        assert_eq!(
            StrategySelection::FixedSplit.resolve(&plain),
            AllocationStrategy::FixedSplit
        );
        assert_eq!(
            StrategySelection::Auto.resolve(&plain),
            AllocationStrategy::Weighted
        );
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(1.234_56, 2) - 1.23).abs() < 1e-12);
        assert!((round_to(1.25, 1) - 1.3).abs() < 1e-12);
        assert!((round_to(4.0 / 3.0, 1) - 1.3).abs() < 1e-12);
        assert_eq!(round_to(0.004, 2), 0.0);
    }
}
