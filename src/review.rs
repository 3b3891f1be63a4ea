//! Spaced-repetition review scheduling.
//!
//! Each study session is followed by review sessions at fixed day offsets
//! (`1, 3, 7` by default). A review that would land after the exam is
//! dropped, not moved earlier. Reviews take half the anchoring session's
//! hours, rounded to a tenth.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::allocation::round_to;
use crate::error::ConfigError;
use crate::models::PlanEntry;

/// Default review offsets, in days after the study session.
pub const DEFAULT_REVIEW_OFFSETS: [u32; 3] = [1, 3, 7];

/// Ordered set of review offsets (days after the study session).
///
/// Offsets are positive and strictly increasing. An empty set disables
/// reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ReviewOffsets(Vec<u32>);

impl ReviewOffsets {
    /// Creates an offset set.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] if an offset is zero or the offsets are
    /// not strictly increasing.
    pub fn new(offsets: Vec<u32>) -> Result<Self, ConfigError> {
        if offsets.contains(&0) {
            return Err(invalid("offsets must be at least one day"));
        }
        if offsets.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("offsets must be strictly increasing"));
        }
        Ok(Self(offsets))
    }

    /// No reviews.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `offset` is one of the configured offsets.
    pub fn contains(&self, offset: u32) -> bool {
        self.0.contains(&offset)
    }
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: "review_offsets".into(),
        reason: reason.into(),
    }
}

impl Default for ReviewOffsets {
    fn default() -> Self {
        Self(DEFAULT_REVIEW_OFFSETS.to_vec())
    }
}

impl TryFrom<Vec<u32>> for ReviewOffsets {
    type Error = ConfigError;

    fn try_from(offsets: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(offsets)
    }
}

impl From<ReviewOffsets> for Vec<u32> {
    fn from(offsets: ReviewOffsets) -> Self {
        offsets.0
    }
}

impl fmt::Display for ReviewOffsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|o| format!("D+{o}")).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Review sessions for a study session on `anchor`.
///
/// Emits one entry per offset whose date is on or before `exam_date`, with
/// `round(study_hours / 2, 1)` hours and the study session's range label.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study_plan::review::{schedule_reviews, ReviewOffsets};
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let exam = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
/// let reviews = schedule_reviews(anchor, exam, "Math", "p.1 ~ p.3", 2.0, &ReviewOffsets::default());
///
/// let offsets: Vec<_> = reviews.iter().filter_map(|r| r.review_offset()).collect();
/// assert_eq!(offsets, vec![1, 3]);
/// ```
pub fn schedule_reviews(
    anchor: NaiveDate,
    exam_date: NaiveDate,
    subject: &str,
    range_label: &str,
    study_hours: f64,
    offsets: &ReviewOffsets,
) -> Vec<PlanEntry> {
    let hours = round_to(study_hours / 2.0, 1);
    offsets
        .iter()
        .filter_map(|offset| {
            let date = anchor.checked_add_days(Days::new(u64::from(offset)))?;
            (date <= exam_date).then(|| {
                PlanEntry::review(date, subject, offset, hours).with_range_label(range_label)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionKind;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_all_offsets_fit() {
        let reviews = schedule_reviews(day(1), day(20), "Bio", "1 ~ 5", 3.0, &ReviewOffsets::default());
        let dates: Vec<_> = reviews.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(2), day(4), day(8)]);
        assert!(reviews.iter().all(|r| r.range_label == "1 ~ 5"));
        assert!(reviews.iter().all(|r| (r.hours - 1.5).abs() < 1e-12));
        assert_eq!(reviews[2].kind, SessionKind::Review { offset_days: 7 });
    }

    #[test]
    fn test_late_offsets_dropped() {
        // Exam five days after the study session: D+7 does not fit.
        let reviews = schedule_reviews(day(10), day(15), "Bio", "", 2.0, &ReviewOffsets::default());
        let dates: Vec<_> = reviews.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(11), day(13)]);
    }

    #[test]
    fn test_review_on_exam_day_allowed() {
        let reviews = schedule_reviews(day(10), day(11), "Bio", "", 2.0, &ReviewOffsets::default());
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].date, day(11));
    }

    #[test]
    fn test_no_room_for_reviews() {
        let reviews = schedule_reviews(day(10), day(10), "Bio", "", 2.0, &ReviewOffsets::default());
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_review_hours_rounded() {
        // 1.3 / 2 = 0.65 → 0.7
        let reviews = schedule_reviews(day(1), day(9), "Bio", "", 1.3, &ReviewOffsets::default());
        assert!(reviews.iter().all(|r| (r.hours - 0.7).abs() < 1e-9));
    }

    #[test]
    fn test_custom_offsets() {
        let offsets = ReviewOffsets::new(vec![2, 5]).unwrap();
        let reviews = schedule_reviews(day(1), day(30), "Bio", "", 2.0, &offsets);
        let got: Vec<_> = reviews.iter().filter_map(PlanEntry::review_offset).collect();
        assert_eq!(got, vec![2, 5]);

        assert!(schedule_reviews(day(1), day(30), "Bio", "", 2.0, &ReviewOffsets::none()).is_empty());
    }

    #[test]
    fn test_offsets_validation() {
        assert!(ReviewOffsets::new(vec![1, 3, 7]).is_ok());
        assert!(ReviewOffsets::new(vec![]).is_ok());
        assert!(ReviewOffsets::new(vec![0, 3]).is_err());
        assert!(ReviewOffsets::new(vec![3, 1]).is_err());
        assert!(ReviewOffsets::new(vec![3, 3]).is_err());
    }

    #[test]
    fn test_offsets_display_and_contains() {
        let offsets = ReviewOffsets::default();
        assert_eq!(offsets.to_string(), "[D+1, D+3, D+7]");
        assert!(offsets.contains(3));
        assert!(!offsets.contains(2));
        assert_eq!(offsets.as_slice(), &[1, 3, 7]);
    }

    #[test]
    fn test_offsets_serde() {
        let offsets: ReviewOffsets = serde_json::from_str("[2, 4, 8]").unwrap();
        assert_eq!(offsets.as_slice(), &[2, 4, 8]);
        assert!(serde_json::from_str::<ReviewOffsets>("[4, 2]").is_err());
        assert_eq!(serde_json::to_string(&offsets).unwrap(), "[2,4,8]");
    }
}
