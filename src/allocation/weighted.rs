//! Weighted time allocation.
//!
//! # Algorithm
//!
//! 1. `total_weight = Σ weight` over subjects with days left.
//! 2. For each day offset `d` in `0..max(days_left)`, every subject with
//!    `d < days_left` gets `round(weight / total_weight × budget, 2)` hours.
//! 3. Zero-hour sessions are dropped.
//!
//! Rounding is per entry. A day's total can drift from the budget by up to
//! half a hundredth per subject; the drift is not redistributed.
//!
//! # Complexity
//! O(D · n) where D = max days left, n = subjects.

use chrono::{Days, NaiveDate};

use super::round_to;
use crate::models::{PlanEntry, Subject};

/// Allocates `daily_hours` across `subjects` for every day each one is active.
///
/// Ranges are ignored. Returns no entries when every subject's weight is zero.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study_plan::allocation::allocate;
/// use u_study_plan::models::Subject;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let exam = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
/// let math = Subject::new("Math", exam, 5, today);
///
/// let entries = allocate(&[&math], 4.0, today);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].hours, 4.0);
/// ```
pub fn allocate(subjects: &[&Subject], daily_hours: f64, today: NaiveDate) -> Vec<PlanEntry> {
    allocate_indexed(subjects, daily_hours, today)
        .into_iter()
        .map(|(_, entry)| entry)
        .collect()
}

/// Like [`allocate`], but pairs each entry with the index of its subject in
/// `subjects`, so entries of same-named subjects stay distinguishable.
pub fn allocate_indexed(
    subjects: &[&Subject],
    daily_hours: f64,
    today: NaiveDate,
) -> Vec<(usize, PlanEntry)> {
    let total_weight: f64 = subjects
        .iter()
        .filter(|s| s.is_active())
        .map(|s| s.weight())
        .sum();
    if total_weight <= 0.0 {
        return Vec::new();
    }

    let horizon = subjects.iter().map(|s| s.days_left()).max().unwrap_or(0);
    let mut entries = Vec::new();

    for offset in 0..horizon {
        let Some(date) = today.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };
        for (index, subject) in subjects.iter().enumerate() {
            if offset >= subject.days_left() {
                continue;
            }
            let hours = round_to(subject.weight() / total_weight * daily_hours, 2);
            if hours > 0.0 {
                entries.push((index, PlanEntry::study(date, subject.name.as_str(), hours)));
            }
        }
    }

    entries
}
