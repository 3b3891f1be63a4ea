//! Plan summary metrics.
//!
//! Computes load indicators from a finished plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total study / review hours | Sum over entries of each kind |
//! | Hours by subject | Study + review hours per subject |
//! | Hours by date | Study + review hours per calendar day |
//! | Peak day | Day with the largest load (earliest on ties) |
//! | Budget overrun | Largest daily load above the daily budget |
//!
//! Reviews are planned on top of study sessions, so a day's load can
//! exceed the budget in range-split plans.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::StudyPlan;

/// Plan load indicators. All values are in hours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanSummary {
    pub total_study_hours: f64,
    pub total_review_hours: f64,
    pub study_sessions: usize,
    pub review_sessions: usize,
    pub hours_by_subject: BTreeMap<String, f64>,
    pub hours_by_date: BTreeMap<NaiveDate, f64>,
    /// Heaviest day and its load.
    pub peak_day: Option<(NaiveDate, f64)>,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
}

impl PlanSummary {
    /// Computes the summary of a plan.
    pub fn calculate(plan: &StudyPlan) -> Self {
        let mut summary = Self::default();

        for e in &plan.entries {
            if e.is_review() {
                summary.total_review_hours += e.hours;
                summary.review_sessions += 1;
            } else {
                summary.total_study_hours += e.hours;
                summary.study_sessions += 1;
            }
            *summary
                .hours_by_subject
                .entry(e.subject.clone())
                .or_insert(0.0) += e.hours;
            *summary.hours_by_date.entry(e.date).or_insert(0.0) += e.hours;
        }

        for (&date, &hours) in &summary.hours_by_date {
            match summary.peak_day {
                Some((_, peak)) if peak >= hours => {}
                _ => summary.peak_day = Some((date, hours)),
            }
        }
        summary.first_day = summary.hours_by_date.keys().next().copied();
        summary.last_day = summary.hours_by_date.keys().next_back().copied();

        summary
    }

    /// Study plus review hours.
    pub fn total_hours(&self) -> f64 {
        self.total_study_hours + self.total_review_hours
    }

    /// Number of days with at least one session.
    pub fn planned_days(&self) -> usize {
        self.hours_by_date.len()
    }

    /// Largest amount by which any day exceeds `daily_hours`, or 0.
    pub fn max_budget_overrun(&self, daily_hours: f64) -> f64 {
        self.hours_by_date
            .values()
            .map(|&h| h - daily_hours)
            .fold(0.0, f64::max)
    }

    /// Whether every day stays within `daily_hours + tolerance`.
    pub fn fits_budget(&self, daily_hours: f64, tolerance: f64) -> bool {
        self.max_budget_overrun(daily_hours) <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanEntry;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn plan_of(entries: Vec<PlanEntry>) -> StudyPlan {
        StudyPlan {
            entries,
            ..StudyPlan::default()
        }
    }

    #[test]
    fn test_summary_basic() {
        let plan = plan_of(vec![
            PlanEntry::study(day(1), "Bio", 2.0),
            PlanEntry::study(day(1), "Math", 2.0),
            PlanEntry::review(day(2), "Bio", 1, 1.0),
            PlanEntry::study(day(2), "Math", 2.0),
        ]);
        let s = PlanSummary::calculate(&plan);

        assert!((s.total_study_hours - 6.0).abs() < 1e-10);
        assert!((s.total_review_hours - 1.0).abs() < 1e-10);
        assert!((s.total_hours() - 7.0).abs() < 1e-10);
        assert_eq!(s.study_sessions, 3);
        assert_eq!(s.review_sessions, 1);
        assert!((s.hours_by_subject["Bio"] - 3.0).abs() < 1e-10);
        assert!((s.hours_by_subject["Math"] - 4.0).abs() < 1e-10);
        assert_eq!(s.planned_days(), 2);
        assert_eq!(s.first_day, Some(day(1)));
        assert_eq!(s.last_day, Some(day(2)));
    }

    #[test]
    fn test_peak_day_earliest_on_tie() {
        let plan = plan_of(vec![
            PlanEntry::study(day(1), "A", 3.0),
            PlanEntry::study(day(2), "A", 5.0),
            PlanEntry::study(day(3), "A", 5.0),
        ]);
        let s = PlanSummary::calculate(&plan);
        assert_eq!(s.peak_day, Some((day(2), 5.0)));
    }

    #[test]
    fn test_budget_overrun() {
        let plan = plan_of(vec![
            PlanEntry::study(day(1), "Bio", 4.0),
            PlanEntry::review(day(1), "Bio", 1, 2.0),
            PlanEntry::study(day(2), "Bio", 4.0),
        ]);
        let s = PlanSummary::calculate(&plan);
        assert!((s.max_budget_overrun(4.0) - 2.0).abs() < 1e-10);
        assert!(s.fits_budget(6.0, 0.0));
        assert!(!s.fits_budget(4.0, 1.0));
        assert!((s.max_budget_overrun(10.0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = PlanSummary::calculate(&StudyPlan::new());
        assert_eq!(s.total_hours(), 0.0);
        assert_eq!(s.planned_days(), 0);
        assert!(s.peak_day.is_none());
        assert!(s.first_day.is_none());
        assert!(s.fits_budget(1.0, 0.0));
    }

    #[test]
    fn test_summary_of_generated_plan() {
        use crate::generate_plan;
        use crate::models::SubjectInput;

        let inputs = vec![
            SubjectInput::new("Math").with_exam_date(day(4)).with_importance(4),
            SubjectInput::new("Bio").with_exam_date(day(6)).with_importance(2),
        ];
        let plan = generate_plan(&inputs, 5.0, day(1));
        let s = PlanSummary::calculate(&plan);

        assert_eq!(s.review_sessions, 0);
        assert_eq!(s.planned_days(), 5);
        assert!(s.fits_budget(5.0, 0.01));
    }
}
