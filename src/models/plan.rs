//! Study plan (solution) model.
//!
//! A study plan is the complete, ordered output of one planning run: every
//! study and review session, the subjects they belong to, and any
//! diagnostics raised while building it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{PlanEntry, Subject};
use crate::error::{Diagnostic, Severity};

/// The output of one planning run.
///
/// Entries are ordered by `(date, subject)`; ties keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct StudyPlan {
    /// Sessions in chronological, then lexical subject order.
    pub entries: Vec<PlanEntry>,
    /// Subjects accepted into the run.
    pub subjects: Vec<Subject>,
    /// Problems found in the input. The plan is still usable.
    pub diagnostics: Vec<Diagnostic>,
}

impl StudyPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds an accepted subject by name.
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Entries scheduled on `date` (e.g. "today's sessions").
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&PlanEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Entries belonging to a subject.
    pub fn entries_for_subject(&self, name: &str) -> Vec<&PlanEntry> {
        self.entries.iter().filter(|e| e.subject == name).collect()
    }

    /// Study entries only.
    pub fn study_entries(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_study())
    }

    /// Review entries only.
    pub fn review_entries(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_review())
    }

    /// Distinct dates with at least one entry, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.entries.iter().map(|e| e.date).collect();
        dates.dedup();
        dates
    }

    /// Entries grouped by date, for calendar views.
    pub fn by_date(&self) -> BTreeMap<NaiveDate, Vec<&PlanEntry>> {
        let mut days: BTreeMap<NaiveDate, Vec<&PlanEntry>> = BTreeMap::new();
        for e in &self.entries {
            days.entry(e.date).or_default().push(e);
        }
        days
    }

    /// Total planned hours on `date`, study and review.
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.date == date)
            .map(|e| e.hours)
            .sum()
    }

    /// Whether any diagnostic excluded part of the input.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}
