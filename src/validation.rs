//! Input preparation for planning runs.
//!
//! Turns raw [`SubjectInput`]s into [`Subject`]s before any allocation
//! happens. Detects:
//! - Missing subject names
//! - Missing exam dates
//! - Importance outside `1..=5`
//! - Ranges with only one end supplied
//! - Duplicate subject names
//!
//! Malformed inputs are dropped whole, never partially processed. Every
//! problem is reported; nothing here aborts the run.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{Diagnostic, MalformedReason, PlanError, RangeError};
use crate::models::{Subject, SubjectInput};

/// Accepted subjects and the diagnostics raised while preparing them.
#[derive(Debug, Clone, Default)]
pub struct PreparedSubjects {
    pub subjects: Vec<Subject>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validates inputs and derives `days_left`/`weight` against `today`.
///
/// Checks, per input:
/// 1. Name is not blank (surrounding whitespace is trimmed)
/// 2. Exam date is present
/// 3. Importance is in `1..=5`
///
/// An input failing any check is dropped with one diagnostic per failed
/// check. Accepted inputs keep their range texts; blank range texts count as
/// absent, and a range with only one end is kept as an unusable range.
pub fn prepare_subjects(inputs: &[SubjectInput], today: NaiveDate) -> PreparedSubjects {
    let mut prepared = PreparedSubjects::default();
    let mut seen_names = HashSet::new();

    for (index, input) in inputs.iter().enumerate() {
        let reasons = malformed_reasons(input);
        if !reasons.is_empty() {
            for reason in reasons {
                let error = PlanError::MalformedSubjectInput { index, reason };
                tracing::warn!(%error, "dropping subject input");
                prepared.diagnostics.push(Diagnostic::warning(error));
            }
            continue;
        }
        let Some(exam_date) = input.exam_date else {
            continue;
        };

        let name = input.name.trim();
        if !seen_names.insert(name.to_string()) {
            tracing::warn!(subject = name, "duplicate subject name");
            prepared
                .diagnostics
                .push(Diagnostic::info(PlanError::DuplicateSubject(name.to_string())));
        }

        if exam_date < today {
            tracing::debug!(subject = name, %exam_date, "exam date is already past");
        }

        let mut subject = Subject::new(name, exam_date, input.importance, today);
        match (non_blank(&input.range_start), non_blank(&input.range_end)) {
            (Some(start), Some(end)) => subject = subject.with_range(start, end),
            (None, None) => {}
            _ => subject = subject.with_range_result(Err(RangeError::Incomplete)),
        }
        if let Some(material) = &input.material {
            subject = subject.with_material(material.clone());
        }

        prepared.subjects.push(subject);
    }

    prepared
}

fn malformed_reasons(input: &SubjectInput) -> Vec<MalformedReason> {
    let mut reasons = Vec::new();
    if input.name.trim().is_empty() {
        reasons.push(MalformedReason::MissingName);
    }
    if input.exam_date.is_none() {
        reasons.push(MalformedReason::MissingExamDate);
    }
    if !(1..=5).contains(&input.importance) {
        reasons.push(MalformedReason::ImportanceOutOfRange(input.importance));
    }
    reasons
}

fn non_blank(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}
