//! Planning engine.
//!
//! # Algorithm
//!
//! 1. Prepare inputs: drop malformed subjects, derive `days_left`/`weight`.
//! 2. Assign each subject a strategy (see [`StrategySelection`]).
//! 3. Range subjects that still have days left get
//!    `round(budget / subjects, 1)` hours a day and their material split into
//!    daily chunks, each followed by reviews.
//! 4. Weighted subjects share by weight what those range subjects leave of
//!    the budget, or all of it when none of them is splitting.
//! 5. Merge and sort by `(date, subject)`.
//!
//! A run is a pure function of its inputs and `today`; nothing reads the
//! clock.
//!
//! [`StrategySelection`]: crate::allocation::StrategySelection

use chrono::NaiveDate;

use crate::allocation::{allocate_indexed, partition_subject, AllocationStrategy, StrategySelection};
use crate::config::PlannerConfig;
use crate::error::{Diagnostic, PlanError};
use crate::models::{PlanEntry, StudyPlan, Subject, SubjectInput};
use crate::review::schedule_reviews;
use crate::validation::{prepare_subjects, PreparedSubjects};

use super::assembler::assemble;

/// Study planner.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study_plan::planner::Planner;
/// use u_study_plan::config::PlannerConfig;
/// use u_study_plan::models::SubjectInput;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let subjects = vec![
///     SubjectInput::new("Math")
///         .with_exam_date(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
///         .with_range("p.1", "p.30"),
/// ];
///
/// let plan = Planner::new(PlannerConfig::default()).plan(&subjects, 4.0, today);
/// assert_eq!(plan.study_entries().count(), 3);
/// assert_eq!(plan.entries[0].range_label, "p.1 ~ p.10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Runs one planning pass.
    ///
    /// Never fails: problems with individual subjects, an invalid budget,
    /// or a run with nothing left to study all produce a (possibly empty)
    /// plan with diagnostics.
    pub fn plan(&self, inputs: &[SubjectInput], daily_hours: f64, today: NaiveDate) -> StudyPlan {
        let _span = tracing::debug_span!("plan", %today, daily_hours).entered();

        let PreparedSubjects {
            subjects,
            mut diagnostics,
        } = prepare_subjects(inputs, today);

        if !(daily_hours.is_finite() && daily_hours > 0.0) {
            let error = PlanError::InvalidBudget(daily_hours);
            tracing::warn!(%error, "no plan generated");
            diagnostics.push(Diagnostic::warning(error));
            return finish(Vec::new(), subjects, diagnostics);
        }

        if !subjects.iter().any(Subject::is_active) {
            tracing::debug!(subjects = subjects.len(), "no active subjects");
            diagnostics.push(Diagnostic::info(PlanError::NoActiveSubjects));
            return finish(Vec::new(), subjects, diagnostics);
        }

        let selection = self.config.strategy;
        if selection != StrategySelection::Weighted {
            for subject in &subjects {
                if let Some(source) = subject.range_error() {
                    let error = PlanError::InvalidRange {
                        subject: subject.name.clone(),
                        source: source.clone(),
                    };
                    tracing::warn!(%error, "range unusable, not splitting it");
                    diagnostics.push(Diagnostic::warning(error));
                }
            }
        }

        let (weighted, fixed): (Vec<&Subject>, Vec<&Subject>) = subjects
            .iter()
            .partition(|s| selection.resolve(s) == AllocationStrategy::Weighted);
        let subject_count = subjects.len();
        let splitting = fixed
            .iter()
            .filter(|s| s.is_active() && s.range().is_some())
            .count();
        tracing::debug!(
            weighted = weighted.len(),
            fixed_split = fixed.len(),
            splitting,
            "strategies assigned"
        );

        let mut study = Vec::new();
        let mut reviews = Vec::new();

        if !weighted.is_empty() {
            let share = daily_hours * (subject_count - splitting) as f64 / subject_count as f64;
            for (index, entry) in allocate_indexed(&weighted, share, today) {
                let subject = weighted[index];
                let entry = with_material(entry, subject);
                if self.config.review_weighted_sessions {
                    reviews.extend(
                        schedule_reviews(
                            entry.date,
                            subject.exam_date,
                            &entry.subject,
                            &entry.range_label,
                            entry.hours,
                            &self.config.review_offsets,
                        )
                        .into_iter()
                        .map(|review| with_material(review, subject)),
                    );
                }
                study.push(entry);
            }
        }

        for subject in fixed {
            let Some(range) = subject.range() else {
                tracing::debug!(subject = %subject.name, "no usable range to split");
                continue;
            };

            let chunks = partition_subject(
                subject,
                daily_hours,
                subject_count,
                today,
                self.config.remainder_policy,
            );
            for chunk in chunks {
                let label = range.label(chunk.start, chunk.end);
                reviews.extend(
                    schedule_reviews(
                        chunk.date,
                        subject.exam_date,
                        &subject.name,
                        &label,
                        chunk.hours,
                        &self.config.review_offsets,
                    )
                    .into_iter()
                    .map(|review| with_material(review, subject)),
                );
                study.push(with_material(
                    PlanEntry::study(chunk.date, subject.name.as_str(), chunk.hours)
                        .with_range_label(label),
                    subject,
                ));
            }
        }

        tracing::debug!(
            study = study.len(),
            reviews = reviews.len(),
            "plan generated"
        );
        finish(assemble(study, reviews), subjects, diagnostics)
    }
}

fn with_material(entry: PlanEntry, subject: &Subject) -> PlanEntry {
    match &subject.material {
        Some(material) => entry.with_material(material.clone()),
        None => entry,
    }
}

fn finish(entries: Vec<PlanEntry>, subjects: Vec<Subject>, diagnostics: Vec<Diagnostic>) -> StudyPlan {
    StudyPlan {
        entries,
        subjects,
        diagnostics,
    }
}

/// Runs one planning pass with the default configuration.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_study_plan::generate_plan;
/// use u_study_plan::models::SubjectInput;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let subjects = vec![
///     SubjectInput::new("Math")
///         .with_exam_date(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap())
///         .with_importance(5),
/// ];
///
/// let plan = generate_plan(&subjects, 4.0, today);
/// assert_eq!(plan.len(), 2);
/// assert!(plan.entries.iter().all(|e| e.hours == 4.0));
/// ```
pub fn generate_plan(inputs: &[SubjectInput], daily_hours: f64, today: NaiveDate) -> StudyPlan {
    Planner::default().plan(inputs, daily_hours, today)
}
