//! Error types.
//!
//! Per-subject problems never abort a planning run. They are collected as
//! [`Diagnostic`]s on the resulting [`StudyPlan`](crate::models::StudyPlan)
//! and the affected subject degrades to "no entries" (or is dropped before
//! weighting, for malformed input).

use thiserror::Error;

/// Failure to interpret a pair of range texts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A range text contains no decimal digits.
    #[error("range text '{text}' contains no digits")]
    MissingDigits { text: String },

    /// The numeric token does not fit in a `u32`.
    #[error("range number in '{text}' is too large")]
    Overflow { text: String },

    /// The range ends before it starts.
    #[error("range end {end} is before range start {start}")]
    Reversed { start: u32, end: u32 },

    /// Only one of start/end was supplied.
    #[error("range needs both a start and an end")]
    Incomplete,
}

/// Why a subject input was rejected before weighting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("subject name is empty")]
    MissingName,

    #[error("exam date is missing")]
    MissingExamDate,

    #[error("importance {0} is outside 1..=5")]
    ImportanceOutOfRange(u8),
}

/// Planning-run conditions reported alongside the plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The subject's range could not be used for fixed-split scheduling.
    #[error("subject '{subject}' has an unusable range: {source}")]
    InvalidRange {
        subject: String,
        #[source]
        source: RangeError,
    },

    /// The subject input was dropped before weighting.
    #[error("subject input #{index} is malformed: {reason}")]
    MalformedSubjectInput {
        index: usize,
        #[source]
        reason: MalformedReason,
    },

    /// No subject has any study day left. The plan is empty.
    #[error("no subject has study days left")]
    NoActiveSubjects,

    /// The daily hour budget is not a positive finite number. The plan is empty.
    #[error("daily hour budget {0} is not a positive number")]
    InvalidBudget(f64),

    /// Two accepted subjects share a name; entries for both are grouped together.
    #[error("subject name '{0}' is used more than once")]
    DuplicateSubject(String),
}

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational; the plan is complete for its inputs.
    Info,
    /// Part of the input was excluded from the plan.
    Warning,
}

/// A planning-run diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub error: PlanError,
}

impl Diagnostic {
    pub fn warning(error: PlanError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn info(error: PlanError) -> Self {
        Self {
            severity: Severity::Info,
            error,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    #[error("Configuration error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
