//! Plan entry (session) model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Material;

/// What a session is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Primary study of new material.
    Study,
    /// Spaced-repetition review, `offset_days` after the anchoring study session.
    Review { offset_days: u32 },
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Study => write!(f, "Study"),
            Self::Review { offset_days } => write!(f, "Review(D+{offset_days})"),
        }
    }
}

/// One scheduled unit of work.
///
/// Refers to its subject by name, and carries a copy of the subject's
/// material metadata for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub date: NaiveDate,
    /// Owning subject's name.
    pub subject: String,
    pub kind: SessionKind,
    /// Material slice covered, e.g. `"p.4 ~ p.6"`. Empty when no range was supplied.
    pub range_label: String,
    /// Planned hours.
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}

impl PlanEntry {
    /// Creates a study entry with no range label.
    pub fn study(date: NaiveDate, subject: impl Into<String>, hours: f64) -> Self {
        Self {
            date,
            subject: subject.into(),
            kind: SessionKind::Study,
            range_label: String::new(),
            hours,
            material: None,
        }
    }

    /// Creates a review entry.
    pub fn review(
        date: NaiveDate,
        subject: impl Into<String>,
        offset_days: u32,
        hours: f64,
    ) -> Self {
        Self {
            date,
            subject: subject.into(),
            kind: SessionKind::Review { offset_days },
            range_label: String::new(),
            hours,
            material: None,
        }
    }

    /// Sets the range label.
    pub fn with_range_label(mut self, label: impl Into<String>) -> Self {
        self.range_label = label.into();
        self
    }

    /// Sets the material metadata.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    #[inline]
    pub fn is_study(&self) -> bool {
        self.kind == SessionKind::Study
    }

    #[inline]
    pub fn is_review(&self) -> bool {
        matches!(self.kind, SessionKind::Review { .. })
    }

    /// Review offset in days, `None` for study entries.
    pub fn review_offset(&self) -> Option<u32> {
        match self.kind {
            SessionKind::Review { offset_days } => Some(offset_days),
            SessionKind::Study => None,
        }
    }
}
