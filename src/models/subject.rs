//! Subject models.
//!
//! A [`SubjectInput`] is raw, possibly incomplete user input. Validation turns
//! it into a [`Subject`], whose derived fields (`days_left`, `weight`) are
//! computed once, against the run's reference date, and never change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocation::compute_weight;
use crate::error::RangeError;
use crate::range::{parse_range, ParsedRange};

/// Kind of study material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Main textbook.
    #[default]
    Textbook,
    /// Workbook, reader, or other supplementary material.
    Supplementary,
}

/// Descriptive metadata for the material a subject is studied from.
///
/// Not used for allocation; carried through to the plan for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Material {
    pub kind: MaterialKind,
    /// Publisher or book title.
    #[serde(default)]
    pub publisher: String,
    /// Unit or chapter name.
    #[serde(default)]
    pub unit: String,
}

impl Material {
    /// Creates material metadata of the given kind.
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            publisher: String::new(),
            unit: String::new(),
        }
    }

    /// Sets the publisher or book title.
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Sets the unit name.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// Raw subject input, as collected from a form or a file.
///
/// Every field may be missing or out of range; see
/// [`prepare_subjects`](crate::validation::prepare_subjects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    /// 1 (low) to 5 (high).
    #[serde(default = "default_importance")]
    pub importance: u8,
    #[serde(default)]
    pub range_start: Option<String>,
    #[serde(default)]
    pub range_end: Option<String>,
    #[serde(default)]
    pub material: Option<Material>,
}

const fn default_importance() -> u8 {
    3
}

impl SubjectInput {
    /// Creates an input with the given name and default importance (3).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exam_date: None,
            importance: default_importance(),
            range_start: None,
            range_end: None,
            material: None,
        }
    }

    /// Sets the exam date.
    pub fn with_exam_date(mut self, date: NaiveDate) -> Self {
        self.exam_date = Some(date);
        self
    }

    /// Sets the importance (1..=5).
    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = importance;
        self
    }

    /// Sets both range texts.
    pub fn with_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.range_start = Some(start.into());
        self.range_end = Some(end.into());
        self
    }

    /// Sets material metadata.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }
}

impl Default for SubjectInput {
    fn default() -> Self {
        Self::new("")
    }
}

/// An accepted exam subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    /// Grouping key for plan entries.
    pub name: String,
    pub exam_date: NaiveDate,
    /// 1 (low) to 5 (high).
    pub importance: u8,
    pub material: Option<Material>,
    /// `None` when no range was supplied.
    range: Option<Result<ParsedRange, RangeError>>,
    days_left: u32,
    weight: f64,
}

impl Subject {
    /// Creates a subject and derives `days_left` and `weight` against `today`.
    pub fn new(
        name: impl Into<String>,
        exam_date: NaiveDate,
        importance: u8,
        today: NaiveDate,
    ) -> Self {
        let days_left = days_between(today, exam_date);
        Self {
            name: name.into(),
            exam_date,
            importance,
            material: None,
            range: None,
            days_left,
            weight: compute_weight(days_left, importance),
        }
    }

    /// Parses and attaches a material range.
    ///
    /// A range that fails to parse, or ends before it starts, is kept as an
    /// error; see [`Subject::range_error`].
    pub fn with_range(self, start_text: &str, end_text: &str) -> Self {
        let parsed = parse_range(start_text, end_text).and_then(ParsedRange::ordered);
        self.with_range_result(parsed)
    }

    pub(crate) fn with_range_result(mut self, range: Result<ParsedRange, RangeError>) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets material metadata.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Days from the reference date to the exam, never negative.
    #[inline]
    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    /// Unnormalized allocation weight. Zero when no days are left.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether the subject still has study days before its exam.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.days_left > 0
    }

    /// Whether any range text was supplied, valid or not.
    pub fn supplies_range(&self) -> bool {
        self.range.is_some()
    }

    /// The parsed range, if one was supplied and is valid.
    pub fn range(&self) -> Option<&ParsedRange> {
        self.range.as_ref().and_then(|r| r.as_ref().ok())
    }

    /// Why the supplied range is unusable, if it is.
    pub fn range_error(&self) -> Option<&RangeError> {
        self.range.as_ref().and_then(|r| r.as_ref().err())
    }
}

/// Whole days from `today` to `exam_date`, clamped at zero.
fn days_between(today: NaiveDate, exam_date: NaiveDate) -> u32 {
    let days = (exam_date - today).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_subject_derived_fields() {
        let today = date(2024, 3, 1);
        let s = Subject::new("Math", date(2024, 3, 3), 5, today);
        assert_eq!(s.days_left(), 2);
        assert!((s.weight() - 0.75).abs() < 1e-12);
        assert!(s.is_active());
    }

    #[test]
    fn test_exam_today_or_past() {
        let today = date(2024, 3, 1);
        let due = Subject::new("Due", today, 5, today);
        assert_eq!(due.days_left(), 0);
        assert_eq!(due.weight(), 0.0);
        assert!(!due.is_active());

        let past = Subject::new("Past", date(2024, 2, 20), 5, today);
        assert_eq!(past.days_left(), 0);
    }

    #[test]
    fn test_subject_range() {
        let today = date(2024, 3, 1);
        let s = Subject::new("Bio", date(2024, 3, 10), 3, today).with_range("p.1", "p.90");
        assert!(s.supplies_range());
        assert_eq!(s.range().unwrap().end, 90);
        assert!(s.range_error().is_none());

        let bad = Subject::new("Bio", date(2024, 3, 10), 3, today).with_range("p.9", "p.1");
        assert!(bad.supplies_range());
        assert!(bad.range().is_none());
        assert_eq!(
            bad.range_error(),
            Some(&RangeError::Reversed { start: 9, end: 1 })
        );

        let none = Subject::new("Bio", date(2024, 3, 10), 3, today);
        assert!(!none.supplies_range());
    }

    #[test]
    fn test_input_builder() {
        let input = SubjectInput::new("History")
            .with_exam_date(date(2024, 5, 1))
            .with_importance(4)
            .with_range("1번", "40번")
            .with_material(
                Material::new(MaterialKind::Supplementary)
                    .with_publisher("EBS")
                    .with_unit("Modern era"),
            );

        assert_eq!(input.name, "History");
        assert_eq!(input.importance, 4);
        assert_eq!(input.range_end.as_deref(), Some("40번"));
        let material = input.material.unwrap();
        assert_eq!(material.kind, MaterialKind::Supplementary);
        assert_eq!(material.publisher, "EBS");
    }

    #[test]
    fn test_input_deserialize_defaults() {
        let input: SubjectInput =
            serde_json::from_str(r#"{"name": "Art", "exam_date": "2024-06-01"}"#).unwrap();
        assert_eq!(input.importance, 3);
        assert_eq!(input.exam_date, Some(date(2024, 6, 1)));
        assert!(input.range_start.is_none());
        assert!(input.material.is_none());
    }
}
