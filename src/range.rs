//! Range text parsing.
//!
//! Study material is described by free-form start/end texts such as
//! `"p.1"` / `"p.150"` or `"문제1"` / `"문제200"`. The parser extracts the
//! first run of decimal digits from each text and keeps every non-digit
//! character of the start text as a label prefix.
//!
//! Nothing else about the text is validated.

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A numeric material range with its display prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRange {
    /// First unit (inclusive).
    pub start: u32,
    /// Last unit (inclusive).
    pub end: u32,
    /// Non-digit characters of the start text, verbatim (e.g. `"p."`).
    pub prefix: String,
}

impl ParsedRange {
    /// Checks `end >= start`.
    ///
    /// [`parse_range`] does not enforce ordering; callers that partition the
    /// range must go through this first.
    pub fn ordered(self) -> Result<Self, RangeError> {
        if self.end < self.start {
            Err(RangeError::Reversed {
                start: self.start,
                end: self.end,
            })
        } else {
            Ok(self)
        }
    }

    /// Number of units in the range, `end - start + 1`.
    ///
    /// Zero for a reversed range.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            u64::from(self.end) - u64::from(self.start) + 1
        }
    }

    /// Whether the range covers no units (only possible when reversed).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label for a slice of this range, e.g. `"p.4 ~ p.6"`.
    pub fn label(&self, from: u32, to: u32) -> String {
        format!("{p}{from} ~ {p}{to}", p = self.prefix)
    }
}

/// Parses a pair of range texts.
///
/// Only the first run of digits in each text counts, so `"ch3-12"` parses as
/// 3, not 312. Digits in later runs are dropped, not concatenated.
///
/// # Errors
/// - [`RangeError::MissingDigits`] if either text has no digits.
/// - [`RangeError::Overflow`] if a number does not fit in `u32`.
///
/// # Example
///
/// ```
/// use u_study_plan::range::parse_range;
///
/// let r = parse_range("p.1", "p.150").unwrap();
/// assert_eq!((r.start, r.end, r.prefix.as_str()), (1, 150, "p."));
/// ```
pub fn parse_range(start_text: &str, end_text: &str) -> Result<ParsedRange, RangeError> {
    let start = first_number(start_text)?;
    let end = first_number(end_text)?;
    let prefix = start_text.chars().filter(|c| !c.is_ascii_digit()).collect();
    Ok(ParsedRange { start, end, prefix })
}

/// First maximal run of ASCII digits in `text`, as a number.
fn first_number(text: &str) -> Result<u32, RangeError> {
    let digits: &str = match text.find(|c: char| c.is_ascii_digit()) {
        Some(begin) => {
            let rest = &text[begin..];
            let len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            &rest[..len]
        }
        None => {
            return Err(RangeError::MissingDigits {
                text: text.to_string(),
            })
        }
    };

    digits.parse::<u32>().map_err(|_| RangeError::Overflow {
        text: text.to_string(),
    })
}
