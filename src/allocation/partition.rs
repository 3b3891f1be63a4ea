//! Range partitioning (fixed-split allocation).
//!
//! Divides a subject's material range `[start, end]` into contiguous daily
//! chunks over its remaining days.
//!
//! # Algorithm
//!
//! `total = end - start + 1`, `per_day = max(total / days, 1)`.
//!
//! - [`RemainderPolicy::LastDayAbsorbs`]: every day takes `per_day` units and
//!   the last day's chunk is stretched to `end`. When the range is shorter
//!   than the day count, days after the range runs out get no chunk.
//! - [`RemainderPolicy::FirstDaysAbsorb`]: every day takes `total / days`
//!   units and the first `total mod days` days take one more. Days left with
//!   zero units get no chunk.
//!
//! Either way the chunks cover `[start, end]` exactly, with no gaps or
//! overlaps.

use chrono::{Days, NaiveDate};

use super::{round_to, RemainderPolicy};
use crate::models::Subject;
use crate::range::ParsedRange;

/// A contiguous slice of a range assigned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeChunk {
    /// Day offset from the plan start.
    pub day: u32,
    /// First unit (inclusive).
    pub start: u32,
    /// Last unit (inclusive).
    pub end: u32,
}

impl RangeChunk {
    /// Units covered by the chunk, at least one.
    #[inline]
    pub fn units(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }
}

/// A dated chunk with its study hours.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyChunk {
    pub date: NaiveDate,
    pub start: u32,
    pub end: u32,
    pub hours: f64,
}

/// Splits `range` over `days_left` days.
///
/// Returns no chunks when `days_left == 0` or the range is reversed.
///
/// # Example
///
/// ```
/// use u_study_plan::allocation::{partition, RemainderPolicy};
/// use u_study_plan::range::parse_range;
///
/// let range = parse_range("1", "10").unwrap();
/// let chunks = partition(&range, 3, RemainderPolicy::LastDayAbsorbs);
/// let spans: Vec<_> = chunks.iter().map(|c| (c.start, c.end)).collect();
/// assert_eq!(spans, vec![(1, 3), (4, 6), (7, 10)]);
/// ```
pub fn partition(range: &ParsedRange, days_left: u32, policy: RemainderPolicy) -> Vec<RangeChunk> {
    let total = range.len();
    if days_left == 0 || total == 0 {
        return Vec::new();
    }

    let days = u64::from(days_left);
    let first = u64::from(range.start);
    let last = u64::from(range.end);
    let mut chunks = Vec::new();

    match policy {
        RemainderPolicy::LastDayAbsorbs => {
            let per_day = (total / days).max(1);
            for d in 0..days {
                let start = first + d * per_day;
                if start > last {
                    break;
                }
                let end = if d == days - 1 {
                    last
                } else {
                    (start + per_day - 1).min(last)
                };
                chunks.push(chunk(d, start, end));
            }
        }
        RemainderPolicy::FirstDaysAbsorb => {
            let base = total / days;
            let extra = total % days;
            let mut next = first;
            for d in 0..days {
                let size = base + u64::from(d < extra);
                if size == 0 {
                    break;
                }
                chunks.push(chunk(d, next, next + size - 1));
                next += size;
            }
        }
    }

    chunks
}

/// Offsets, starts, and ends never exceed the `u32` range bounds they derive from.
fn chunk(day: u64, start: u64, end: u64) -> RangeChunk {
    RangeChunk {
        day: day as u32,
        start: start as u32,
        end: end as u32,
    }
}

/// Dated daily chunks for a subject's range, starting at `today`.
///
/// Every chunk gets an equal share of the budget,
/// `round(daily_hours / subject_count, 1)`, regardless of weight.
///
/// Returns nothing when the subject has no usable range, no days left, or
/// `subject_count == 0`.
pub fn partition_subject(
    subject: &Subject,
    daily_hours: f64,
    subject_count: usize,
    today: NaiveDate,
    policy: RemainderPolicy,
) -> Vec<DailyChunk> {
    let Some(range) = subject.range() else {
        return Vec::new();
    };
    if subject_count == 0 {
        return Vec::new();
    }

    let hours = round_to(daily_hours / subject_count as f64, 1);
    partition(range, subject.days_left(), policy)
        .into_iter()
        .filter_map(|c| {
            let date = today.checked_add_days(Days::new(u64::from(c.day)))?;
            Some(DailyChunk {
                date,
                start: c.start,
                end: c.end,
                hours,
            })
        })
        .collect()
}
