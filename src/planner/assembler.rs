//! Plan assembly.

use crate::models::PlanEntry;

/// Merges study and review entries into one ordered session list.
///
/// Sorted by `(date, subject)`. The sort is stable: entries equal on both
/// keys keep their input order, study entries before reviews.
pub fn assemble(study: Vec<PlanEntry>, reviews: Vec<PlanEntry>) -> Vec<PlanEntry> {
    let mut entries = study;
    entries.extend(reviews);
    entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.subject.cmp(&b.subject)));
    entries
}
