//! Plan generation and summary metrics.
//!
//! # Algorithm
//!
//! `Planner` validates subject inputs, allocates study time per subject
//! strategy, injects spaced-repetition reviews after range-split sessions,
//! and merges everything into one `(date, subject)`-ordered session list.
//!
//! # Summary
//!
//! `PlanSummary` computes load metrics: study/review totals, per-subject
//! and per-day hours, peak day, and budget overrun.

mod assembler;
mod engine;
mod summary;

pub use assembler::assemble;
pub use engine::{generate_plan, Planner};
pub use summary::PlanSummary;
