//! Study-planning domain models.
//!
//! Provides the input, intermediate, and output types of a planning run.
//!
//! # Domain Mappings
//!
//! | u-study-plan | Scheduling term | Exam prep |
//! |--------------|-----------------|-----------|
//! | Subject | Task with deadline | Course with an exam date |
//! | PlanEntry | Assignment | Study or review session |
//! | StudyPlan | Schedule | Day-by-day study plan |

mod entry;
mod plan;
mod subject;

pub use entry::{PlanEntry, SessionKind};
pub use plan::StudyPlan;
pub use subject::{Material, MaterialKind, Subject, SubjectInput};
