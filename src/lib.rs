//! Exam study planner for the U-Engine ecosystem.
//!
//! Turns a set of exam subjects (deadline, importance, optional material
//! range) and a daily hour budget into a dated list of study and
//! spaced-repetition review sessions.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SubjectInput`, `Subject`, `Material`,
//!   `PlanEntry`, `SessionKind`, `StudyPlan`
//! - **`range`**: Free-form range text parsing (`"p.1"` → 1, prefix `"p."`)
//! - **`allocation`**: Urgency/importance weighting, weighted time
//!   allocation, and range partitioning
//! - **`review`**: Review sessions at fixed day offsets
//! - **`planner`**: The planning engine and plan summary metrics
//! - **`validation`**: Input preparation (malformed inputs, duplicates)
//! - **`config`**: TOML-loadable planner configuration
//! - **`error`**: Error and diagnostic types
//!
//! # Determinism
//!
//! The reference date is always passed in; nothing reads the system clock.
//! Identical inputs produce identical plans.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use u_study_plan::generate_plan;
//! use u_study_plan::models::SubjectInput;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let subjects = vec![
//!     SubjectInput::new("Math")
//!         .with_exam_date(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap())
//!         .with_importance(5),
//!     SubjectInput::new("Biology")
//!         .with_exam_date(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap())
//!         .with_range("p.1", "p.120"),
//! ];
//!
//! let plan = generate_plan(&subjects, 6.0, today);
//! for entry in plan.entries_on(today) {
//!     println!("{} {} {} {}h", entry.subject, entry.kind, entry.range_label, entry.hours);
//! }
//! ```

pub mod allocation;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod range;
pub mod review;
pub mod validation;

pub use planner::generate_plan;
