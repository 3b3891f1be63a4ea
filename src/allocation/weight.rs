//! Urgency/importance weighting.
//!
//! ```text
//! weight = URGENCY_SHARE · (1 / days_left) + IMPORTANCE_SHARE · (importance / MAX_IMPORTANCE)
//! ```
//!
//! Urgency is inverse-linear, so a nearer exam dominates sharply; importance
//! is normalized linearly. The two are blended in equal proportion. This is
//! a fixed policy, not a tuning knob.
//!
//! The weight is unnormalized. Normalization across subjects happens in
//! [`allocate`](super::allocate).

/// Share of the weight driven by deadline proximity.
pub const URGENCY_SHARE: f64 = 0.5;

/// Share of the weight driven by importance.
pub const IMPORTANCE_SHARE: f64 = 0.5;

/// Importance scale maximum.
pub const MAX_IMPORTANCE: f64 = 5.0;

/// Deadline proximity, `1 / days_left`. Zero when no days are left.
#[inline]
pub fn urgency(days_left: u32) -> f64 {
    if days_left == 0 {
        0.0
    } else {
        1.0 / f64::from(days_left)
    }
}

/// Unnormalized allocation weight of a subject.
///
/// Returns 0 when `days_left == 0`: the exam is today or past and the
/// subject takes no share of the budget.
///
/// # Example
///
/// ```
/// use u_study_plan::allocation::compute_weight;
///
/// assert!((compute_weight(2, 5) - 0.75).abs() < 1e-12);
/// assert_eq!(compute_weight(0, 5), 0.0);
/// ```
pub fn compute_weight(days_left: u32, importance: u8) -> f64 {
    if days_left == 0 {
        return 0.0;
    }
    URGENCY_SHARE * urgency(days_left) + IMPORTANCE_SHARE * (f64::from(importance) / MAX_IMPORTANCE)
}
