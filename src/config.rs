//! Planner configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! strategy = "auto"                 # auto | weighted | fixed_split
//! remainder_policy = "last_day_absorbs"   # or first_days_absorb
//! review_offsets = [1, 3, 7]
//! review_weighted_sessions = false
//! ```

use serde::{Deserialize, Serialize};

use crate::allocation::{RemainderPolicy, StrategySelection};
use crate::error::ConfigError;
use crate::review::ReviewOffsets;

/// Planning-run configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// How subjects are assigned to allocation strategies.
    pub strategy: StrategySelection,
    /// Where range-division remainders go.
    pub remainder_policy: RemainderPolicy,
    /// Review offsets after each range-split study session.
    pub review_offsets: ReviewOffsets,
    /// Whether weighted (rangeless) study sessions also get reviews.
    pub review_weighted_sessions: bool,
}

impl PlannerConfig {
    /// Parses a TOML configuration.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML, unknown enum values, or
    /// invalid review offsets.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// Propagates serializer failures as [`ConfigError::InvalidValue`].
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".into(),
            reason: e.to_string(),
        })
    }

    /// Sets the strategy selection.
    pub fn with_strategy(mut self, strategy: StrategySelection) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the remainder policy.
    pub fn with_remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.remainder_policy = policy;
        self
    }

    /// Sets the review offsets.
    pub fn with_review_offsets(mut self, offsets: ReviewOffsets) -> Self {
        self.review_offsets = offsets;
        self
    }

    /// Enables or disables reviews for weighted sessions.
    pub fn with_weighted_reviews(mut self, enabled: bool) -> Self {
        self.review_weighted_sessions = enabled;
        self
    }
}
