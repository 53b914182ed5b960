//! Validation of raw caller input before it reaches the planner.
//!
//! The core clamps and falls back on its own; this layer is where bad input
//! is refused with a message the user can act on.

use sprint_core::{MAX_DAYS, MIN_DAYS};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Add a topic you want to master.")]
    EmptyTopic,
    #[error("Set a positive number of days for your learning sprint.")]
    InvalidDays,
    #[error("Choose a timeframe of 365 days or fewer to keep the plan actionable.")]
    TooManyDays,
}

/// A validated plan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub topic: String,
    pub days: u32,
}

impl PlanRequest {
    /// Validate a topic and a numeric day count. Fractional counts are
    /// rounded after the range check.
    pub fn new(topic: &str, days: f64) -> Result<Self, RequestError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        Ok(Self {
            topic: topic.to_string(),
            days: validate_days(days)?,
        })
    }

    /// Validate a topic and a day count still in text form.
    pub fn parse(topic: &str, raw_days: &str) -> Result<Self, RequestError> {
        if topic.trim().is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        Self::new(topic, parse_days(raw_days)?)
    }
}

/// Parse a day count typed by a user. Empty or non-numeric text is invalid.
pub fn parse_days(raw: &str) -> Result<f64, RequestError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RequestError::InvalidDays)
}

/// Range-check a day count and round it to a whole number of days.
pub fn validate_days(days: f64) -> Result<u32, RequestError> {
    if !days.is_finite() || days < f64::from(MIN_DAYS) {
        return Err(RequestError::InvalidDays);
    }
    if days > f64::from(MAX_DAYS) {
        return Err(RequestError::TooManyDays);
    }
    Ok(days.round() as u32)
}
