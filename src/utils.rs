//! Utility functions
use crate::errors::EstimationError;
use chrono::{Days, NaiveDate};

/// Length of the default NEO feed window, matching the upstream feed limit
pub const FEED_WINDOW_DAYS: u64 = 7;

/// Require a finite, strictly positive value
pub fn check_positive(name: &str, value: f64) -> Result<f64, EstimationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EstimationError::InvalidInput(format!(
            "{} must be a finite number > 0, got {}",
            name, value
        )))
    }
}

/// Require a finite, non-negative value
pub fn check_non_negative(name: &str, value: f64) -> Result<f64, EstimationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EstimationError::InvalidInput(format!(
            "{} must be a finite number >= 0, got {}",
            name, value
        )))
    }
}

/// Require a value inside the closed interval [min, max]
pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<f64, EstimationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(EstimationError::InvalidInput(format!(
            "{} must be within [{}, {}], got {}",
            name, min, max, value
        )))
    }
}

/// Resolve the NEO feed date range, filling gaps relative to `today`
pub fn feed_window(
    today: NaiveDate,
    start_date: Option<String>,
    end_date: Option<String>,
) -> (String, String) {
    let start = start_date
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
    let end = end_date
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| {
            (today + Days::new(FEED_WINDOW_DAYS))
                .format("%Y-%m-%d")
                .to_string()
        });
    (start, end)
}
