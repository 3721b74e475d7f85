//! Input validation for shift scheduling.
//!
//! Checks the roster and forecast before the engine runs. The engine
//! itself assumes clean input, so malformed data is rejected here with
//! messages that name the offending field. Detects:
//! - Duplicate or empty employee IDs
//! - Negative or non-finite hour caps and rates
//! - Inverted or out-of-day availability ranges
//! - Forecast hours outside 0..=23 and invalid sales figures
//!
//! Under-coverage is not a validation concern: an empty roster or a
//! forecast nobody can staff is valid input.

use crate::models::{Employee, ForecastEntry, HOURS_PER_DAY};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same ID.
    DuplicateId,
    /// An employee has an empty ID.
    EmptyId,
    /// `maxHoursPerWeek` is negative, NaN or infinite.
    InvalidMaxHours,
    /// `hourlyRate` is negative, NaN or infinite.
    InvalidHourlyRate,
    /// An availability range is empty, inverted or ends after 24:00.
    MalformedAvailability,
    /// A forecast entry's hour is outside 0..=23.
    InvalidForecastHour,
    /// A forecast entry's projected sales is negative, NaN or infinite.
    InvalidProjectedSales,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn is_valid_amount(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

/// Validates the roster and forecast for a generation run.
///
/// Checks:
/// 1. No duplicate or empty employee IDs
/// 2. `maxHoursPerWeek` and `hourlyRate` are finite and non-negative
/// 3. Every availability range satisfies `start < end <= 24`
/// 4. Every forecast hour is in 0..=23
/// 5. Every projected sales figure is finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], forecast: &[ForecastEntry]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for e in employees {
        if e.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Employee '{}' has an empty id", e.name),
            ));
        } else if !ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }

        if !is_valid_amount(e.max_hours_per_week) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMaxHours,
                format!(
                    "Employee '{}' has invalid maxHoursPerWeek: {}",
                    e.id, e.max_hours_per_week
                ),
            ));
        }

        if !is_valid_amount(e.hourly_rate) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHourlyRate,
                format!("Employee '{}' has invalid hourlyRate: {}", e.id, e.hourly_rate),
            ));
        }

        for (day, ranges) in &e.availability {
            for r in ranges.iter().filter(|r| !r.is_well_formed()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedAvailability,
                    format!(
                        "Employee '{}' has malformed availability on {}: {}-{} \
                         (expected start < end <= {})",
                        e.id, day, r.start, r.end, HOURS_PER_DAY
                    ),
                ));
            }
        }
    }

    for (i, f) in forecast.iter().enumerate() {
        if f.hour >= HOURS_PER_DAY {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidForecastHour,
                format!("Forecast entry {} ({}) has hour {} outside 0..=23", i, f.day, f.hour),
            ));
        }
        if !is_valid_amount(f.projected_sales) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProjectedSales,
                format!(
                    "Forecast entry {} ({}) has invalid projectedSales: {}",
                    i, f.day, f.projected_sales
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
