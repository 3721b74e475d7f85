//! Demand forecast model.
//!
//! A forecast is a list of hourly demand entries. Several entries per day
//! are expected (one per hour); the slot generator only looks at daily
//! totals.

use serde::{Deserialize, Serialize};

use super::Day;

/// Forecast demand for one hour of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    /// Day of the week.
    pub day: Day,
    /// Hour of the day (0..=23).
    pub hour: u32,
    /// Staff needed during this hour.
    pub required_staff: u32,
    /// Projected sales during this hour.
    #[serde(default)]
    pub projected_sales: f64,
}

impl ForecastEntry {
    /// Creates a forecast entry with no projected sales.
    pub fn new(day: Day, hour: u32, required_staff: u32) -> Self {
        Self {
            day,
            hour,
            required_staff,
            projected_sales: 0.0,
        }
    }

    /// Sets the projected sales figure.
    pub fn with_sales(mut self, projected_sales: f64) -> Self {
        self.projected_sales = projected_sales;
        self
    }
}

/// Sums `required_staff` over every entry for `day`.
///
/// Returns `None` when the forecast has no entry for that day, which is
/// different from a day with zero demand. The sum saturates at
/// `u32::MAX`.
pub fn daily_demand(forecast: &[ForecastEntry], day: Day) -> Option<u32> {
    forecast
        .iter()
        .filter(|f| f.day == day)
        .map(|f| f.required_staff)
        .fold(None, |acc, staff| Some(acc.unwrap_or(0).saturating_add(staff)))
}
