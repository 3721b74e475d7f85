//! Schedule quality metrics.
//!
//! Computes the figures reported on a finished schedule from the final
//! shift list, the hours ledger and the roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total labor cost | Σ shift hours × assignee's hourly rate |
//! | Total hours | Σ ledger hours |
//! | Coverage score | round(min(100, filled slots / generated slots × 100)), 100 if no slots |
//!
//! Coverage is a slot-fill ratio, not forecast hours covered. It is a
//! coarse proxy and is reported as such.

use std::collections::HashMap;

use crate::models::{Employee, HoursLedger, Shift};

/// Cost, hours and coverage of an assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleMetrics {
    /// Σ shift hours × assignee rate.
    pub total_labor_cost: f64,
    /// Σ assigned hours.
    pub total_hours: u32,
    /// Filled-slot percentage, 0..=100.
    pub coverage_score: u32,
}

impl ScheduleMetrics {
    /// Computes metrics from a final assignment.
    ///
    /// # Arguments
    /// * `shifts` - Assigned shifts.
    /// * `ledger` - Hours ledger matching `shifts`.
    /// * `employees` - Roster; rates are looked up here, not cached on shifts.
    /// * `slot_count` - Number of slots generated for the run.
    pub fn calculate(
        shifts: &[Shift],
        ledger: &HoursLedger,
        employees: &[Employee],
        slot_count: usize,
    ) -> Self {
        Self {
            total_labor_cost: labor_cost(shifts, employees),
            total_hours: ledger.total(),
            coverage_score: coverage_score(shifts.len(), slot_count),
        }
    }
}

/// Σ shift hours × current rate of the assignee.
///
/// Shifts owned by an id missing from the roster cost nothing.
pub fn labor_cost(shifts: &[Shift], employees: &[Employee]) -> f64 {
    let by_id: HashMap<&str, &Employee> = employees.iter().map(|e| (e.id.as_str(), e)).collect();
    shifts
        .iter()
        .filter_map(|s| {
            by_id
                .get(s.employee_id.as_str())
                .map(|e| e.cost_of(s.duration_hours()))
        })
        .sum()
}

/// Filled slots as a rounded percentage, capped at 100.
pub fn coverage_score(filled: usize, slot_count: usize) -> u32 {
    if slot_count == 0 {
        return 100;
    }
    let ratio = filled as f64 / slot_count as f64 * 100.0;
    ratio.min(100.0).round() as u32
}
