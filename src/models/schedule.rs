//! Schedule (solution) model.
//!
//! A schedule is the result of one generation run: the assigned shifts
//! and the metrics derived from them. It is never modified after the run
//! returns it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Day, Shift, ShiftSlot};

/// A generated weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Run identifier.
    pub week_id: String,
    /// Assigned shifts, in fill order.
    pub shifts: Vec<Shift>,
    /// Σ shift hours × assignee rate.
    pub total_labor_cost: f64,
    /// Filled slots as a percentage of generated slots (0-100).
    pub coverage_score: u32,
    /// Σ assigned hours.
    pub total_hours: u32,
}

/// Counters from the cost-reduction phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerStats {
    /// Passes started (at most the configured cap).
    pub passes: u32,
    /// Reassignments made.
    pub swaps: u32,
    /// `true` if the last pass found no swap; `false` if the pass cap stopped the search.
    pub converged: bool,
}

/// A schedule plus diagnostics from the run that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub schedule: Schedule,
    /// Slots no eligible employee could take.
    pub unfilled_slots: Vec<ShiftSlot>,
    /// Labor cost after the greedy phase, before optimization.
    pub greedy_labor_cost: f64,
    pub optimizer: OptimizerStats,
}

impl Schedule {
    /// Number of assigned shifts.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    /// Finds a shift by id.
    pub fn shift(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Returns all shifts for an employee.
    pub fn shifts_for_employee(&self, employee_id: &str) -> Vec<&Shift> {
        self.shifts
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .collect()
    }

    /// Returns all shifts on a day.
    pub fn shifts_on(&self, day: Day) -> Vec<&Shift> {
        self.shifts.iter().filter(|s| s.day == day).collect()
    }

    /// Assigned hours per employee.
    pub fn hours_by_employee(&self) -> HashMap<String, u32> {
        let mut hours: HashMap<String, u32> = HashMap::new();
        for s in &self.shifts {
            *hours.entry(s.employee_id.clone()).or_insert(0) += s.duration_hours();
        }
        hours
    }

    /// Whether every generated slot was filled.
    pub fn is_fully_covered(&self) -> bool {
        self.coverage_score >= 100
    }
}
