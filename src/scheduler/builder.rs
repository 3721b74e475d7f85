//! Schedule builder: the end-to-end generation pipeline.
//!
//! # Algorithm
//!
//! 1. Validate configuration, roster and forecast.
//! 2. Generate demand slots from the forecast.
//! 3. Fill slots greedily with the least-loaded eligible employee.
//! 4. Hill-climb: move shifts to cheaper eligible employees.
//! 5. Compute cost, hours and coverage.
//!
//! Each run owns its ledger and shift list, so a single
//! [`ShiftScheduler`] may serve concurrent callers.
//!
//! # Complexity
//! Dominated by the optimizer: O(p * s² * e) where p=pass cap,
//! s=shifts, e=employees.

use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use super::greedy::GreedyAssigner;
use super::metrics::{labor_cost, ScheduleMetrics};
use super::optimizer::CostOptimizer;
use super::slots::SlotGenerator;
use super::state::AssignmentState;
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::models::{Employee, ForecastEntry, GenerationReport, Schedule};
use crate::validation::validate_input;

/// Input container for schedule generation.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Staff to schedule.
    pub employees: Vec<Employee>,
    /// Hourly demand.
    pub forecast: Vec<ForecastEntry>,
    /// Run identifier. Generated when `None`.
    pub week_id: Option<String>,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(employees: Vec<Employee>, forecast: Vec<ForecastEntry>) -> Self {
        Self {
            employees,
            forecast,
            week_id: None,
        }
    }

    /// Fixes the run identifier.
    pub fn with_week_id(mut self, week_id: impl Into<String>) -> Self {
        self.week_id = Some(week_id.into());
        self
    }
}

/// Greedy-then-hill-climbing shift scheduler.
///
/// Deterministic for a given roster, forecast, configuration and week id.
///
/// # Example
///
/// ```
/// use u_shift::models::{Day, Employee, ForecastEntry, Role};
/// use u_shift::scheduler::ShiftScheduler;
///
/// let employees = vec![
///     Employee::new("emp-1", Role::Crew)
///         .with_name("Bob")
///         .with_max_hours(40.0)
///         .with_rate(15.0)
///         .with_availability(Day::Monday, 8, 16),
/// ];
/// let forecast: Vec<_> = (8..18).map(|h| ForecastEntry::new(Day::Monday, h, 2)).collect();
///
/// let schedule = ShiftScheduler::new().generate(&employees, &forecast).unwrap();
/// assert_eq!(schedule.shift_count(), 1);
/// assert_eq!(schedule.coverage_score, 50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    config: SchedulerConfig,
}

impl ShiftScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a schedule under a fresh week id.
    pub fn generate(&self, employees: &[Employee], forecast: &[ForecastEntry]) -> Result<Schedule> {
        Ok(self.generate_report(employees, forecast)?.schedule)
    }

    /// Generates a schedule under a fresh week id, with run diagnostics.
    pub fn generate_report(
        &self,
        employees: &[Employee],
        forecast: &[ForecastEntry],
    ) -> Result<GenerationReport> {
        self.generate_with_week_id(employees, forecast, new_week_id())
    }

    /// Generates a schedule from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<GenerationReport> {
        let week_id = request.week_id.clone().unwrap_or_else(new_week_id);
        self.generate_with_week_id(&request.employees, &request.forecast, week_id)
    }

    /// Generates a schedule under the given week id.
    ///
    /// Shift ids are `<week_id>-shift-<n>`, `n` being the fill order.
    pub fn generate_with_week_id(
        &self,
        employees: &[Employee],
        forecast: &[ForecastEntry],
        week_id: impl Into<String>,
    ) -> Result<GenerationReport> {
        let week_id = week_id.into();
        self.config.validate()?;
        validate_input(employees, forecast)?;

        let started = Instant::now();
        info!(
            event = "generation_start",
            week_id = %week_id,
            employees = employees.len(),
            forecast_entries = forecast.len(),
        );

        let slots = SlotGenerator::new(&self.config).generate(employees, forecast);

        let mut state = AssignmentState::new(employees);
        let unfilled = GreedyAssigner::new(&week_id).assign(&slots, employees, &mut state);
        let greedy_labor_cost = labor_cost(state.shifts(), employees);
        info!(
            event = "phase_end",
            phase = "greedy",
            slots = slots.len(),
            filled = state.shifts().len(),
            unfilled = unfilled.len(),
            labor_cost = greedy_labor_cost,
        );

        let optimizer = CostOptimizer::new(self.config.max_optimizer_passes).optimize(employees, &mut state);
        let (shifts, ledger) = state.into_parts();
        let metrics = ScheduleMetrics::calculate(&shifts, &ledger, employees, slots.len());
        info!(
            event = "phase_end",
            phase = "optimizer",
            passes = optimizer.passes,
            swaps = optimizer.swaps,
            converged = optimizer.converged,
            labor_cost = metrics.total_labor_cost,
        );

        info!(
            event = "generation_end",
            week_id = %week_id,
            duration_ms = started.elapsed().as_millis() as u64,
            shifts = shifts.len(),
            coverage = metrics.coverage_score,
            total_hours = metrics.total_hours,
        );

        Ok(GenerationReport {
            schedule: Schedule {
                week_id,
                shifts,
                total_labor_cost: metrics.total_labor_cost,
                coverage_score: metrics.coverage_score,
                total_hours: metrics.total_hours,
            },
            unfilled_slots: unfilled,
            greedy_labor_cost,
            optimizer,
        })
    }
}

fn new_week_id() -> String {
    format!("week-{}", Uuid::new_v4())
}
