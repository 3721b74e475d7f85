//! Shift generation pipeline.
//!
//! Turns a roster and a demand forecast into a weekly schedule with a
//! bounded, deterministic heuristic.
//!
//! # Algorithm
//!
//! - `SlotGenerator` derives demand slots from daily forecast totals.
//! - `GreedyAssigner` fills them with the least-loaded eligible employee.
//! - `CostOptimizer` moves shifts to cheaper eligible employees, one swap
//!   per pass, up to a pass cap.
//! - `ScheduleMetrics` reports cost, hours and slot coverage.
//!
//! `ShiftScheduler` runs the whole pipeline. It is not an optimal solver;
//! it produces fast, reproducible schedules suitable for periodic
//! regeneration.
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//!   Ch. 4.1: Local search (hill climbing)

mod builder;
mod greedy;
mod metrics;
mod optimizer;
mod slots;
mod state;

pub use builder::{ScheduleRequest, ShiftScheduler};
pub use greedy::GreedyAssigner;
pub use metrics::{coverage_score, labor_cost, ScheduleMetrics};
pub use optimizer::CostOptimizer;
pub use slots::SlotGenerator;
pub use state::AssignmentState;
