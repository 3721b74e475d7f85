//! Workforce shift scheduling for the U-Engine ecosystem.
//!
//! Given a roster (roles, rates, weekly hour caps, availability) and an
//! hourly demand forecast, produces a weekly schedule that respects hard
//! constraints while keeping labor cost down and coverage up.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Employee`, `ForecastEntry`, `ShiftSlot`,
//!   `Shift`, `HoursLedger`, `Schedule`
//! - **`scheduler`**: Slot generation, greedy fill, cost optimizer, metrics
//!   and the `ShiftScheduler` pipeline
//! - **`validation`**: Input integrity checks (duplicate IDs, negative caps,
//!   malformed availability)
//! - **`config`**: Tunable heuristic constants, loadable from TOML
//! - **`status`**: Three-state status for background generation tasks
//! - **`demo`**: Sample and seeded random inputs
//!
//! # Hard Constraints
//!
//! Every schedule satisfies, per employee:
//! - role of each shift equals the employee's role
//! - each shift lies inside one availability window
//! - no two shifts on the same day overlap
//! - total hours stay within the weekly cap
//!
//! # Example
//!
//! ```
//! use u_shift::demo;
//! use u_shift::scheduler::ShiftScheduler;
//!
//! let schedule = ShiftScheduler::new()
//!     .generate(&demo::sample_roster(), &demo::sample_forecast())
//!     .unwrap();
//! assert!(schedule.coverage_score <= 100);
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod status;
pub mod validation;

pub use error::{Result, ScheduleError};
