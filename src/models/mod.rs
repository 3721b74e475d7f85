//! Shift-scheduling domain models.
//!
//! Provides the data types exchanged with the engine: the roster and
//! forecast that go in, the slots and shifts it works with, and the
//! schedule that comes out.
//!
//! # Domain Mappings
//!
//! | u-shift | Restaurant | Retail | Healthcare |
//! |---------|-----------|--------|------------|
//! | Employee | Crew member | Sales associate | Nurse |
//! | Role | Kitchen/Service | Cashier/Floor | RN/LPN |
//! | ForecastEntry | Covers per hour | Footfall per hour | Census per hour |
//! | ShiftSlot | Open shift | Open shift | Open shift |

mod calendar;
mod employee;
mod forecast;
mod ledger;
mod schedule;
mod shift;

pub use calendar::{Day, HourRange, HourRangeParseError, HOURS_PER_DAY};
pub use employee::{Employee, Role};
pub use forecast::{daily_demand, ForecastEntry};
pub use ledger::HoursLedger;
pub use schedule::{GenerationReport, OptimizerStats, Schedule};
pub use shift::{Shift, ShiftSlot};
