//! Employee model.
//!
//! Employees are the staff that fill shift slots. Each has one role, an
//! hourly rate, a weekly hour cap, and per-day availability windows.
//! Employees are read-only inputs to a generation run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Day, HourRange};

/// Job role of an employee (and of the slot they fill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Front-of-house crew.
    Crew,
    /// Shift or store manager.
    Manager,
    /// Kitchen staff.
    Kitchen,
    /// Table or counter service.
    Service,
}

impl Role {
    /// All roles in declaration order.
    pub const ALL: [Role; 4] = [Role::Crew, Role::Manager, Role::Kitchen, Role::Service];
}

/// A schedulable employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The single role this employee works.
    pub role: Role,
    /// Weekly hour cap.
    pub max_hours_per_week: f64,
    /// Cost per worked hour.
    pub hourly_rate: f64,
    /// Availability windows per day. Ranges are neither merged nor sorted.
    #[serde(default)]
    pub availability: BTreeMap<Day, Vec<HourRange>>,
}

impl Employee {
    /// Creates an employee with no availability, no hour allowance and a zero rate.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            max_hours_per_week: 0.0,
            hourly_rate: 0.0,
            availability: BTreeMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_max_hours(mut self, max_hours_per_week: f64) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    /// Sets the hourly rate.
    pub fn with_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Adds an availability window `[start, end)` on `day`.
    pub fn with_availability(mut self, day: Day, start: u32, end: u32) -> Self {
        self.availability
            .entry(day)
            .or_default()
            .push(HourRange::new(start, end));
        self
    }

    /// Whether the employee is free for the whole of `[start_hour, end_hour)` on `day`.
    ///
    /// The range must fit inside a single availability window. A day
    /// with no entry means unavailable.
    pub fn is_available(&self, day: Day, start_hour: u32, end_hour: u32) -> bool {
        self.availability
            .get(&day)
            .is_some_and(|ranges| ranges.iter().any(|r| r.covers(start_hour, end_hour)))
    }

    /// Whether `hours` more can be assigned on top of `assigned` without exceeding the cap.
    #[inline]
    pub fn has_capacity_for(&self, assigned: u32, hours: u32) -> bool {
        f64::from(assigned + hours) <= self.max_hours_per_week
    }

    /// Cost of working `hours` at this employee's rate.
    #[inline]
    pub fn cost_of(&self, hours: u32) -> f64 {
        f64::from(hours) * self.hourly_rate
    }
}
