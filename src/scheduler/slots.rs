//! Demand slot generation.
//!
//! # Algorithm
//!
//! 1. Walk the week in calendar order, skipping days with no forecast entry.
//! 2. Sum `required_staff` over the day's entries.
//! 3. If the sum exceeds the threshold, emit one slot per role per
//!    configured block.
//!
//! Only the daily total matters. A day with demand concentrated in one
//! hour gets the same blocks as a day with flat demand; the per-hour
//! shape is deliberately ignored.
//!
//! # Output Order
//! Day (Monday first), then role in order of first appearance in the
//! roster, then block order. The greedy pass fills slots in this order,
//! so changing it changes the schedule.

use crate::config::SchedulerConfig;
use crate::models::{daily_demand, Day, Employee, ForecastEntry, Role, ShiftSlot};

/// Turns a forecast into an ordered list of demand slots.
#[derive(Debug, Clone)]
pub struct SlotGenerator<'a> {
    config: &'a SchedulerConfig,
}

impl<'a> SlotGenerator<'a> {
    /// Creates a generator using the given thresholds and blocks.
    pub fn new(config: &'a SchedulerConfig) -> Self {
        Self { config }
    }

    /// Generates slots for the week.
    pub fn generate(&self, employees: &[Employee], forecast: &[ForecastEntry]) -> Vec<ShiftSlot> {
        let roles = roster_roles(employees);
        let mut slots = Vec::new();

        for day in Day::ALL {
            let Some(demand) = daily_demand(forecast, day) else {
                continue;
            };
            if demand <= self.config.daily_demand_threshold {
                continue;
            }
            for &role in &roles {
                for block in &self.config.shift_blocks {
                    slots.push(ShiftSlot::new(day, block.start, block.end, role));
                }
            }
        }

        slots
    }
}

/// Distinct roster roles in first-appearance order.
///
/// An empty roster yields every role, so demand on a busy day still
/// turns into (unfillable) slots and shows up as lost coverage.
fn roster_roles(employees: &[Employee]) -> Vec<Role> {
    if employees.is_empty() {
        return Role::ALL.to_vec();
    }
    let mut roles: Vec<Role> = Vec::new();
    for e in employees {
        if !roles.contains(&e.role) {
            roles.push(e.role);
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourRange;

    fn busy_day(day: Day, staff_per_hour: u32) -> Vec<ForecastEntry> {
        (8..22)
            .map(|h| ForecastEntry::new(day, h, staff_per_hour))
            .collect()
    }

    #[test]
    fn test_two_blocks_per_role() {
        let config = SchedulerConfig::default();
        let employees = vec![Employee::new("a", Role::Crew)];
        let slots = SlotGenerator::new(&config).generate(&employees, &busy_day(Day::Monday, 2));

        assert_eq!(
            slots,
            vec![
                ShiftSlot::new(Day::Monday, 8, 16, Role::Crew),
                ShiftSlot::new(Day::Monday, 16, 24, Role::Crew),
            ]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = SchedulerConfig::default();
        let employees = vec![Employee::new("a", Role::Crew)];
        // 10 total: not above threshold
        let forecast: Vec<_> = (0..10).map(|h| ForecastEntry::new(Day::Monday, h, 1)).collect();
        assert!(SlotGenerator::new(&config).generate(&employees, &forecast).is_empty());

        // 11 total: above threshold
        let forecast: Vec<_> = (0..11).map(|h| ForecastEntry::new(Day::Monday, h, 1)).collect();
        assert_eq!(SlotGenerator::new(&config).generate(&employees, &forecast).len(), 2);
    }

    #[test]
    fn test_day_then_role_order() {
        let config = SchedulerConfig::default();
        let employees = vec![
            Employee::new("k", Role::Kitchen),
            Employee::new("c1", Role::Crew),
            Employee::new("c2", Role::Crew),
        ];
        // Forecast given out of calendar order
        let mut forecast = busy_day(Day::Wednesday, 1);
        forecast.extend(busy_day(Day::Monday, 1));

        let slots = SlotGenerator::new(&config).generate(&employees, &forecast);
        let keys: Vec<_> = slots.iter().map(|s| (s.day, s.role, s.start_hour)).collect();
        assert_eq!(
            keys,
            vec![
                (Day::Monday, Role::Kitchen, 8),
                (Day::Monday, Role::Kitchen, 16),
                (Day::Monday, Role::Crew, 8),
                (Day::Monday, Role::Crew, 16),
                (Day::Wednesday, Role::Kitchen, 8),
                (Day::Wednesday, Role::Kitchen, 16),
                (Day::Wednesday, Role::Crew, 8),
                (Day::Wednesday, Role::Crew, 16),
            ]
        );
    }

    #[test]
    fn test_empty_forecast() {
        let config = SchedulerConfig::default();
        let employees = vec![Employee::new("a", Role::Crew)];
        assert!(SlotGenerator::new(&config).generate(&employees, &[]).is_empty());
    }

    #[test]
    fn test_empty_roster_uses_all_roles() {
        let config = SchedulerConfig::default();
        let slots = SlotGenerator::new(&config).generate(&[], &busy_day(Day::Monday, 2));
        assert_eq!(slots.len(), Role::ALL.len() * 2);
        assert_eq!(slots[0].role, Role::Crew);
        assert_eq!(slots[7].role, Role::Service);
    }

    #[test]
    fn test_custom_blocks_and_threshold() {
        let config = SchedulerConfig::default()
            .with_daily_demand_threshold(0)
            .with_shift_blocks(vec![HourRange::new(6, 12), HourRange::new(12, 18), HourRange::new(18, 24)]);
        let employees = vec![Employee::new("a", Role::Service)];
        let forecast = vec![ForecastEntry::new(Day::Sunday, 12, 1)];

        let slots = SlotGenerator::new(&config).generate(&employees, &forecast);
        let hours: Vec<_> = slots.iter().map(|s| (s.start_hour, s.end_hour)).collect();
        assert_eq!(hours, vec![(6, 12), (12, 18), (18, 24)]);
        assert!(slots.iter().all(|s| s.day == Day::Sunday && s.required));
    }
}
