//! Per-run hours ledger.
//!
//! Tracks cumulative assigned hours per employee during one generation
//! run. Every fill adds to it and every reassignment moves hours between
//! two employees, so it always equals the per-employee sum of shift
//! durations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Employee;

/// Employee id → assigned hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursLedger {
    hours: HashMap<String, u32>,
}

impl HoursLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with a zero entry for every employee.
    pub fn for_roster(employees: &[Employee]) -> Self {
        Self {
            hours: employees.iter().map(|e| (e.id.clone(), 0)).collect(),
        }
    }

    /// Hours assigned to an employee (0 if unknown).
    pub fn hours(&self, employee_id: &str) -> u32 {
        self.hours.get(employee_id).copied().unwrap_or(0)
    }

    /// Adds hours to an employee.
    pub fn add(&mut self, employee_id: &str, hours: u32) {
        *self.hours.entry(employee_id.to_string()).or_insert(0) += hours;
    }

    /// Moves hours from one employee to another.
    pub fn transfer(&mut self, from: &str, to: &str, hours: u32) {
        if let Some(h) = self.hours.get_mut(from) {
            *h = h.saturating_sub(hours);
        }
        self.add(to, hours);
    }

    /// Sum over all employees.
    pub fn total(&self) -> u32 {
        self.hours.values().sum()
    }

    /// Iterates `(employee_id, hours)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.hours.iter().map(|(id, h)| (id.as_str(), *h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_for_roster_starts_at_zero() {
        let roster = vec![
            Employee::new("a", Role::Crew),
            Employee::new("b", Role::Kitchen),
        ];
        let ledger = HoursLedger::for_roster(&roster);
        assert_eq!(ledger.hours("a"), 0);
        assert_eq!(ledger.hours("b"), 0);
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.iter().count(), 2);
    }

    #[test]
    fn test_add_and_transfer() {
        let mut ledger = HoursLedger::new();
        ledger.add("a", 8);
        ledger.add("a", 8);
        assert_eq!(ledger.hours("a"), 16);

        ledger.transfer("a", "b", 8);
        assert_eq!(ledger.hours("a"), 8);
        assert_eq!(ledger.hours("b"), 8);
        assert_eq!(ledger.total(), 16);
    }

    #[test]
    fn test_unknown_employee() {
        assert_eq!(HoursLedger::new().hours("ghost"), 0);
    }
}
