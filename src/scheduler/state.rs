//! Working state of one generation run.
//!
//! Holds the shift list and the hours ledger that the greedy and
//! optimizer phases read and mutate. Both are created fresh per run;
//! nothing is shared between runs.

use crate::models::{Day, Employee, HoursLedger, Shift, ShiftSlot};

/// Shift list plus hours ledger for one run.
#[derive(Debug, Clone, Default)]
pub struct AssignmentState {
    shifts: Vec<Shift>,
    ledger: HoursLedger,
}

impl AssignmentState {
    /// Creates an empty state with a zeroed ledger entry per employee.
    pub fn new(employees: &[Employee]) -> Self {
        Self {
            shifts: Vec::new(),
            ledger: HoursLedger::for_roster(employees),
        }
    }

    /// Assigned shifts in fill order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Current hours ledger.
    pub fn ledger(&self) -> &HoursLedger {
        &self.ledger
    }

    /// Whether the employee already works an overlapping shift that day.
    pub fn has_conflict(&self, employee_id: &str, day: Day, start_hour: u32, end_hour: u32) -> bool {
        self.shifts
            .iter()
            .any(|s| s.employee_id == employee_id && s.overlaps(day, start_hour, end_hour))
    }

    /// Checks the hour cap, availability and double-booking constraints.
    ///
    /// Role matching is left to the caller: the greedy pass matches the
    /// slot's role, the optimizer matches the shift's.
    pub fn can_take(&self, employee: &Employee, day: Day, start_hour: u32, end_hour: u32) -> bool {
        let hours = end_hour.saturating_sub(start_hour);
        employee.has_capacity_for(self.ledger.hours(&employee.id), hours)
            && employee.is_available(day, start_hour, end_hour)
            && !self.has_conflict(&employee.id, day, start_hour, end_hour)
    }

    /// Whether `employee` may fill `slot` (role included).
    pub fn is_eligible(&self, employee: &Employee, slot: &ShiftSlot) -> bool {
        employee.role == slot.role && self.can_take(employee, slot.day, slot.start_hour, slot.end_hour)
    }

    /// Records a new shift and charges its hours to the owner.
    pub fn push(&mut self, shift: Shift) {
        self.ledger.add(&shift.employee_id, shift.duration_hours());
        self.shifts.push(shift);
    }

    /// Replaces the shift at `index` with a copy owned by `employee`.
    ///
    /// The shift keeps its id and position. Hours move from the previous
    /// owner to the new one.
    pub fn reassign(&mut self, index: usize, employee: &Employee) {
        let Some(current) = self.shifts.get(index) else {
            return;
        };
        let moved = current.reassigned_to(employee);
        self.ledger
            .transfer(&current.employee_id, &employee.id, current.duration_hours());
        self.shifts[index] = moved;
    }

    /// Consumes the state.
    pub fn into_parts(self) -> (Vec<Shift>, HoursLedger) {
        (self.shifts, self.ledger)
    }
}
