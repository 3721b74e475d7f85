//! Cost-reducing hill climbing over assigned shifts.
//!
//! # Algorithm
//!
//! Each pass scans the shift list from the start. For each shift, the
//! first employee in roster order that
//! - is not the current owner,
//! - has the shift's role,
//! - has a strictly lower hourly rate than the current owner,
//! - has hours left under the weekly cap,
//! - is available for the whole shift, and
//! - has no overlapping shift that day
//!
//! takes the shift over. After a swap the pass ends and the next pass
//! starts again from the first shift, since the ledger change can alter
//! eligibility for shifts already scanned.
//!
//! The search stops after a pass with no swap or when the pass cap is
//! reached. Hitting the cap is not an error: the state reached so far is
//! kept. Every swap strictly lowers total cost, so the search cannot cycle.
//!
//! # Complexity
//! O(p * s * e * s) where p=pass cap, s=shifts, e=employees.

use tracing::debug;

use super::state::AssignmentState;
use crate::models::{Employee, OptimizerStats, Shift};

/// First-improvement swap search bounded by a pass cap.
#[derive(Debug, Clone, Copy)]
pub struct CostOptimizer {
    max_passes: u32,
}

impl CostOptimizer {
    /// Creates an optimizer that runs at most `max_passes` passes.
    pub fn new(max_passes: u32) -> Self {
        Self { max_passes }
    }

    /// Reassigns shifts to cheaper eligible employees until no swap applies.
    pub fn optimize(&self, employees: &[Employee], state: &mut AssignmentState) -> OptimizerStats {
        let mut stats = OptimizerStats::default();
        let mut improved = true;

        while improved && stats.passes < self.max_passes {
            improved = false;
            stats.passes += 1;

            if let Some((index, candidate)) = find_swap(employees, state) {
                let shift = &state.shifts()[index];
                debug!(
                    event = "swap",
                    pass = stats.passes,
                    shift = %shift.id,
                    from = %shift.employee_id,
                    to = %candidate.id,
                );
                state.reassign(index, candidate);
                stats.swaps += 1;
                improved = true;
            }
        }

        stats.converged = !improved;
        stats
    }
}

/// First (shift index, cheaper employee) pair in scan order.
fn find_swap<'e>(
    employees: &'e [Employee],
    state: &AssignmentState,
) -> Option<(usize, &'e Employee)> {
    state.shifts().iter().enumerate().find_map(|(index, shift)| {
        let current = employees.iter().find(|e| e.id == shift.employee_id)?;
        employees
            .iter()
            .find(|e| is_cheaper_candidate(e, current, shift, state))
            .map(|e| (index, e))
    })
}

fn is_cheaper_candidate(
    candidate: &Employee,
    current: &Employee,
    shift: &Shift,
    state: &AssignmentState,
) -> bool {
    candidate.id != current.id
        && candidate.role == shift.role
        && candidate.hourly_rate < current.hourly_rate
        && state.can_take(candidate, shift.day, shift.start_hour, shift.end_hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Role, ShiftSlot};

    fn crew(id: &str, rate: f64, max_hours: f64) -> Employee {
        Employee::new(id, Role::Crew)
            .with_name(id)
            .with_max_hours(max_hours)
            .with_rate(rate)
            .with_availability(Day::Monday, 8, 24)
            .with_availability(Day::Tuesday, 8, 24)
    }

    fn state_with(employees: &[Employee], owned: &[(&str, Day, u32, u32)]) -> AssignmentState {
        let mut state = AssignmentState::new(employees);
        for (i, (owner, day, start, end)) in owned.iter().enumerate() {
            let employee = employees.iter().find(|e| e.id == *owner).unwrap();
            let slot = ShiftSlot::new(*day, *start, *end, employee.role);
            state.push(Shift::for_slot(format!("s{i}"), &slot, employee));
        }
        state
    }

    #[test]
    fn test_swaps_to_cheaper() {
        let employees = vec![crew("pricey", 25.0, 40.0), crew("cheap", 15.0, 40.0)];
        let mut state = state_with(&employees, &[("pricey", Day::Monday, 8, 16)]);

        let stats = CostOptimizer::new(50).optimize(&employees, &mut state);
        assert_eq!(state.shifts()[0].employee_id, "cheap");
        assert_eq!(state.shifts()[0].id, "s0");
        assert_eq!(state.ledger().hours("pricey"), 0);
        assert_eq!(state.ledger().hours("cheap"), 8);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.passes, 2); // swap pass + clean pass
        assert!(stats.converged);
    }

    #[test]
    fn test_first_cheaper_in_roster_order_wins() {
        // "mid" is listed before "cheapest"; first-found, not cheapest
        let employees = vec![
            crew("pricey", 30.0, 40.0),
            crew("mid", 20.0, 40.0),
            crew("cheapest", 10.0, 40.0),
        ];
        let mut state = state_with(&employees, &[("pricey", Day::Monday, 8, 16)]);

        let stats = CostOptimizer::new(50).optimize(&employees, &mut state);
        // pass 1: pricey → mid, pass 2: mid → cheapest, pass 3: nothing
        assert_eq!(state.shifts()[0].employee_id, "cheapest");
        assert_eq!(stats.swaps, 2);
        assert_eq!(stats.passes, 3);
    }

    #[test]
    fn test_respects_hour_cap() {
        let employees = vec![crew("pricey", 25.0, 40.0), crew("cheap", 15.0, 4.0)];
        let mut state = state_with(&employees, &[("pricey", Day::Monday, 8, 16)]);

        let stats = CostOptimizer::new(50).optimize(&employees, &mut state);
        assert_eq!(state.shifts()[0].employee_id, "pricey");
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.passes, 1);
        assert!(stats.converged);
    }

    #[test]
    fn test_respects_double_booking() {
        let employees = vec![crew("pricey", 25.0, 40.0), crew("cheap", 15.0, 40.0)];
        let mut state = state_with(
            &employees,
            &[("pricey", Day::Monday, 8, 16), ("cheap", Day::Monday, 12, 20)],
        );

        CostOptimizer::new(50).optimize(&employees, &mut state);
        assert_eq!(state.shifts()[0].employee_id, "pricey");
    }

    #[test]
    fn test_respects_availability_and_role() {
        let employees = vec![
            crew("pricey", 25.0, 40.0),
            Employee::new("cook", Role::Kitchen)
                .with_max_hours(40.0)
                .with_rate(5.0)
                .with_availability(Day::Monday, 0, 24),
            Employee::new("away", Role::Crew)
                .with_max_hours(40.0)
                .with_rate(5.0)
                .with_availability(Day::Sunday, 0, 24),
        ];
        let mut state = state_with(&employees, &[("pricey", Day::Monday, 8, 16)]);

        let stats = CostOptimizer::new(50).optimize(&employees, &mut state);
        assert_eq!(state.shifts()[0].employee_id, "pricey");
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_equal_rate_not_swapped() {
        let employees = vec![crew("a", 15.0, 40.0), crew("b", 15.0, 40.0)];
        let mut state = state_with(&employees, &[("a", Day::Monday, 8, 16)]);
        let stats = CostOptimizer::new(50).optimize(&employees, &mut state);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_pass_cap() {
        // Three shifts, each needing one swap → would take 4 passes to converge
        let employees = vec![crew("pricey", 25.0, 40.0), crew("cheap", 15.0, 40.0)];
        let mut state = state_with(
            &employees,
            &[
                ("pricey", Day::Monday, 8, 16),
                ("pricey", Day::Monday, 16, 24),
                ("pricey", Day::Tuesday, 8, 16),
            ],
        );

        let stats = CostOptimizer::new(2).optimize(&employees, &mut state);
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.swaps, 2);
        assert!(!stats.converged);
        assert_eq!(state.shifts()[2].employee_id, "pricey");
        assert_eq!(state.ledger().hours("cheap"), 16);
        assert_eq!(state.ledger().hours("pricey"), 8);
    }

    #[test]
    fn test_unknown_owner_skipped() {
        let employees = vec![crew("cheap", 15.0, 40.0)];
        let ghost = crew("ghost", 99.0, 40.0);
        let mut state = AssignmentState::new(&employees);
        let slot = ShiftSlot::new(Day::Monday, 8, 16, Role::Crew);
        state.push(Shift::for_slot("s0", &slot, &ghost));

        let stats = CostOptimizer::new(50).optimize(&employees, &mut state);
        assert_eq!(stats.swaps, 0);
        assert_eq!(state.shifts()[0].employee_id, "ghost");
    }

    #[test]
    fn test_no_shifts() {
        let mut state = AssignmentState::new(&[]);
        let stats = CostOptimizer::new(50).optimize(&[], &mut state);
        assert_eq!(stats, OptimizerStats { passes: 1, swaps: 0, converged: true });
    }
}
