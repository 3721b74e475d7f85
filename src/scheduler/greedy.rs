//! Greedy slot filling.
//!
//! # Algorithm
//!
//! 1. Take slots in generation order.
//! 2. Collect employees that match the role, have hours left under the
//!    weekly cap, are available for the whole block and have no
//!    overlapping shift that day.
//! 3. Pick the one with the fewest hours so far (ties: roster order).
//! 4. Record the shift and charge the hours.
//!
//! The choice balances workload, not cost; cost is handled afterwards by
//! the optimizer. Decisions are final: a slot with no eligible employee
//! stays unfilled and nothing is backtracked.
//!
//! # Complexity
//! O(s * e * a) where s=slots, e=employees, a=shifts assigned so far.

use tracing::trace;

use super::state::AssignmentState;
use crate::models::{Employee, Shift, ShiftSlot};

/// Fills slots one by one with the least-loaded eligible employee.
#[derive(Debug, Clone)]
pub struct GreedyAssigner<'a> {
    id_prefix: &'a str,
}

impl<'a> GreedyAssigner<'a> {
    /// Creates an assigner; shift ids are `<id_prefix>-shift-<n>`.
    pub fn new(id_prefix: &'a str) -> Self {
        Self { id_prefix }
    }

    /// Fills as many slots as possible and returns the ones left open.
    pub fn assign(
        &self,
        slots: &[ShiftSlot],
        employees: &[Employee],
        state: &mut AssignmentState,
    ) -> Vec<ShiftSlot> {
        let mut unfilled = Vec::new();

        for slot in slots {
            // min_by_key keeps the first of equal minima, so ties go to roster order
            let chosen = employees
                .iter()
                .filter(|e| state.is_eligible(e, slot))
                .min_by_key(|e| state.ledger().hours(&e.id));

            match chosen {
                Some(employee) => {
                    let id = format!("{}-shift-{}", self.id_prefix, state.shifts().len());
                    state.push(Shift::for_slot(id, slot, employee));
                }
                None => {
                    trace!(
                        event = "slot_unfilled",
                        day = %slot.day,
                        start = slot.start_hour,
                        end = slot.end_hour,
                        role = ?slot.role,
                    );
                    unfilled.push(slot.clone());
                }
            }
        }

        unfilled
    }
}
