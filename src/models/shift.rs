//! Shift slot (demand) and assigned shift models.
//!
//! A [`ShiftSlot`] is a unit of demand produced by slot generation: a role
//! needed on a day for an hour block. A [`Shift`] is a filled slot, owned
//! by one employee.

use serde::{Deserialize, Serialize};

use super::{Day, Employee, Role};

/// A demand slot: one employee of `role` needed on `day` for `[start_hour, end_hour)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSlot {
    pub day: Day,
    pub start_hour: u32,
    pub end_hour: u32,
    pub role: Role,
    /// Whether the slot must be staffed (as opposed to nice-to-have).
    pub required: bool,
}

impl ShiftSlot {
    /// Creates a required slot.
    pub fn new(day: Day, start_hour: u32, end_hour: u32, role: Role) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
            role,
            required: true,
        }
    }

    /// Slot length in hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}

/// A shift assigned to an employee.
///
/// Times serialize as `"H:00"` strings (`"8:00"`, `"24:00"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Shift identifier. Stable across reassignment.
    pub id: String,
    pub employee_id: String,
    /// Denormalized for display.
    pub employee_name: String,
    pub day: Day,
    #[serde(rename = "startTime", with = "clock_hour")]
    pub start_hour: u32,
    #[serde(rename = "endTime", with = "clock_hour")]
    pub end_hour: u32,
    pub role: Role,
}

impl Shift {
    /// Creates a shift filling `slot` with `employee`.
    pub fn for_slot(id: impl Into<String>, slot: &ShiftSlot, employee: &Employee) -> Self {
        Self {
            id: id.into(),
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            day: slot.day,
            start_hour: slot.start_hour,
            end_hour: slot.end_hour,
            role: employee.role,
        }
    }

    /// Returns a copy owned by `employee`, keeping id, day, hours and role.
    pub fn reassigned_to(&self, employee: &Employee) -> Self {
        Self {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            ..self.clone()
        }
    }

    /// Shift length in hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Whether this shift intersects `[start_hour, end_hour)` on `day`.
    #[inline]
    pub fn overlaps(&self, day: Day, start_hour: u32, end_hour: u32) -> bool {
        self.day == day && self.start_hour < end_hour && self.end_hour > start_hour
    }

    /// Start time as `"H:00"`.
    pub fn start_time(&self) -> String {
        clock_hour::format(self.start_hour)
    }

    /// End time as `"H:00"`.
    pub fn end_time(&self) -> String {
        clock_hour::format(self.end_hour)
    }
}

/// Serde adapter for whole hours written as `"H:00"`.
mod clock_hour {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(hour: u32) -> String {
        format!("{hour}:00")
    }

    pub fn serialize<S: Serializer>(hour: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*hour))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let s = String::deserialize(deserializer)?;
        let (hour, minutes) = s
            .split_once(':')
            .ok_or_else(|| D::Error::custom(format!("expected \"H:00\", got {s:?}")))?;
        if minutes != "00" {
            return Err(D::Error::custom(format!("minutes must be 00 in {s:?}")));
        }
        hour.parse()
            .map_err(|_| D::Error::custom(format!("invalid hour in {s:?}")))
    }
}
