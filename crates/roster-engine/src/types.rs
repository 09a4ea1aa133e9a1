//! Domain model: daily and weekly availability, time-off requests, and the
//! schedule entries handed back to the calling layer.
//!
//! All types are plain data with serde derives so the caller can put them on
//! whatever transport it uses. Everything here is transient — rebuilt from
//! the external stores on every request.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One calendar day's working window.
///
/// A day is either fully off, or has a single contiguous
/// `[start_hour, end_hour)` window. `modified` is set only when a time-off
/// overlay changed the entry for the requested week; on a base schedule it is
/// always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAvailability {
    pub start_hour: u8,
    pub end_hour: u8,
    pub off: bool,
    pub modified: bool,
}

impl DailyAvailability {
    /// A working day with the given `[start_hour, end_hour)` window.
    pub fn working(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
            off: false,
            modified: false,
        }
    }

    /// A day the employee does not work in their recurring pattern.
    pub fn off() -> Self {
        Self {
            start_hour: 0,
            end_hour: 0,
            off: true,
            modified: false,
        }
    }
}

/// An employee's availability for one week, indexed 0 = Monday … 6 = Sunday.
///
/// The length-7 invariant is carried by the array type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub days: [DailyAvailability; 7],
}

impl WeeklyAvailability {
    pub fn new(days: [DailyAvailability; 7]) -> Self {
        Self { days }
    }
}

impl std::ops::Index<usize> for WeeklyAvailability {
    type Output = DailyAvailability;

    fn index(&self, day: usize) -> &DailyAvailability {
        &self.days[day]
    }
}

impl std::ops::IndexMut<usize> for WeeklyAvailability {
    fn index_mut(&mut self, day: usize) -> &mut DailyAvailability {
        &mut self.days[day]
    }
}

/// One time-off request, approved or pending.
///
/// `start` is inclusive; `end` marks the first moment the employee is back at
/// work. A request is only ever applied to a week it is fully contained in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOff {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub approved: bool,
}

impl TimeOff {
    /// Monday-anchored day index (0–6) of the first day off.
    pub fn start_day_of_week(&self) -> usize {
        self.start.weekday().num_days_from_monday() as usize
    }

    /// Monday-anchored day index (0–6) of the day the request ends.
    pub fn end_day_of_week(&self) -> usize {
        self.end.weekday().num_days_from_monday() as usize
    }

    /// Whether start and end fall on the same calendar date.
    pub fn is_same_day(&self) -> bool {
        self.start.date() == self.end.date()
    }
}

/// Identity record from the employee directory. Read-only to this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Per-employee time record: the recurring weekly pattern plus every time-off
/// request on file. Requests apply in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTime {
    pub employee_id: i64,
    pub availability: WeeklyAvailability,
    pub time_offs: Vec<TimeOff>,
}

/// One row of computed schedule output, created fresh per request.
///
/// Name fields are `None` when the caller asked for the base schedule, which
/// intentionally skips the employee join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub employee_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub availability: WeeklyAvailability,
}
