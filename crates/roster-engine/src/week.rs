//! Monday week-anchor validation.
//!
//! A requested week is identified by its Monday; any other weekday is
//! rejected, never snapped to the nearest Monday.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{Result, ScheduleError};

/// Ok iff `date` is a Monday.
pub fn ensure_monday(date: NaiveDate) -> Result<()> {
    if date.weekday() == Weekday::Mon {
        Ok(())
    } else {
        Err(ScheduleError::NotMonday(date))
    }
}

/// The `[monday 00:00, next monday 00:00]` datetime bounds of the week
/// starting on `monday`. Both bounds are inclusive for the time-off
/// containment check.
pub fn week_bounds(monday: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = monday.and_time(NaiveTime::MIN);
    let end = (monday + Days::new(7)).and_time(NaiveTime::MIN);
    (start, end)
}
