//! The schedule-computation engine.
//!
//! Overlays approved time-off requests onto an employee's recurring weekly
//! availability to produce the effective availability for one requested week.
//! Pure value semantics: the engine takes the base availability by value and
//! returns a new structure, so callers never observe partial mutation.

use chrono::{NaiveDate, Timelike};

use crate::error::Result;
use crate::types::{DailyAvailability, TimeOff, WeeklyAvailability};
use crate::week;

/// Compute the effective weekly availability for one employee for the week
/// starting on `monday`.
///
/// Only requests that are approved AND fully contained in
/// `[monday 00:00, monday+7d 00:00]` (both boundaries inclusive) are applied.
/// A request that starts before the week, ends after it, or wraps around is
/// ignored for this week entirely. Selected requests apply in collection
/// order, with no conflict resolution beyond sequential application.
///
/// # Errors
/// Returns [`ScheduleError::NotMonday`](crate::ScheduleError::NotMonday) if
/// `monday` is not a Monday.
pub fn effective_week(
    monday: NaiveDate,
    base: WeeklyAvailability,
    time_offs: &[TimeOff],
) -> Result<WeeklyAvailability> {
    week::ensure_monday(monday)?;

    let (week_start, week_end) = week::week_bounds(monday);
    let mut days = base.days;

    let in_week = time_offs
        .iter()
        .filter(|t| t.approved && week_start <= t.start && t.end <= week_end);

    for time_off in in_week {
        if time_off.is_same_day() {
            let d = time_off.start_day_of_week();
            days[d] = trim_same_day(days[d], time_off);
        } else {
            mark_days_off(&mut days, time_off);
        }
    }

    Ok(WeeklyAvailability { days })
}

/// Same-day overlay: trim only a boundary the request exactly matches.
///
/// A request starting at the day's start hour advances the start to the
/// request's end hour; a request ending at the day's end hour retreats the
/// end to the request's start hour. An interior request that touches neither
/// boundary leaves the day unchanged — the single contiguous window cannot
/// represent a split, so the day keeps its full window (known limitation).
/// Off days are never altered.
fn trim_same_day(day: DailyAvailability, time_off: &TimeOff) -> DailyAvailability {
    if day.off {
        return day;
    }

    let mut trimmed = day;
    if time_off.start.hour() as u8 == day.start_hour {
        trimmed.start_hour = time_off.end.hour() as u8;
        trimmed.modified = true;
    }
    if time_off.end.hour() as u8 == day.end_hour {
        trimmed.end_hour = time_off.start.hour() as u8;
        trimmed.modified = true;
    }
    trimmed
}

/// Multi-day overlay: every day from the start day through the day before the
/// end day becomes fully off.
///
/// An end index of 0 — the following Monday — wraps to 6, so such a request
/// covers through Sunday of the current week. Days already off keep their
/// existing record and are not re-marked as modified.
fn mark_days_off(days: &mut [DailyAvailability; 7], time_off: &TimeOff) {
    let first = time_off.start_day_of_week();
    let last = (time_off.end_day_of_week() as i32 - 1).rem_euclid(7) as usize;

    for day in days.iter_mut().take(last + 1).skip(first) {
        if !day.off {
            *day = DailyAvailability {
                start_hour: 0,
                end_hour: 0,
                off: true,
                modified: true,
            };
        }
    }
}
