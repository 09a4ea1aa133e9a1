//! Roster assembly: runs the engine across every employee-time record and
//! joins in employee identity from the directory.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;

use crate::engine;
use crate::error::{Result, ScheduleError};
use crate::store::{EmployeeStore, TimeStore};
use crate::types::{Employee, EmployeeTime, ScheduleEntry};
use crate::week;

/// Base schedule of one employee: the recurring availability as stored, with
/// no time-off overlay and no employee join.
pub fn employee_base_schedule(time: &EmployeeTime) -> ScheduleEntry {
    ScheduleEntry {
        employee_id: time.employee_id,
        first_name: None,
        last_name: None,
        availability: time.availability.clone(),
    }
}

/// Base schedule of all employees, one entry per record. Output length always
/// equals the input length.
pub fn base_schedule(times: &[EmployeeTime]) -> Vec<ScheduleEntry> {
    times.iter().map(employee_base_schedule).collect()
}

/// Actual schedule of one employee for the week starting on `monday`, based
/// on their approved time-off requests.
///
/// Exposed independently so callers can compute a single employee's schedule
/// without materializing the full roster.
///
/// # Errors
/// [`ScheduleError::NotMonday`] if `monday` is not a Monday;
/// [`ScheduleError::UnknownEmployee`] if the record's employee id is absent
/// from `employees`.
pub fn employee_schedule(
    monday: NaiveDate,
    time: &EmployeeTime,
    employees: &HashMap<i64, &Employee>,
) -> Result<ScheduleEntry> {
    week::ensure_monday(monday)?;

    let employee = employees
        .get(&time.employee_id)
        .ok_or(ScheduleError::UnknownEmployee(time.employee_id))?;

    let availability =
        engine::effective_week(monday, time.availability.clone(), &time.time_offs)?;

    Ok(ScheduleEntry {
        employee_id: time.employee_id,
        first_name: Some(employee.first_name.clone()),
        last_name: Some(employee.last_name.clone()),
        availability,
    })
}

/// Actual schedule of the whole roster for the week starting on `monday`.
///
/// Builds the id→employee lookup once, then computes one entry per record.
/// A record whose employee id has no match fails the whole call rather than
/// being silently dropped.
pub fn week_schedule(
    monday: NaiveDate,
    employees: &[Employee],
    times: &[EmployeeTime],
) -> Result<Vec<ScheduleEntry>> {
    week::ensure_monday(monday)?;

    let by_id: HashMap<i64, &Employee> = employees.iter().map(|e| (e.id, e)).collect();
    debug!(
        "assembling week of {} for {} employee time records",
        monday,
        times.len()
    );

    times
        .iter()
        .map(|time| employee_schedule(monday, time, &by_id))
        .collect()
}

/// Front door holding the two read collaborators.
///
/// Snapshots are fetched fresh on every call and nothing is cached between
/// calls; the lookup map is rebuilt each time.
pub struct Assembler<E, T> {
    employees: E,
    times: T,
}

impl<E: EmployeeStore, T: TimeStore> Assembler<E, T> {
    pub fn new(employees: E, times: T) -> Self {
        Self { employees, times }
    }

    /// Base schedule of all employees, without the consideration of time offs.
    pub fn base_schedule(&self) -> Vec<ScheduleEntry> {
        base_schedule(&self.times.list_employee_times())
    }

    /// Actual schedule for the week starting on `monday`, based on approved
    /// time-off requests for all employees.
    pub fn week_schedule(&self, monday: NaiveDate) -> Result<Vec<ScheduleEntry>> {
        week_schedule(
            monday,
            &self.employees.list_employees(),
            &self.times.list_employee_times(),
        )
    }
}
