//! Read-side collaborator traits.
//!
//! The employee directory and the time store live elsewhere; this core only
//! ever pulls full snapshots through these two operations. No streaming, no
//! pagination.

use crate::types::{Employee, EmployeeTime};

/// Snapshot of the employee directory.
pub trait EmployeeStore {
    fn list_employees(&self) -> Vec<Employee>;
}

/// Snapshot of the per-employee time records (base availability plus time-off
/// requests).
pub trait TimeStore {
    fn list_employee_times(&self) -> Vec<EmployeeTime>;
}
