//! Error types for schedule computation.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced by the schedule core. Both are deterministic functions
/// of the input data; no retryable class exists because the core performs no
/// I/O of its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The requested week anchor is not a Monday. Always reported to the
    /// caller; there is no fallback to the nearest Monday.
    #[error("requested week must start on a Monday, got {0}")]
    NotMonday(NaiveDate),

    /// An employee-time record references an id with no matching employee.
    /// Treated as a data-integrity failure, never silently skipped.
    #[error("employee time record references unknown employee id {0}")]
    UnknownEmployee(i64),
}

/// Convenience alias used throughout roster-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
