//! # roster-engine
//!
//! Computes an organization's actual weekly work schedule by overlaying
//! approved time-off requests onto each employee's recurring base
//! availability.
//!
//! The whole crate is pure computation over in-memory data: the two read-side
//! collaborators hand over full snapshots, the engine produces a fresh
//! effective schedule per call, and nothing is persisted or cached.
//!
//! ## Modules
//!
//! - [`types`] — domain model (availability windows, time off, schedule entries)
//! - [`week`] — Monday week-anchor validation
//! - [`engine`] — effective-week computation (the core algorithm)
//! - [`assembler`] — roster assembly and the employee identity join
//! - [`store`] — read-side collaborator traits
//! - [`error`] — error types

pub mod assembler;
pub mod engine;
pub mod error;
pub mod store;
pub mod types;
pub mod week;

pub use assembler::{base_schedule, week_schedule, Assembler};
pub use engine::effective_week;
pub use error::ScheduleError;
pub use types::{
    DailyAvailability, Employee, EmployeeTime, ScheduleEntry, TimeOff, WeeklyAvailability,
};
