//! Core data models for the Shift Roster Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod location;
mod schedule;
mod stats;

pub use employee::{Employee, Identity, Role};
pub use location::Location;
pub use schedule::{
    Assignment, CustomShift, Day, EarningsStatus, Schedule, ScheduleKey, ShiftSelector, ShiftSlot,
};
pub use stats::{EarningsHistoryRecord, MonthlyStats};
