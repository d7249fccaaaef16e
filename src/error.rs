//! Error types for the Shift Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling schedules,
//! aggregating statistics, and recording earnings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The broad class of a [`RosterError`].
///
/// The engine reports four recoverable outcome classes to callers (plus
/// `Internal` for configuration faults that are not caller-correctable).
/// The transport layer maps classes to HTTP statuses without matching
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was malformed or violated a calendar invariant.
    Validation,
    /// A referenced location, schedule, shift, or assignment does not exist.
    NotFound,
    /// The caller is not allowed to perform the operation.
    Forbidden,
    /// A concurrent write or a dependent-reference check rejected the operation.
    Conflict,
    /// An internal fault (configuration) unrelated to caller input.
    Internal,
}

/// The main error type for the Shift Roster Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::LocationNotFound {
///     id: "loc_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Location not found: loc_001");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A date string could not be parsed as ISO `YYYY-MM-DD`.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A month value outside the 1-12 range.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },

    /// A day edit carried a date outside its schedule's (year, month).
    #[error("Day {date} falls outside schedule month {year}-{month:02}")]
    DayOutsideMonth {
        /// The offending date.
        date: NaiveDate,
        /// The schedule's year.
        year: i32,
        /// The schedule's month (1-12).
        month: u32,
    },

    /// A custom shift carried an hour count outside 1-24.
    #[error("Invalid hours {hours} for custom shift on {date} (expected 1-24)")]
    InvalidHours {
        /// The date of the offending shift.
        date: NaiveDate,
        /// The rejected hour count.
        hours: u8,
    },

    /// The same employee appeared more than once on a single shift.
    #[error("Employee '{employee_id}' assigned more than once to a shift on {date}")]
    DuplicateAssignment {
        /// The date of the offending shift.
        date: NaiveDate,
        /// The duplicated employee id.
        employee_id: String,
    },

    /// An earnings amount failed validation.
    #[error("Invalid earnings amount {amount}: {message}")]
    InvalidAmount {
        /// The rejected amount.
        amount: Decimal,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// An employee with the same email already exists.
    #[error("Employee already exists with email '{email}'")]
    EmployeeExists {
        /// The duplicated email address.
        email: String,
    },

    /// No schedule is stored for the given key.
    #[error("Schedule not found for location '{location_id}' {year}-{month:02}")]
    ScheduleNotFound {
        /// The location component of the key.
        location_id: String,
        /// The year component of the key.
        year: i32,
        /// The month component of the key.
        month: u32,
    },

    /// The referenced location does not exist.
    #[error("Location not found: {id}")]
    LocationNotFound {
        /// The location id that was not found.
        id: String,
    },

    /// The referenced employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// The addressed shift does not exist on the given day.
    #[error("No {shift} shift on {date}")]
    ShiftNotFound {
        /// The date that was addressed.
        date: NaiveDate,
        /// A description of the addressed slot (e.g. "day", "custom[2]").
        shift: String,
    },

    /// The addressed assignment index does not exist on the shift.
    #[error("No assignment at index {index} on {date}")]
    AssignmentNotFound {
        /// The date that was addressed.
        date: NaiveDate,
        /// The out-of-range assignment index.
        index: usize,
    },

    /// The caller is not authorized for the operation.
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Why the operation was refused.
        message: String,
    },

    /// A compare-and-swap write lost to a concurrent writer.
    #[error("Concurrent update of schedule for location '{location_id}' {year}-{month:02}")]
    VersionConflict {
        /// The location component of the contested key.
        location_id: String,
        /// The year component of the contested key.
        year: i32,
        /// The month component of the contested key.
        month: u32,
    },

    /// A location cannot be deleted while schedules reference it.
    #[error("Location '{id}' still has schedules and cannot be deleted")]
    LocationInUse {
        /// The referenced location id.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl RosterError {
    /// Returns the broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::InvalidDate { .. }
            | RosterError::InvalidMonth { .. }
            | RosterError::DayOutsideMonth { .. }
            | RosterError::InvalidHours { .. }
            | RosterError::DuplicateAssignment { .. }
            | RosterError::InvalidAmount { .. }
            | RosterError::EmployeeExists { .. } => ErrorKind::Validation,
            RosterError::ScheduleNotFound { .. }
            | RosterError::LocationNotFound { .. }
            | RosterError::EmployeeNotFound { .. }
            | RosterError::ShiftNotFound { .. }
            | RosterError::AssignmentNotFound { .. } => ErrorKind::NotFound,
            RosterError::Forbidden { .. } => ErrorKind::Forbidden,
            RosterError::VersionConflict { .. } | RosterError::LocationInUse { .. } => {
                ErrorKind::Conflict
            }
            RosterError::ConfigNotFound { .. } | RosterError::ConfigParseError { .. } => {
                ErrorKind::Internal
            }
        }
    }
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
