//! Keyed storage for schedules, locations, and employees.
//!
//! The persistence engine is deliberately unspecified; [`RosterStore`]
//! captures the access patterns the engine needs and [`MemoryStore`]
//! provides the in-process implementation used by the API layer and tests.
//! Schedule writes carry a version expectation so concurrent
//! read-modify-write cycles against the same key are detected rather than
//! interleaved.

mod memory;

pub use memory::MemoryStore;

use crate::error::RosterResult;
use crate::models::{Employee, Location, Schedule, ScheduleKey};

/// Storage access patterns required by the roster engine.
///
/// Implementations must be safe to share across request handlers.
pub trait RosterStore: Send + Sync {
    /// Loads the schedule stored under `key`, if any.
    fn load_schedule(&self, key: &ScheduleKey) -> RosterResult<Option<Schedule>>;

    /// Commits `schedule` under `key` if the stored version matches.
    ///
    /// `expected_version` of `None` asserts no schedule exists yet;
    /// `Some(v)` asserts the stored version is exactly `v`. On mismatch the
    /// write is refused with `VersionConflict` and nothing changes. On
    /// success the committed schedule (version bumped, `updated_at`
    /// refreshed) is returned.
    fn put_schedule(
        &self,
        key: &ScheduleKey,
        schedule: Schedule,
        expected_version: Option<u64>,
    ) -> RosterResult<Schedule>;

    /// Removes the schedule under `key` if the stored version matches.
    ///
    /// Removing an absent schedule is a no-op: the desired state already
    /// holds. A present schedule with a different version is a
    /// `VersionConflict`.
    fn remove_schedule(&self, key: &ScheduleKey, expected_version: u64) -> RosterResult<()>;

    /// Enumerates the (year, month) pairs with a stored schedule for the
    /// location, in no particular order.
    fn schedule_months(&self, location_id: &str) -> RosterResult<Vec<(i32, u32)>>;

    /// Looks up a location by id.
    fn get_location(&self, id: &str) -> RosterResult<Option<Location>>;

    /// Inserts or replaces a location record.
    fn put_location(&self, location: Location) -> RosterResult<()>;

    /// Deletes a location.
    ///
    /// Refused with `LocationInUse` while any schedule exists for the
    /// location; on success the id is removed from every employee's
    /// location list. Unknown ids yield `LocationNotFound`.
    fn delete_location(&self, id: &str) -> RosterResult<()>;

    /// Lists all locations.
    fn list_locations(&self) -> RosterResult<Vec<Location>>;

    /// Looks up an employee by id.
    fn get_employee(&self, id: &str) -> RosterResult<Option<Employee>>;

    /// Looks up an employee by email.
    fn find_employee_by_email(&self, email: &str) -> RosterResult<Option<Employee>>;

    /// Inserts or replaces an employee record.
    fn put_employee(&self, employee: Employee) -> RosterResult<()>;

    /// Deletes an employee. Unknown ids yield `EmployeeNotFound`.
    fn delete_employee(&self, id: &str) -> RosterResult<()>;

    /// Lists all employees.
    fn list_employees(&self) -> RosterResult<Vec<Employee>>;
}
