//! In-memory [`RosterStore`] implementation.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::error::{RosterError, RosterResult};
use crate::models::{Employee, Location, Schedule, ScheduleKey};
use crate::store::RosterStore;

#[derive(Default)]
struct Inner {
    schedules: HashMap<ScheduleKey, Schedule>,
    locations: HashMap<String, Location>,
    employees: HashMap<String, Employee>,
}

/// Process-local store behind a single read-write lock.
///
/// All mutations take the write lock for their full span, so schedule
/// writes against one key serialize, and the version check plus commit in
/// [`RosterStore::put_schedule`] is atomic.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for MemoryStore {
    fn load_schedule(&self, key: &ScheduleKey) -> RosterResult<Option<Schedule>> {
        Ok(self.inner.read().schedules.get(key).cloned())
    }

    fn put_schedule(
        &self,
        key: &ScheduleKey,
        mut schedule: Schedule,
        expected_version: Option<u64>,
    ) -> RosterResult<Schedule> {
        let mut inner = self.inner.write();
        let current = inner.schedules.get(key).map(|s| s.version);
        if current != expected_version {
            return Err(RosterError::VersionConflict {
                location_id: key.location_id.clone(),
                year: key.year,
                month: key.month,
            });
        }
        schedule.version = expected_version.unwrap_or(0) + 1;
        schedule.updated_at = Utc::now();
        inner.schedules.insert(key.clone(), schedule.clone());
        Ok(schedule)
    }

    fn remove_schedule(&self, key: &ScheduleKey, expected_version: u64) -> RosterResult<()> {
        let mut inner = self.inner.write();
        match inner.schedules.get(key) {
            None => Ok(()),
            Some(stored) if stored.version == expected_version => {
                inner.schedules.remove(key);
                Ok(())
            }
            Some(_) => Err(RosterError::VersionConflict {
                location_id: key.location_id.clone(),
                year: key.year,
                month: key.month,
            }),
        }
    }

    fn schedule_months(&self, location_id: &str) -> RosterResult<Vec<(i32, u32)>> {
        Ok(self
            .inner
            .read()
            .schedules
            .keys()
            .filter(|k| k.location_id == location_id)
            .map(|k| (k.year, k.month))
            .collect())
    }

    fn get_location(&self, id: &str) -> RosterResult<Option<Location>> {
        Ok(self.inner.read().locations.get(id).cloned())
    }

    fn put_location(&self, location: Location) -> RosterResult<()> {
        self.inner
            .write()
            .locations
            .insert(location.id.clone(), location);
        Ok(())
    }

    fn delete_location(&self, id: &str) -> RosterResult<()> {
        let mut inner = self.inner.write();
        if !inner.locations.contains_key(id) {
            return Err(RosterError::LocationNotFound { id: id.to_string() });
        }
        if inner.schedules.keys().any(|k| k.location_id == id) {
            return Err(RosterError::LocationInUse { id: id.to_string() });
        }
        inner.locations.remove(id);
        for employee in inner.employees.values_mut() {
            employee.location_ids.retain(|loc| loc != id);
        }
        Ok(())
    }

    fn list_locations(&self) -> RosterResult<Vec<Location>> {
        let mut locations: Vec<Location> =
            self.inner.read().locations.values().cloned().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    fn get_employee(&self, id: &str) -> RosterResult<Option<Employee>> {
        Ok(self.inner.read().employees.get(id).cloned())
    }

    fn find_employee_by_email(&self, email: &str) -> RosterResult<Option<Employee>> {
        Ok(self
            .inner
            .read()
            .employees
            .values()
            .find(|e| e.email == email)
            .cloned())
    }

    fn put_employee(&self, employee: Employee) -> RosterResult<()> {
        self.inner
            .write()
            .employees
            .insert(employee.id.clone(), employee);
        Ok(())
    }

    fn delete_employee(&self, id: &str) -> RosterResult<()> {
        match self.inner.write().employees.remove(id) {
            Some(_) => Ok(()),
            None => Err(RosterError::EmployeeNotFound { id: id.to_string() }),
        }
    }

    fn list_employees(&self) -> RosterResult<Vec<Employee>> {
        let mut employees: Vec<Employee> =
            self.inner.read().employees.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }
}
