//! Calendar reconciliation: merging day-level edits into stored schedules.

use std::collections::HashSet;

use crate::error::{RosterError, RosterResult};
use crate::models::{Day, Schedule, ScheduleKey};
use crate::store::RosterStore;

/// Merges a set of proposed days into the schedule stored under `key`.
///
/// Each proposed [`Day`] is the complete desired state for its date, not a
/// delta: an empty day removes any stored entry for that date, a non-empty
/// day replaces it (or is appended), and dates not mentioned are left
/// untouched. The whole batch is validated before anything is written, so a
/// failed call leaves the stored schedule exactly as it was. Applying the
/// same batch twice yields the same stored state.
///
/// The schedule is created implicitly on the first non-empty save and
/// removed from storage when its last day is pruned. The read-modify-write
/// is guarded by the store's version stamp; losing to a concurrent writer
/// yields a `VersionConflict` and the caller decides whether to retry.
///
/// # Errors
///
/// * `DayOutsideMonth` - a proposed date is not within the key's month.
/// * `InvalidHours` - a custom shift's hours are outside 1-24.
/// * `DuplicateAssignment` - an employee appears twice on one shift.
/// * `VersionConflict` - a concurrent writer committed first.
pub fn apply_day_edits(
    store: &dyn RosterStore,
    key: &ScheduleKey,
    proposed_days: Vec<Day>,
) -> RosterResult<Schedule> {
    for day in &proposed_days {
        validate_day(key, day)?;
    }

    let existing = store.load_schedule(key)?;
    let expected_version = existing.as_ref().map(|s| s.version);
    let mut schedule = existing.unwrap_or_else(|| Schedule::empty(key));

    // Later mentions of the same date win, so the merge is a left fold.
    for mut day in proposed_days {
        day.normalize();
        if day.is_empty() {
            schedule.remove_day(day.date);
        } else {
            schedule.upsert_day(day);
        }
    }

    if schedule.is_empty() {
        if let Some(version) = expected_version {
            store.remove_schedule(key, version)?;
        }
        return Ok(Schedule::empty(key));
    }

    store.put_schedule(key, schedule, expected_version)
}

/// Validates one proposed day against its schedule key.
fn validate_day(key: &ScheduleKey, day: &Day) -> RosterResult<()> {
    if !key.contains(day.date) {
        return Err(RosterError::DayOutsideMonth {
            date: day.date,
            year: key.year,
            month: key.month,
        });
    }

    for shift in &day.custom_shifts {
        if !(1..=24).contains(&shift.hours) {
            return Err(RosterError::InvalidHours {
                date: day.date,
                hours: shift.hours,
            });
        }
    }

    let slots = day
        .day_shift
        .iter()
        .chain(day.night_shift.iter())
        .map(|s| &s.assignments)
        .chain(day.custom_shifts.iter().map(|s| &s.assignments));
    for assignments in slots {
        let mut seen = HashSet::new();
        for assignment in assignments {
            if !seen.insert(assignment.employee_id.as_str()) {
                return Err(RosterError::DuplicateAssignment {
                    date: day.date,
                    employee_id: assignment.employee_id.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, CustomShift, ShiftSlot};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_key() -> ScheduleKey {
        ScheduleKey::new("loc_001", 2025, 3).unwrap()
    }

    fn day_with_day_shift(date: &str, employees: &[(&str, &str)]) -> Day {
        let mut day = Day::empty(make_date(date));
        day.day_shift = Some(ShiftSlot {
            assignments: employees
                .iter()
                .map(|(id, name)| Assignment::new(*id, *name))
                .collect(),
        });
        day
    }

    #[test]
    fn test_first_save_creates_schedule_implicitly() {
        let store = MemoryStore::new();
        let key = make_key();

        let result = apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-01", &[("emp_001", "Anna")])],
        )
        .unwrap();

        assert_eq!(result.version, 1);
        assert_eq!(result.days.len(), 1);
        assert!(store.load_schedule(&key).unwrap().is_some());
    }

    #[test]
    fn test_unmentioned_dates_left_untouched() {
        let store = MemoryStore::new();
        let key = make_key();
        apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-01", &[("emp_001", "Anna")])],
        )
        .unwrap();

        let result = apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-05", &[("emp_002", "Boris")])],
        )
        .unwrap();

        assert_eq!(result.days.len(), 2);
        assert!(result.day(make_date("2025-03-01")).is_some());
        assert!(result.day(make_date("2025-03-05")).is_some());
    }

    #[test]
    fn test_idempotent() {
        let store = MemoryStore::new();
        let key = make_key();
        let batch = vec![
            day_with_day_shift("2025-03-01", &[("emp_001", "Anna")]),
            day_with_day_shift("2025-03-02", &[("emp_002", "Boris")]),
        ];

        let first = apply_day_edits(&store, &key, batch.clone()).unwrap();
        let second = apply_day_edits(&store, &key, batch).unwrap();

        assert_eq!(first.days, second.days);
        let stored = store.load_schedule(&key).unwrap().unwrap();
        assert_eq!(stored.days, first.days);
    }

    #[test]
    fn test_empty_day_prunes_stored_entry() {
        let store = MemoryStore::new();
        let key = make_key();
        apply_day_edits(
            &store,
            &key,
            vec![
                day_with_day_shift("2025-03-01", &[("emp_001", "Anna")]),
                day_with_day_shift("2025-03-02", &[("emp_002", "Boris")]),
            ],
        )
        .unwrap();

        // A day whose slots hold no assignments means "clear this date".
        let mut cleared = Day::empty(make_date("2025-03-01"));
        cleared.day_shift = Some(ShiftSlot { assignments: vec![] });
        let result = apply_day_edits(&store, &key, vec![cleared]).unwrap();

        assert_eq!(result.days.len(), 1);
        assert!(result.day(make_date("2025-03-01")).is_none());
    }

    #[test]
    fn test_pruning_last_day_removes_schedule_from_storage() {
        let store = MemoryStore::new();
        let key = make_key();
        apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-01", &[("emp_001", "Anna")])],
        )
        .unwrap();

        let result =
            apply_day_edits(&store, &key, vec![Day::empty(make_date("2025-03-01"))]).unwrap();

        assert!(result.is_empty());
        assert!(store.load_schedule(&key).unwrap().is_none());
    }

    #[test]
    fn test_clearing_nonexistent_schedule_stores_nothing() {
        let store = MemoryStore::new();
        let key = make_key();

        let result =
            apply_day_edits(&store, &key, vec![Day::empty(make_date("2025-03-01"))]).unwrap();

        assert!(result.is_empty());
        assert!(store.load_schedule(&key).unwrap().is_none());
    }

    #[test]
    fn test_cross_month_date_rejected() {
        let store = MemoryStore::new();
        let key = ScheduleKey::new("loc_001", 2025, 1).unwrap();

        let result = apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-02-01", &[("emp_001", "Anna")])],
        );

        assert!(matches!(
            result,
            Err(RosterError::DayOutsideMonth { year: 2025, month: 1, .. })
        ));
    }

    #[test]
    fn test_failed_batch_leaves_store_untouched() {
        let store = MemoryStore::new();
        let key = make_key();
        apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-01", &[("emp_001", "Anna")])],
        )
        .unwrap();

        // One good edit and one cross-month edit: the whole batch fails.
        let result = apply_day_edits(
            &store,
            &key,
            vec![
                day_with_day_shift("2025-03-02", &[("emp_002", "Boris")]),
                day_with_day_shift("2025-04-01", &[("emp_002", "Boris")]),
            ],
        );
        assert!(result.is_err());

        let stored = store.load_schedule(&key).unwrap().unwrap();
        assert_eq!(stored.days.len(), 1);
        assert_eq!(stored.version, 1);
    }

    #[test]
    fn test_custom_hours_out_of_range_rejected() {
        let store = MemoryStore::new();
        let key = make_key();
        let mut day = Day::empty(make_date("2025-03-01"));
        day.custom_shifts.push(CustomShift {
            hours: 0,
            assignments: vec![Assignment::new("emp_001", "Anna")],
        });

        assert!(matches!(
            apply_day_edits(&store, &key, vec![day]),
            Err(RosterError::InvalidHours { hours: 0, .. })
        ));
    }

    #[test]
    fn test_duplicate_employee_on_one_shift_rejected() {
        let store = MemoryStore::new();
        let key = make_key();
        let day = day_with_day_shift("2025-03-01", &[("emp_001", "Anna"), ("emp_001", "Anna")]);

        assert!(matches!(
            apply_day_edits(&store, &key, vec![day]),
            Err(RosterError::DuplicateAssignment { .. })
        ));
    }

    #[test]
    fn test_same_employee_on_day_and_night_is_allowed() {
        let store = MemoryStore::new();
        let key = make_key();
        let mut day = day_with_day_shift("2025-03-01", &[("emp_001", "Anna")]);
        day.night_shift = Some(ShiftSlot {
            assignments: vec![Assignment::new("emp_001", "Anna")],
        });

        assert!(apply_day_edits(&store, &key, vec![day]).is_ok());
    }

    #[test]
    fn test_duplicate_date_in_batch_last_mention_wins() {
        let store = MemoryStore::new();
        let key = make_key();

        let result = apply_day_edits(
            &store,
            &key,
            vec![
                day_with_day_shift("2025-03-01", &[("emp_001", "Anna")]),
                day_with_day_shift("2025-03-01", &[("emp_002", "Boris")]),
            ],
        )
        .unwrap();

        assert_eq!(result.days.len(), 1);
        let day = result.day(make_date("2025-03-01")).unwrap();
        assert_eq!(
            day.day_shift.as_ref().unwrap().assignments[0].employee_id,
            "emp_002"
        );
    }

    #[test]
    fn test_repeated_edits_bump_version() {
        let store = MemoryStore::new();
        let key = make_key();
        apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-01", &[("emp_001", "Anna")])],
        )
        .unwrap();
        let second = apply_day_edits(
            &store,
            &key,
            vec![day_with_day_shift("2025-03-02", &[("emp_002", "Boris")])],
        )
        .unwrap();

        assert_eq!(second.version, 2);
    }
}
