//! The earnings ledger: recording a single earning on one shift assignment.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::RosterConfig;
use crate::error::{RosterError, RosterResult};
use crate::models::{
    Assignment, EarningsStatus, Identity, Schedule, ScheduleKey, ShiftSelector,
};
use crate::store::RosterStore;

/// Sets the earnings value on one assignment of one shift.
///
/// A manager may set earnings on any assignment; the value is stored with
/// status `confirmed`. A non-manager may only write to their own assignment
/// and only while the stored status is not `confirmed`; their value is
/// stored with status `self_reported` (so a self-reported value may be
/// corrected by its owner until a manager confirms it).
///
/// The write is committed with the schedule's version stamp, so it cannot
/// interleave with a concurrent reconciliation of the same month.
///
/// # Errors
///
/// * `InvalidAmount` - negative amount or above the configured ceiling.
/// * `DayOutsideMonth` - `date` is not within the key's month.
/// * `ScheduleNotFound` / `ShiftNotFound` / `AssignmentNotFound` - the
///   addressed assignment does not exist.
/// * `Forbidden` - the caller may not write this assignment.
/// * `VersionConflict` - a concurrent writer committed first.
#[allow(clippy::too_many_arguments)]
pub fn set_assignment_earnings(
    store: &dyn RosterStore,
    config: &RosterConfig,
    key: &ScheduleKey,
    date: NaiveDate,
    shift: ShiftSelector,
    assignment_index: usize,
    amount: Decimal,
    caller: &Identity,
) -> RosterResult<Schedule> {
    if amount < Decimal::ZERO {
        return Err(RosterError::InvalidAmount {
            amount,
            message: "must not be negative".to_string(),
        });
    }
    if amount > config.max_assignment_earnings {
        return Err(RosterError::InvalidAmount {
            amount,
            message: format!(
                "exceeds configured ceiling {}",
                config.max_assignment_earnings
            ),
        });
    }
    if !key.contains(date) {
        return Err(RosterError::DayOutsideMonth {
            date,
            year: key.year,
            month: key.month,
        });
    }

    let mut schedule =
        store
            .load_schedule(key)?
            .ok_or_else(|| RosterError::ScheduleNotFound {
                location_id: key.location_id.clone(),
                year: key.year,
                month: key.month,
            })?;
    let expected_version = schedule.version;

    let assignment = locate_assignment(&mut schedule, date, shift, assignment_index)?;

    if caller.is_manager() {
        assignment.earnings = Some(amount);
        assignment.status = EarningsStatus::Confirmed;
    } else {
        if assignment.employee_id != caller.employee_id {
            return Err(RosterError::Forbidden {
                message: "employees may only report their own earnings".to_string(),
            });
        }
        if assignment.status == EarningsStatus::Confirmed {
            return Err(RosterError::Forbidden {
                message: "earnings already confirmed by a manager".to_string(),
            });
        }
        assignment.earnings = Some(amount);
        assignment.status = EarningsStatus::SelfReported;
    }

    store.put_schedule(key, schedule, Some(expected_version))
}

/// Resolves the addressed assignment within the schedule, mutably.
fn locate_assignment(
    schedule: &mut Schedule,
    date: NaiveDate,
    shift: ShiftSelector,
    index: usize,
) -> RosterResult<&mut Assignment> {
    let not_found = RosterError::ShiftNotFound {
        date,
        shift: shift.describe(),
    };
    let day = schedule.day_mut(date).ok_or_else(|| RosterError::ShiftNotFound {
        date,
        shift: shift.describe(),
    })?;

    let assignments = match shift {
        ShiftSelector::Day => &mut day.day_shift.as_mut().ok_or(not_found)?.assignments,
        ShiftSelector::Night => &mut day.night_shift.as_mut().ok_or(not_found)?.assignments,
        ShiftSelector::Custom { index: shift_index } => {
            &mut day
                .custom_shifts
                .get_mut(shift_index)
                .ok_or(not_found)?
                .assignments
        }
    };

    assignments
        .get_mut(index)
        .ok_or(RosterError::AssignmentNotFound { date, index })
}
