//! Per-employee statistics derived from stored schedules.

use rust_decimal::Decimal;

use crate::error::RosterResult;
use crate::models::{Assignment, EarningsHistoryRecord, MonthlyStats, ScheduleKey, ShiftSlot};
use crate::store::RosterStore;

/// Computes one employee's statistics for one location and month.
///
/// Scans the schedule stored under `key` and counts every shift carrying an
/// assignment for `employee_id`. Unset earnings count as zero. An employee
/// with no assignments that month (or no schedule at all) gets all-zero
/// stats, not an error.
pub fn compute_monthly_stats(
    store: &dyn RosterStore,
    employee_id: &str,
    key: &ScheduleKey,
) -> RosterResult<MonthlyStats> {
    let Some(schedule) = store.load_schedule(key)? else {
        return Ok(MonthlyStats::default());
    };

    let mut stats = MonthlyStats::default();
    for day in &schedule.days {
        if let Some(assignment) = day.day_shift.as_ref().and_then(|s| find(s.assignments.as_slice(), employee_id)) {
            stats.total_shifts += 1;
            stats.day_shifts += 1;
            stats.total_hours += ShiftSlot::HOURS;
            stats.total_earnings += assignment.earnings.unwrap_or(Decimal::ZERO);
        }
        if let Some(assignment) = day.night_shift.as_ref().and_then(|s| find(s.assignments.as_slice(), employee_id)) {
            stats.total_shifts += 1;
            stats.night_shifts += 1;
            stats.total_hours += ShiftSlot::HOURS;
            stats.total_earnings += assignment.earnings.unwrap_or(Decimal::ZERO);
        }
        for shift in &day.custom_shifts {
            if let Some(assignment) = find(&shift.assignments, employee_id) {
                stats.total_shifts += 1;
                stats.total_hours += u32::from(shift.hours);
                stats.total_earnings += assignment.earnings.unwrap_or(Decimal::ZERO);
            }
        }
    }

    Ok(stats)
}

fn find<'a>(assignments: &'a [Assignment], employee_id: &str) -> Option<&'a Assignment> {
    assignments.iter().find(|a| a.employee_id == employee_id)
}

/// Computes one employee's monthly earnings rollups at a location.
///
/// Every stored month with at least one shift for the employee yields a
/// record; months without activity are skipped. Records are ordered
/// descending by (year, month) so consumers see the latest history first.
pub fn compute_earnings_history(
    store: &dyn RosterStore,
    employee_id: &str,
    location_id: &str,
) -> RosterResult<Vec<EarningsHistoryRecord>> {
    let mut months = store.schedule_months(location_id)?;
    months.sort_unstable();
    months.dedup();

    let mut records = Vec::new();
    for (year, month) in months.into_iter().rev() {
        let key = ScheduleKey::new(location_id, year, month)?;
        let stats = compute_monthly_stats(store, employee_id, &key)?;
        if stats.total_shifts > 0 {
            records.push(EarningsHistoryRecord {
                year,
                month,
                total_shifts: stats.total_shifts,
                total_earnings: stats.total_earnings,
                average_per_shift: stats.total_earnings / Decimal::from(stats.total_shifts),
            });
        }
    }

    Ok(records)
}
