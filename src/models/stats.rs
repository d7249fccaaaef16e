//! Derived statistics models.
//!
//! These are read models computed on demand from stored schedules; they are
//! never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee statistics for one location and one calendar month.
///
/// Custom shifts count toward `total_shifts` and `total_hours` but have no
/// dedicated counter, matching the calendar's summary panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Shifts of any type the employee is assigned to.
    pub total_shifts: u32,
    /// Day-slot shifts.
    pub day_shifts: u32,
    /// Night-slot shifts.
    pub night_shifts: u32,
    /// Hours across all shift types (12 per day/night slot).
    pub total_hours: u32,
    /// Sum of recorded earnings; unset earnings count as zero.
    pub total_earnings: Decimal,
}

/// One month's earnings rollup for an employee at a location.
///
/// Emitted only for months where the employee worked at least one shift, so
/// `average_per_shift` is never a division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsHistoryRecord {
    /// Four-digit year.
    pub year: i32,
    /// Month in 1-12.
    pub month: u32,
    /// Shifts worked that month.
    pub total_shifts: u32,
    /// Earnings recorded that month.
    pub total_earnings: Decimal,
    /// `total_earnings / total_shifts`.
    pub average_per_shift: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_are_zero() {
        let stats = MonthlyStats::default();
        assert_eq!(stats.total_shifts, 0);
        assert_eq!(stats.day_shifts, 0);
        assert_eq!(stats.night_shifts, 0);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.total_earnings, Decimal::ZERO);
    }

    #[test]
    fn test_history_record_serialization() {
        let record = EarningsHistoryRecord {
            year: 2025,
            month: 1,
            total_shifts: 4,
            total_earnings: Decimal::new(8000, 0),
            average_per_shift: Decimal::new(2000, 0),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EarningsHistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
