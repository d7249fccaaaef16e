//! Schedule, day, and shift assignment models.
//!
//! A [`Schedule`] holds one location's shift assignments for one calendar
//! month, keyed by [`ScheduleKey`]. Each [`Day`] carries an optional day
//! slot, an optional night slot, and any number of custom shifts. The slot
//! position inside `Day` is the shift type, and only [`CustomShift`] carries
//! an hour count, so no representable state can pair a fixed slot with
//! custom hours.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Storage key of a monthly schedule: one location, one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleKey {
    /// The location the schedule belongs to.
    pub location_id: String,
    /// Four-digit year.
    pub year: i32,
    /// Month in 1-12.
    pub month: u32,
}

impl ScheduleKey {
    /// Creates a key, rejecting months outside 1-12.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::ScheduleKey;
    ///
    /// let key = ScheduleKey::new("loc_001", 2025, 3).unwrap();
    /// assert_eq!(key.month, 3);
    /// assert!(ScheduleKey::new("loc_001", 2025, 13).is_err());
    /// ```
    pub fn new(location_id: impl Into<String>, year: i32, month: u32) -> RosterResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(RosterError::InvalidMonth { month });
        }
        Ok(Self {
            location_id: location_id.into(),
            year,
            month,
        })
    }

    /// Returns true if `date` falls within this key's calendar month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Whether an assignment's earnings value has been entered, and by whom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningsStatus {
    /// No earnings recorded yet.
    #[default]
    Unset,
    /// Entered by the assigned employee; may be overwritten by them.
    SelfReported,
    /// Entered or confirmed by a manager; only a manager may change it.
    Confirmed,
}

/// One employee's presence on one shift.
///
/// `employee_name` is a denormalized snapshot taken at assignment time so
/// calendars render without a join; it is not refreshed if the employee is
/// later renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Back-reference to the assigned employee.
    pub employee_id: String,
    /// The employee's name at assignment time.
    pub employee_name: String,
    /// Earnings for this shift, if recorded.
    #[serde(default)]
    pub earnings: Option<Decimal>,
    /// Provenance of the earnings value.
    #[serde(default)]
    pub status: EarningsStatus,
}

impl Assignment {
    /// Creates an assignment with no earnings recorded.
    pub fn new(employee_id: impl Into<String>, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            earnings: None,
            status: EarningsStatus::Unset,
        }
    }
}

/// A fixed 12-hour day or night slot within a [`Day`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// The employees working this slot, in assignment order.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl ShiftSlot {
    /// Hours worked in a day or night slot.
    pub const HOURS: u32 = 12;
}

/// A shift with an explicit hour count within a [`Day`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomShift {
    /// Hours worked, 1-24 (validated by the reconciler).
    pub hours: u8,
    /// The employees working this shift, in assignment order.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// One calendar date's shift assignments within a [`Schedule`].
///
/// A `Day` with no populated slot and no custom shifts must not exist in
/// storage; the reconciler prunes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// The calendar date, always within the owning schedule's month.
    pub date: NaiveDate,
    /// The 12-hour day slot, if anyone is assigned.
    #[serde(default)]
    pub day_shift: Option<ShiftSlot>,
    /// The 12-hour night slot, if anyone is assigned.
    #[serde(default)]
    pub night_shift: Option<ShiftSlot>,
    /// Additional shifts with explicit hour counts.
    #[serde(default)]
    pub custom_shifts: Vec<CustomShift>,
}

impl Day {
    /// Creates a day with no assignments.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            day_shift: None,
            night_shift: None,
            custom_shifts: vec![],
        }
    }

    /// Drops slots and custom shifts whose assignment lists are empty.
    ///
    /// A caller submitting `{"day_shift": {"assignments": []}}` means the
    /// same thing as omitting the slot; normalising first keeps the
    /// emptiness check and idempotence exact.
    pub fn normalize(&mut self) {
        if self
            .day_shift
            .as_ref()
            .is_some_and(|s| s.assignments.is_empty())
        {
            self.day_shift = None;
        }
        if self
            .night_shift
            .as_ref()
            .is_some_and(|s| s.assignments.is_empty())
        {
            self.night_shift = None;
        }
        self.custom_shifts.retain(|s| !s.assignments.is_empty());
    }

    /// Returns true if the day holds no assignments at all.
    pub fn is_empty(&self) -> bool {
        self.day_shift.is_none() && self.night_shift.is_none() && self.custom_shifts.is_empty()
    }
}

/// Addresses one shift inside a [`Day`].
///
/// The earnings ledger needs to name a shift; day and night slots are
/// unambiguous, custom shifts are addressed by their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShiftSelector {
    /// The day slot.
    Day,
    /// The night slot.
    Night,
    /// The custom shift at `index` within the day's custom shift list.
    Custom {
        /// Zero-based position in [`Day::custom_shifts`].
        index: usize,
    },
}

impl ShiftSelector {
    /// A short description for error messages, e.g. `day` or `custom[2]`.
    pub fn describe(&self) -> String {
        match self {
            ShiftSelector::Day => "day".to_string(),
            ShiftSelector::Night => "night".to_string(),
            ShiftSelector::Custom { index } => format!("custom[{}]", index),
        }
    }
}

/// The set of shift assignments for one location for one (year, month).
///
/// Created implicitly the first time a non-empty day is saved for its key
/// and removed from storage when the last day is pruned. `days` is not kept
/// sorted; readers order by date when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// The location component of the key.
    pub location_id: String,
    /// The year component of the key.
    pub year: i32,
    /// The month component of the key (1-12).
    pub month: u32,
    /// The non-empty days of the month, in insertion order.
    #[serde(default)]
    pub days: Vec<Day>,
    /// Version stamp, bumped by the store on every committed write.
    #[serde(default)]
    pub version: u64,
    /// When the schedule was last committed.
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Creates an empty schedule for the given key (version 0, nothing stored).
    pub fn empty(key: &ScheduleKey) -> Self {
        Self {
            location_id: key.location_id.clone(),
            year: key.year,
            month: key.month,
            days: vec![],
            version: 0,
            updated_at: Utc::now(),
        }
    }

    /// Returns the day entry for `date`, if one exists.
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Returns a mutable day entry for `date`, if one exists.
    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.date == date)
    }

    /// Replaces the entry for the day's date, or appends it.
    pub fn upsert_day(&mut self, day: Day) {
        match self.day_mut(day.date) {
            Some(existing) => *existing = day,
            None => self.days.push(day),
        }
    }

    /// Removes the entry for `date`, if present.
    pub fn remove_day(&mut self, date: NaiveDate) {
        self.days.retain(|d| d.date != date);
    }

    /// Returns true if no days remain.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
