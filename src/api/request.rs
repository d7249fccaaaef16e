//! Request types for the Shift Roster Engine API.
//!
//! This module defines the JSON request structures and their conversions
//! into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Assignment, CustomShift, Day, EarningsStatus, Role, ShiftSelector, ShiftSlot,
};

/// One day's complete desired state in a day-edits request.
///
/// Mirrors [`Day`]: omitting a slot (or submitting it with no assignments)
/// clears it, and a day with nothing populated removes the date from the
/// schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEditRequest {
    /// The calendar date being edited.
    pub date: NaiveDate,
    /// Desired day-slot state.
    #[serde(default)]
    pub day_shift: Option<ShiftSlotRequest>,
    /// Desired night-slot state.
    #[serde(default)]
    pub night_shift: Option<ShiftSlotRequest>,
    /// Desired custom shifts.
    #[serde(default)]
    pub custom_shifts: Vec<CustomShiftRequest>,
}

/// A 12-hour slot's assignments in a day-edits request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSlotRequest {
    /// The employees working this slot.
    #[serde(default)]
    pub assignments: Vec<AssignmentRequest>,
}

/// A custom shift in a day-edits request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomShiftRequest {
    /// Hours worked, 1-24.
    pub hours: u8,
    /// The employees working this shift.
    #[serde(default)]
    pub assignments: Vec<AssignmentRequest>,
}

/// One assignment in a day-edits request.
///
/// Earnings fields pass through unchanged: a day edit is the complete
/// desired state for its date, so a caller re-submitting a day keeps the
/// recorded earnings by echoing them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// The assigned employee's id.
    pub employee_id: String,
    /// The employee's name, snapshotted onto the assignment.
    pub employee_name: String,
    /// Recorded earnings, if any.
    #[serde(default)]
    pub earnings: Option<Decimal>,
    /// Provenance of the earnings value.
    #[serde(default)]
    pub status: EarningsStatus,
}

/// Request body for setting one assignment's earnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEarningsRequest {
    /// The date of the shift.
    pub date: NaiveDate,
    /// Which shift on that date.
    pub shift: ShiftSelector,
    /// Zero-based position within the shift's assignment list.
    pub assignment_index: usize,
    /// The earnings amount to record.
    pub amount: Decimal,
}

/// Request body for creating a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    /// Display name of the site.
    pub name: String,
    /// Street address of the site.
    pub address: String,
}

/// Request body for creating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Display name.
    pub name: String,
    /// Contact email, unique across employees.
    pub email: String,
    /// Role; defaults to `employee`.
    #[serde(default = "default_role")]
    pub role: Role,
    /// Locations this employee may work at.
    #[serde(default)]
    pub location_ids: Vec<String>,
}

fn default_role() -> Role {
    Role::Employee
}

impl From<DayEditRequest> for Day {
    fn from(req: DayEditRequest) -> Self {
        Day {
            date: req.date,
            day_shift: req.day_shift.map(Into::into),
            night_shift: req.night_shift.map(Into::into),
            custom_shifts: req.custom_shifts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ShiftSlotRequest> for ShiftSlot {
    fn from(req: ShiftSlotRequest) -> Self {
        ShiftSlot {
            assignments: req.assignments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CustomShiftRequest> for CustomShift {
    fn from(req: CustomShiftRequest) -> Self {
        CustomShift {
            hours: req.hours,
            assignments: req.assignments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<AssignmentRequest> for Assignment {
    fn from(req: AssignmentRequest) -> Self {
        Assignment {
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            earnings: req.earnings,
            status: req.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_day_edit() {
        let json = r#"{
            "date": "2025-03-01",
            "day_shift": {
                "assignments": [
                    {"employee_id": "emp_001", "employee_name": "Anna"}
                ]
            },
            "custom_shifts": [
                {
                    "hours": 6,
                    "assignments": [
                        {"employee_id": "emp_002", "employee_name": "Boris"}
                    ]
                }
            ]
        }"#;

        let request: DayEditRequest = serde_json::from_str(json).unwrap();
        let day: Day = request.into();

        assert_eq!(day.day_shift.unwrap().assignments[0].employee_id, "emp_001");
        assert!(day.night_shift.is_none());
        assert_eq!(day.custom_shifts[0].hours, 6);
    }

    #[test]
    fn test_deserialize_set_earnings() {
        let json = r#"{
            "date": "2025-03-01",
            "shift": {"type": "custom", "index": 1},
            "assignment_index": 0,
            "amount": "2000"
        }"#;

        let request: SetEarningsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.shift, ShiftSelector::Custom { index: 1 });
        assert_eq!(request.amount, Decimal::new(2000, 0));
    }

    #[test]
    fn test_create_employee_role_defaults_to_employee() {
        let json = r#"{"name": "Anna", "email": "anna@example.com"}"#;
        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role, Role::Employee);
        assert!(request.location_ids.is_empty());
    }

    #[test]
    fn test_assignment_earnings_pass_through() {
        let json = r#"{
            "employee_id": "emp_001",
            "employee_name": "Anna",
            "earnings": "1500",
            "status": "confirmed"
        }"#;

        let assignment: Assignment = serde_json::from_str::<AssignmentRequest>(json)
            .unwrap()
            .into();
        assert_eq!(assignment.earnings, Some(Decimal::new(1500, 0)));
        assert_eq!(assignment.status, EarningsStatus::Confirmed);
    }
}
