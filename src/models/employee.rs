//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! workers in the shift roster system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role an authenticated caller acts under.
///
/// Roles are supplied by the external identity provider and are immutable
/// after employee creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May manage locations, employees, schedules, and any earnings value.
    Manager,
    /// May view their own schedule and report their own earnings.
    Employee,
}

/// Represents a person who can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, snapshotted onto assignments at assignment time.
    pub name: String,
    /// Contact email, unique across employees.
    pub email: String,
    /// The employee's role.
    pub role: Role,
    /// Locations this employee may work at.
    #[serde(default)]
    pub location_ids: Vec<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller of an operation.
///
/// Supplied by the external identity provider; the engine trusts it and
/// applies only the authorization rules of the earnings ledger and the
/// transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The caller's employee id.
    pub employee_id: String,
    /// The caller's role.
    pub role: Role,
}

impl Identity {
    /// Returns true if the caller holds the manager role.
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

impl Employee {
    /// Returns true if the employee holds the manager role.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{Employee, Role};
    /// use chrono::Utc;
    ///
    /// let manager = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Anna".to_string(),
    ///     email: "anna@example.com".to_string(),
    ///     role: Role::Manager,
    ///     location_ids: vec![],
    ///     created_at: Utc::now(),
    /// };
    /// assert!(manager.is_manager());
    /// ```
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
