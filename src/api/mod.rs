//! HTTP API module for the Shift Roster Engine.
//!
//! This module provides the REST API endpoints for managing locations,
//! employees, monthly schedules, earnings, and per-employee statistics.

mod handlers;
mod identity;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use identity::{EMPLOYEE_ID_HEADER, EMPLOYEE_ROLE_HEADER};
pub use request::{
    AssignmentRequest, CreateEmployeeRequest, CreateLocationRequest, CustomShiftRequest,
    DayEditRequest, SetEarningsRequest, ShiftSlotRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
