//! HTTP request handlers for the Shift Roster Engine API.
//!
//! This module contains the handler functions for all API endpoints and the
//! router wiring them together. Authorization is header-based: every endpoint
//! except `/health` requires the caller identity headers, and write access is
//! checked per endpoint (see [`super::identity`]).

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{days_in_month, first_weekday_offset};
use crate::engine::{
    apply_day_edits, compute_earnings_history, compute_monthly_stats, set_assignment_earnings,
};
use crate::error::RosterError;
use crate::models::{Day, Employee, Identity, Location, ScheduleKey};
use crate::store::RosterStore;

use super::request::{
    CreateEmployeeRequest, CreateLocationRequest, DayEditRequest, SetEarningsRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calendar/:year/:month", get(calendar_handler))
        .route("/locations", get(list_locations_handler))
        .route("/locations", post(create_location_handler))
        .route("/locations/:id", delete(delete_location_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees", post(create_employee_handler))
        .route("/employees/:id", delete(delete_employee_handler))
        .route(
            "/schedules/:location_id/:year/:month",
            get(get_schedule_handler),
        )
        .route(
            "/schedules/:location_id/:year/:month/days",
            put(edit_days_handler),
        )
        .route(
            "/schedules/:location_id/:year/:month/earnings",
            post(set_earnings_handler),
        )
        .route(
            "/schedules/:location_id/:year/:month/stats/:employee_id",
            get(monthly_stats_handler),
        )
        .route(
            "/locations/:location_id/earnings-history/:employee_id",
            get(earnings_history_handler),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct CalendarInfo {
    year: i32,
    month: u32,
    days_in_month: u32,
    /// Leading empty cells in a Monday-first grid (weekday of the 1st).
    first_weekday_offset: u32,
}

/// Handler for GET /calendar/{year}/{month} endpoint.
///
/// Returns the grid parameters a calendar view needs to lay out the month.
async fn calendar_handler(
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    if !(1..=12).contains(&month) {
        return Err(RosterError::InvalidMonth { month }.into());
    }
    Ok(Json(CalendarInfo {
        year,
        month,
        days_in_month: days_in_month(year, month),
        first_weekday_offset: first_weekday_offset(year, month),
    }))
}

/// Converts a JSON extraction failure into a 400 response.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Rejects non-manager callers.
fn require_manager(identity: &Identity) -> Result<(), ApiErrorResponse> {
    if identity.is_manager() {
        Ok(())
    } else {
        Err(ApiErrorResponse::forbidden(
            "this operation requires the manager role",
        ))
    }
}

/// Rejects callers that are neither a manager nor the subject employee.
fn require_manager_or_self(
    identity: &Identity,
    employee_id: &str,
) -> Result<(), ApiErrorResponse> {
    if identity.is_manager() || identity.employee_id == employee_id {
        Ok(())
    } else {
        Err(ApiErrorResponse::forbidden(
            "employees may only view their own records",
        ))
    }
}

/// Looks up a location, turning absence into a 404.
fn ensure_location(
    store: &dyn RosterStore,
    id: &str,
) -> Result<Location, ApiErrorResponse> {
    match store.get_location(id)? {
        Some(location) => Ok(location),
        None => Err(RosterError::LocationNotFound { id: id.to_string() }.into()),
    }
}

/// Handler for GET /locations endpoint.
async fn list_locations_handler(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let locations = state.store().list_locations()?;
    Ok(Json(locations))
}

/// Handler for POST /locations endpoint.
///
/// Manager only. Assigns a fresh id and creation timestamp.
async fn create_location_handler(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<CreateLocationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_manager(&identity)?;

    let request = payload
        .map_err(|rejection| json_rejection_error(correlation_id, rejection))?
        .0;
    if request.name.trim().is_empty() {
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "location name must not be empty",
        )));
    }

    let location = Location {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        address: request.address,
        created_at: Utc::now(),
    };
    state.store().put_location(location.clone())?;

    info!(
        correlation_id = %correlation_id,
        location_id = %location.id,
        "Location created"
    );
    Ok((StatusCode::CREATED, Json(location)))
}

/// Handler for DELETE /locations/{id} endpoint.
///
/// Manager only. Refused while the location still has stored schedules;
/// otherwise the id is also removed from every employee's location list.
async fn delete_location_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_manager(&identity)?;

    state.store().delete_location(&id)?;
    info!(correlation_id = %correlation_id, location_id = %id, "Location deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /employees endpoint.
async fn list_employees_handler(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employees = state.store().list_employees()?;
    Ok(Json(employees))
}

/// Handler for POST /employees endpoint.
///
/// Manager only. Emails are unique across employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_manager(&identity)?;

    let request = payload
        .map_err(|rejection| json_rejection_error(correlation_id, rejection))?
        .0;
    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "employee name and email must not be empty",
        )));
    }
    if state
        .store()
        .find_employee_by_email(&request.email)?
        .is_some()
    {
        return Err(RosterError::EmployeeExists {
            email: request.email,
        }
        .into());
    }
    for location_id in &request.location_ids {
        ensure_location(state.store(), location_id)?;
    }

    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        email: request.email,
        role: request.role,
        location_ids: request.location_ids,
        created_at: Utc::now(),
    };
    state.store().put_employee(employee.clone())?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        role = ?employee.role,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for DELETE /employees/{id} endpoint.
///
/// Manager only; a manager cannot delete their own account.
async fn delete_employee_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_manager(&identity)?;

    if identity.employee_id == id {
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "managers cannot delete their own account",
        )));
    }

    state.store().delete_employee(&id)?;
    info!(correlation_id = %correlation_id, employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /schedules/{location_id}/{year}/{month} endpoint.
///
/// Returns the stored schedule with its days sorted by date, or a JSON
/// `null` body when no schedule exists for that month yet.
async fn get_schedule_handler(
    State(state): State<AppState>,
    _identity: Identity,
    Path((location_id, year, month)): Path<(String, i32, u32)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let key = ScheduleKey::new(&location_id, year, month)?;
    ensure_location(state.store(), &location_id)?;

    let schedule = state.store().load_schedule(&key)?.map(|mut schedule| {
        schedule.days.sort_by_key(|day| day.date);
        schedule
    });
    Ok(Json(schedule))
}

/// Handler for PUT /schedules/{location_id}/{year}/{month}/days endpoint.
///
/// Manager only. Each submitted day replaces that date's state wholesale;
/// dates not mentioned are untouched. Either the whole batch applies or
/// nothing does.
async fn edit_days_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path((location_id, year, month)): Path<(String, i32, u32)>,
    payload: Result<Json<Vec<DayEditRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    require_manager(&identity)?;

    let key = ScheduleKey::new(&location_id, year, month)?;
    ensure_location(state.store(), &location_id)?;

    let edits = payload
        .map_err(|rejection| json_rejection_error(correlation_id, rejection))?
        .0;
    let days: Vec<Day> = edits.into_iter().map(Into::into).collect();
    let days_count = days.len();

    match apply_day_edits(state.store(), &key, days) {
        Ok(mut schedule) => {
            schedule.days.sort_by_key(|day| day.date);
            info!(
                correlation_id = %correlation_id,
                location_id = %location_id,
                year,
                month,
                days_count,
                version = schedule.version,
                "Day edits applied"
            );
            Ok(Json(schedule))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                location_id = %location_id,
                year,
                month,
                error = %err,
                "Day edits rejected"
            );
            Err(err.into())
        }
    }
}

/// Handler for POST /schedules/{location_id}/{year}/{month}/earnings endpoint.
///
/// Managers may set and confirm any assignment's earnings; employees may
/// self-report on their own unconfirmed assignments.
async fn set_earnings_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path((location_id, year, month)): Path<(String, i32, u32)>,
    payload: Result<Json<SetEarningsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let key = ScheduleKey::new(&location_id, year, month)?;
    ensure_location(state.store(), &location_id)?;

    let request = payload
        .map_err(|rejection| json_rejection_error(correlation_id, rejection))?
        .0;

    match set_assignment_earnings(
        state.store(),
        state.config(),
        &key,
        request.date,
        request.shift,
        request.assignment_index,
        request.amount,
        &identity,
    ) {
        Ok(mut schedule) => {
            schedule.days.sort_by_key(|day| day.date);
            info!(
                correlation_id = %correlation_id,
                location_id = %location_id,
                date = %request.date,
                shift = %request.shift.describe(),
                amount = %request.amount,
                caller = %identity.employee_id,
                "Earnings recorded"
            );
            Ok(Json(schedule))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                location_id = %location_id,
                date = %request.date,
                error = %err,
                "Earnings update rejected"
            );
            Err(err.into())
        }
    }
}

/// Handler for GET /schedules/{location_id}/{year}/{month}/stats/{employee_id}
/// endpoint.
///
/// Visible to managers and to the employee themselves.
async fn monthly_stats_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path((location_id, year, month, employee_id)): Path<(String, i32, u32, String)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    require_manager_or_self(&identity, &employee_id)?;

    let key = ScheduleKey::new(&location_id, year, month)?;
    ensure_location(state.store(), &location_id)?;

    let stats = compute_monthly_stats(state.store(), &employee_id, &key)?;
    Ok(Json(stats))
}

/// Handler for GET /locations/{location_id}/earnings-history/{employee_id}
/// endpoint.
///
/// Visible to managers and to the employee themselves.
async fn earnings_history_handler(
    State(state): State<AppState>,
    identity: Identity,
    Path((location_id, employee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    require_manager_or_self(&identity, &employee_id)?;
    ensure_location(state.store(), &location_id)?;

    let records = compute_earnings_history(state.store(), &employee_id, &location_id)?;
    Ok(Json(records))
}
