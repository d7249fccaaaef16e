//! Caller identity extraction.
//!
//! The engine trusts an upstream identity provider (non-goal: credential
//! mechanics). The provider forwards the authenticated caller as two
//! headers; requests without them are rejected with 401 before any handler
//! runs.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::models::{Identity, Role};

use super::response::ApiErrorResponse;

/// Header carrying the authenticated caller's employee id.
pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";
/// Header carrying the authenticated caller's role (`manager` or `employee`).
pub const EMPLOYEE_ROLE_HEADER: &str = "x-employee-role";

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let employee_id = parts
            .headers
            .get(EMPLOYEE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ApiErrorResponse::unauthorized(format!("missing {} header", EMPLOYEE_ID_HEADER))
            })?;

        let role = parts
            .headers
            .get(EMPLOYEE_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                ApiErrorResponse::unauthorized(format!("missing {} header", EMPLOYEE_ROLE_HEADER))
            })?;

        let role = match role {
            "manager" => Role::Manager,
            "employee" => Role::Employee,
            other => {
                return Err(ApiErrorResponse::unauthorized(format!(
                    "unknown role '{}'",
                    other
                )));
            }
        };

        Ok(Identity {
            employee_id: employee_id.to_string(),
            role,
        })
    }
}
