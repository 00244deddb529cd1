//! Handlers for the cookie-session login flow.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use makerfest_core::validation::validate_email;
use serde::{Deserialize, Serialize};

use crate::auth::{clear_cookie, resolve_role, session_cookie, EMAIL_COOKIE, ROLE_COOKIE};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub role: &'static str,
}

/// POST /api/v1/auth/login
///
/// Validates the email, derives the role, and sets the session cookies.
/// There is no password; the cookie pair IS the session.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Response> {
    validate_email(&input.email)?;

    let role = resolve_role(&input.email, &state.config.teacher_emails);
    tracing::info!(role, "User logged in");

    let mut response = Json(DataResponse {
        data: LoginResult { role },
    })
    .into_response();
    append_cookie(&mut response, session_cookie(EMAIL_COOKIE, &input.email))?;
    append_cookie(&mut response, session_cookie(ROLE_COOKIE, role))?;
    Ok(response)
}

/// POST /api/v1/auth/logout
///
/// Clears the session cookies.
pub async fn logout() -> AppResult<Response> {
    let mut response = StatusCode::NO_CONTENT.into_response();
    append_cookie(&mut response, clear_cookie(EMAIL_COOKIE))?;
    append_cookie(&mut response, clear_cookie(ROLE_COOKIE))?;
    Ok(response)
}

fn append_cookie(response: &mut Response, cookie: String) -> AppResult<()> {
    let value = HeaderValue::from_str(&cookie).map_err(|_| {
        AppError::BadRequest("Email contains characters not allowed in a cookie".into())
    })?;
    response.headers_mut().append(SET_COOKIE, value);
    Ok(())
}
