//! Cookie-session authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use makerfest_core::error::CoreError;
use makerfest_core::roles::ROLE_STUDENT;

use crate::auth::{cookie_value, EMAIL_COOKIE, ROLE_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the session cookies.
///
/// Use this as an extractor parameter in any handler that requires a
/// logged-in caller:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The submitter identity (email) from the session cookie.
    pub email: String,
    /// The role name (`"student"` or `"teacher"`); defaults to student
    /// when the role cookie is missing.
    pub role: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let email = cookie_value(header, EMAIL_COOKIE)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))?;

        let role = cookie_value(header, ROLE_COOKIE).unwrap_or_else(|| ROLE_STUDENT.to_string());

        Ok(CurrentUser { email, role })
    }
}
