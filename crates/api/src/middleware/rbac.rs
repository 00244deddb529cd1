//! Role-based access control extractors.
//!
//! Wraps [`CurrentUser`] and rejects requests whose role does not meet the
//! requirement, so authorization is enforced at the type level in route
//! handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use makerfest_core::error::CoreError;
use makerfest_core::roles::ROLE_TEACHER;

use super::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `teacher` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn teacher_only(RequireTeacher(user): RequireTeacher) -> AppResult<Json<()>> {
///     // user is guaranteed to be a teacher here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireTeacher(pub CurrentUser);

impl FromRequestParts<AppState> for RequireTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_TEACHER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Teacher role required".into(),
            )));
        }
        Ok(RequireTeacher(user))
    }
}
