//! Route definitions for the teacher dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher;
use crate::state::AppState;

/// Teacher routes mounted at `/teacher`. All require the teacher role.
///
/// ```text
/// GET /projects  -> list_projects (?class= filter)
/// GET /export    -> export_spreadsheet (CSV attachment)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(teacher::list_projects))
        .route("/export", get(teacher::export_spreadsheet))
}
