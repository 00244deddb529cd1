//! Route definitions for project records.

use axum::routing::get;
use axum::Router;

use crate::handlers::{poster, project};
use crate::state::AppState;

/// Project routes mounted at `/project`.
///
/// ```text
/// GET  /         -> get_project (own record; teachers: ?id=)
/// POST /         -> save_project (multipart full-record save)
/// GET  /poster   -> poster_document (rendered tree)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::get_project).post(project::save_project))
        .route("/poster", get(poster::poster_document))
}
