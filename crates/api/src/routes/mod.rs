pub mod auth;
pub mod health;
pub mod poster;
pub mod project;
pub mod teacher;
pub mod themes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login            login (public, sets session cookies)
/// /auth/logout           logout (clears session cookies)
///
/// /project               get own record (teachers: ?id=), multipart save
/// /project/poster        rendered poster document tree (?theme=, ?readonly=)
///
/// /poster/publish        upload a rasterized poster, merge the reference back
///
/// /themes                static poster theme catalog
///
/// /teacher/projects      submitted records, ?class= filter (teacher only)
/// /teacher/export        CSV export from the mirror store (teacher only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Session login/logout.
        .nest("/auth", auth::router())
        // Student record fetch/save and the rendered poster tree.
        .nest("/project", project::router())
        // Poster publish (rasterized upload).
        .nest("/poster", poster::router())
        // Static theme catalog.
        .nest("/themes", themes::router())
        // Teacher dashboard list + export.
        .nest("/teacher", teacher::router())
}
