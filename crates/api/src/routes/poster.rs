//! Route definitions for poster publishing.

use axum::routing::post;
use axum::Router;

use crate::handlers::poster;
use crate::state::AppState;

/// Poster routes mounted at `/poster`.
///
/// ```text
/// POST /publish  -> publish_poster
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/publish", post(poster::publish_poster))
}
