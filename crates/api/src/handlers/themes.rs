//! Handler for the static theme catalog.

use axum::Json;
use makerfest_core::themes::{Theme, THEMES};

use crate::response::DataResponse;

/// GET /api/v1/themes
///
/// The full poster theme catalog. Static per build; no auth required.
pub async fn list_themes() -> Json<DataResponse<&'static [Theme]>> {
    Json(DataResponse { data: &THEMES[..] })
}
