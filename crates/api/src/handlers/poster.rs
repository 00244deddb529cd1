//! Handlers for poster rendering and publishing.

use axum::extract::{Query, State};
use axum::Json;
use makerfest_core::error::CoreError;
use makerfest_core::poster::{render, RenderMode, RenderedDocument};
use makerfest_core::themes::{default_theme, theme_by_id};
use makerfest_core::types::DbId;
use serde::Deserialize;

use crate::engine::publish::{publish_poster as run_publish, PublishOutcome, PublishRequest};
use crate::error::{AppError, AppResult};
use crate::handlers::project::fetch_for_viewer;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the poster document endpoint.
#[derive(Debug, Deserialize)]
pub struct PosterQuery {
    /// Teacher-only: render a specific record instead of your own.
    pub id: Option<DbId>,
    /// Overrides the record's saved theme (live preview while picking).
    pub theme: Option<String>,
    /// Render without input surfaces (teacher view, export pipeline).
    pub readonly: Option<bool>,
}

/// GET /api/v1/project/poster
///
/// Renders the caller's record (or, for teachers, `?id=`'s record) into
/// the poster document tree. Theme resolution: query override, then the
/// record's saved theme, then the catalog default; unknown ids fall back
/// to the default rather than erroring.
pub async fn poster_document(
    user: CurrentUser,
    State(state): State<AppState>,
    Query(params): Query<PosterQuery>,
) -> AppResult<Json<DataResponse<RenderedDocument>>> {
    let project = fetch_for_viewer(&state, &user, params.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                key: params
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| user.email.clone()),
            })
        })?;

    let theme = params
        .theme
        .as_deref()
        .or(project.theme_id.as_deref())
        .and_then(theme_by_id)
        .unwrap_or_else(default_theme);

    let mode = if params.readonly.unwrap_or(false) {
        RenderMode::ReadOnly
    } else {
        RenderMode::Editable
    };

    let document = render(&project.poster_content(), theme, mode);
    Ok(Json(DataResponse { data: document }))
}

/// POST /api/v1/poster/publish
///
/// Uploads a client-rasterized poster PNG to the image host and merges
/// the resulting reference into both stores.
pub async fn publish_poster(
    _user: CurrentUser,
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> AppResult<Json<DataResponse<PublishOutcome>>> {
    let outcome = run_publish(&state, request).await?;
    Ok(Json(DataResponse { data: outcome }))
}
