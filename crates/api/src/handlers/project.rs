//! Handlers for project records: the student self-view, the teacher
//! specific view, and the multipart save (the single write path).

use axum::extract::{Multipart, Query, State};
use axum::Json;
use makerfest_core::roles::ROLE_TEACHER;
use makerfest_core::status::ProjectStatus;
use makerfest_core::types::DbId;
use makerfest_db::models::project::{Project, UpsertProject};
use makerfest_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::engine::upsert::{upsert_project, UpsertOutcome};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the record fetch endpoints.
#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    /// Teacher-only: fetch a specific record instead of your own.
    pub id: Option<DbId>,
}

/// GET /api/v1/project
///
/// Students get their own record by cookie identity; teachers may pass
/// `?id=` for any record. Returns `null` when nothing exists yet.
pub async fn get_project(
    user: CurrentUser,
    State(state): State<AppState>,
    Query(params): Query<ProjectQuery>,
) -> AppResult<Json<DataResponse<Option<Project>>>> {
    let project = fetch_for_viewer(&state, &user, params.id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// Resolve which record a viewer sees: `?id=` only counts for teachers,
/// everyone else gets their own row.
pub(crate) async fn fetch_for_viewer(
    state: &AppState,
    user: &CurrentUser,
    id: Option<DbId>,
) -> Result<Option<Project>, sqlx::Error> {
    match id {
        Some(id) if user.role == ROLE_TEACHER => ProjectRepo::find_by_id(&state.pool, id).await,
        _ => ProjectRepo::find_by_email(&state.pool, &user.email).await,
    }
}

/// POST /api/v1/project
///
/// Multipart save of the full record. Text fields not present in the form
/// are written as empty strings (full-replace semantics); an `image` file
/// part is stored through the uploads side channel, and
/// `existing_image_path` round-trips a previously stored reference so a
/// save without a new file does not wipe it.
pub async fn save_project(
    user: CurrentUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<UpsertOutcome>>> {
    let mut input = UpsertProject {
        email: user.email.clone(),
        ..Default::default()
    };
    let mut existing_image_path: Option<String> = None;
    let mut stored_image: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // Browsers send an empty part named "undefined" when the
                // file input was left blank.
                if !bytes.is_empty() && filename != "undefined" {
                    stored_image = Some(store_upload(&state, &filename, &bytes).await?);
                }
            }
            "existing_image_path" => {
                existing_image_path = Some(read_text(field).await?);
            }
            "student_name" => input.student_name = read_text(field).await?,
            "class_group" => input.class_group = read_text(field).await?,
            "project_title" => input.project_title = read_text(field).await?,
            "problem_statement" => input.problem_statement = read_text(field).await?,
            "project_idea" => input.project_idea = read_text(field).await?,
            "materials" => input.materials = read_text(field).await?,
            "how_it_works" => input.how_it_works = read_text(field).await?,
            "challenges" => input.challenges = read_text(field).await?,
            "lessons_learned" => input.lessons_learned = read_text(field).await?,
            "future_scope" => input.future_scope = read_text(field).await?,
            "theme_id" => {
                let value = read_text(field).await?;
                input.theme_id = (!value.is_empty()).then_some(value);
            }
            "status" => input.status = read_text(field).await?,
            // Unknown fields (and the client's own bookkeeping) are ignored.
            _ => {}
        }
    }

    input.status = ProjectStatus::parse_or_draft(&input.status).as_str().to_string();
    input.image_path = stored_image.or(existing_image_path.filter(|p| !p.is_empty()));

    let outcome = upsert_project(&state, input).await?;
    Ok(Json(DataResponse { data: outcome }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Store a form upload in the uploads directory and return its public path.
async fn store_upload(state: &AppState, original: &str, bytes: &[u8]) -> AppResult<String> {
    let filename =
        makerfest_core::naming::upload_filename(chrono::Utc::now().timestamp_millis(), original);
    let dir = &state.config.uploads_dir;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create uploads dir: {e}")))?;
    tokio::fs::write(dir.join(&filename), bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    Ok(format!("/uploads/{filename}"))
}
