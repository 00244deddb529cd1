//! Handlers for the teacher dashboard: submission list and bulk export.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use makerfest_core::export::{build_spreadsheet, ALL_CLASSES};
use makerfest_core::naming::export_filename;
use makerfest_db::models::project::Project;
use makerfest_db::repositories::ProjectRepo;
use makerfest_mirror::MirrorDocument;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireTeacher;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters shared by the teacher endpoints.
#[derive(Debug, Deserialize)]
pub struct ClassQuery {
    /// Class filter; absent or `All` means every class.
    pub class: Option<String>,
}

impl ClassQuery {
    fn filter(&self) -> Option<&str> {
        self.class.as_deref().filter(|c| *c != ALL_CLASSES)
    }
}

/// GET /api/v1/teacher/projects
///
/// Submitted projects from the canonical store, ordered by
/// `(class, student name)`, optionally narrowed to one class.
pub async fn list_projects(
    RequireTeacher(_teacher): RequireTeacher,
    State(state): State<AppState>,
    Query(params): Query<ClassQuery>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_submitted(&state.pool, params.filter()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/teacher/export
///
/// Bulk spreadsheet export, built from the mirror store's documents (the
/// canonical table is not consulted). Returned as a `text/csv` attachment
/// with a timestamped filename.
pub async fn export_spreadsheet(
    RequireTeacher(_teacher): RequireTeacher,
    State(state): State<AppState>,
    Query(params): Query<ClassQuery>,
) -> AppResult<Response> {
    // The mirror is this endpoint's sole data source, so unlike the write
    // path its failure surfaces to the caller.
    let documents = state.mirror.fetch_all().await?;
    let records = documents.iter().map(MirrorDocument::export_record).collect();

    let filter_label = params.class.as_deref().unwrap_or(ALL_CLASSES);
    let csv = build_spreadsheet(records, Some(filter_label));

    let filename = export_filename(filter_label, chrono::Utc::now().timestamp_millis());
    tracing::info!(filter = filter_label, rows = csv.lines().count() - 1, "Spreadsheet exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
