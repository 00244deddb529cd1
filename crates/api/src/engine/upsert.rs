//! The single write path for project records.

use makerfest_core::types::DbId;
use makerfest_core::validation::validate_email;
use makerfest_db::models::project::UpsertProject;
use makerfest_db::repositories::ProjectRepo;
use makerfest_mirror::MirrorDocument;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of a save: the stable record id and the image reference the
/// caller must round-trip on its next save.
#[derive(Debug, Serialize)]
pub struct UpsertOutcome {
    pub id: DbId,
    pub image_path: Option<String>,
    pub created: bool,
}

/// Validate and persist a full project record, then mirror it.
///
/// Insert-vs-update is decided by an identity lookup: an existing row
/// keeps its id and has every caller-owned field overwritten; a missing
/// row is inserted and the database assigns the id. A concurrent
/// first-time save for the same email loses the insert race and surfaces
/// the unique violation as a 409.
///
/// The mirror write runs strictly after the canonical commit and is
/// best-effort: failures are logged and swallowed, never retried, and
/// never affect the response. A mirror reader may therefore lag behind
/// the canonical store for an unbounded window.
pub async fn upsert_project(state: &AppState, input: UpsertProject) -> AppResult<UpsertOutcome> {
    validate_email(&input.email)?;

    let existing = ProjectRepo::find_by_email(&state.pool, &input.email).await?;
    let (project, created) = match existing {
        Some(_) => {
            let updated = ProjectRepo::update_by_email(&state.pool, &input)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError("Project row vanished during update".into())
                })?;
            (updated, false)
        }
        None => (ProjectRepo::insert(&state.pool, &input).await?, true),
    };

    let synced_at = chrono::Utc::now().timestamp_millis();
    let document = MirrorDocument::from_project(&project, synced_at);
    if let Err(e) = state.mirror.put_project(project.id, &document).await {
        tracing::warn!(
            project_id = project.id,
            error = %e,
            "Mirror sync failed (non-blocking)"
        );
    } else {
        tracing::debug!(project_id = project.id, "Synced project to mirror");
    }

    Ok(UpsertOutcome {
        id: project.id,
        image_path: project.image_path,
        created,
    })
}
