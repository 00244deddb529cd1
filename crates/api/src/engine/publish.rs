//! Poster publish: raster in, external reference out.
//!
//! The editor rasterizes the rendered poster tree client-side (2x scale,
//! A4 fit) and posts the PNG here. The upload itself is the operation, so
//! its failure fails the request; the merge-backs of the resulting
//! reference into the two stores are best-effort and never undo the
//! student's already-persisted submission.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use makerfest_core::types::DbId;
use makerfest_db::repositories::ProjectRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Publish request from the editor.
#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub project_id: DbId,
    /// PNG bytes as a browser data URI (`data:image/png;base64,...`) or
    /// bare base64.
    pub poster_image: String,
    /// Folder-naming hints for the image host.
    pub student_name: String,
    pub class_name: String,
}

/// Publish result: where the poster now lives.
#[derive(Debug, Serialize)]
pub struct PublishOutcome {
    pub poster_url: String,
}

/// Upload a rendered poster and merge its reference into both stores.
pub async fn publish_poster(state: &AppState, request: PublishRequest) -> AppResult<PublishOutcome> {
    if request.poster_image.is_empty()
        || request.student_name.is_empty()
        || request.class_name.is_empty()
    {
        return Err(AppError::BadRequest("Missing required fields".into()));
    }

    let bytes = decode_poster_image(&request.poster_image)?;
    let (width, height) = verify_raster(&bytes)?;
    tracing::debug!(
        project_id = request.project_id,
        width,
        height,
        "Poster raster verified"
    );

    let media = state
        .media
        .upload_poster(bytes, &request.class_name, &request.student_name)
        .await?;

    let uploaded_at = chrono::Utc::now().timestamp_millis();
    if let Err(e) = state
        .mirror
        .merge_poster(
            request.project_id,
            &media.secure_url,
            &media.public_id,
            uploaded_at,
        )
        .await
    {
        tracing::warn!(
            project_id = request.project_id,
            error = %e,
            "Mirror poster merge failed (non-blocking)"
        );
    }

    match ProjectRepo::set_poster(
        &state.pool,
        request.project_id,
        &media.secure_url,
        &media.public_id,
    )
    .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(
                project_id = request.project_id,
                "Poster merge-back found no canonical row"
            );
        }
        Err(e) => {
            tracing::warn!(
                project_id = request.project_id,
                error = %e,
                "Canonical poster merge failed (non-blocking)"
            );
        }
    }

    Ok(PublishOutcome {
        poster_url: media.secure_url,
    })
}

/// Decode the poster payload, accepting a data URI or bare base64.
fn decode_poster_image(payload: &str) -> AppResult<Vec<u8>> {
    let encoded = match payload.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => payload,
    };
    BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::BadRequest(format!("Invalid poster image encoding: {e}")))
}

/// Header-only check that the payload is a decodable raster; returns its
/// dimensions without decoding pixel data.
fn verify_raster(bytes: &[u8]) -> AppResult<(u32, u32)> {
    image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AppError::BadRequest(format!("Unreadable poster image: {e}")))?
        .into_dimensions()
        .map_err(|e| AppError::BadRequest(format!("Poster payload is not a valid image: {e}")))
}
