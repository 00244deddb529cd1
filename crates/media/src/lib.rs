//! Signed upload client for the external image host.
//!
//! Rendered posters are pushed to a Cloudinary-compatible upload API and
//! addressed afterwards by the `(secure_url, public_id)` pair the host
//! returns. Uploads land in a per-class, per-student folder tree so the
//! host's media library stays browsable.

use std::time::Duration;

use makerfest_core::hashing::sha256_hex;
use makerfest_core::naming::sanitize_component;
use serde::{Deserialize, Serialize};

/// Root folder for all poster uploads on the image host.
pub const UPLOAD_FOLDER_PREFIX: &str = "makerfest-posters";

/// Production upload API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com";

/// HTTP request timeout for one upload attempt. Posters are rasterized at
/// 2x scale, so payloads run to a few megabytes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Image host account configuration.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Overridable for tests; defaults to the production endpoint.
    pub base_url: String,
}

impl MediaConfig {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            cloud_name,
            api_key,
            api_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Stable reference to an uploaded poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    pub secure_url: String,
    pub public_id: String,
}

/// Error type for upload failures.
#[derive(Debug, thiserror::Error)]
pub enum MediaUploadError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The image host returned a non-2xx status code.
    #[error("Image host returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// Uploads poster rasters to the image host.
pub struct MediaUploader {
    client: reqwest::Client,
    config: MediaConfig,
}

impl MediaUploader {
    /// Create an uploader with a pre-configured HTTP client.
    pub fn new(config: MediaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Upload a rendered poster PNG.
    ///
    /// `class_group` and `student_name` are sanitized to
    /// alphanumeric-plus-underscore and become the folder path under
    /// [`UPLOAD_FOLDER_PREFIX`].
    pub async fn upload_poster(
        &self,
        png: Vec<u8>,
        class_group: &str,
        student_name: &str,
    ) -> Result<MediaRef, MediaUploadError> {
        let folder = format!(
            "{UPLOAD_FOLDER_PREFIX}/{}/{}",
            sanitize_component(class_group),
            sanitize_component(student_name),
        );
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_upload(&folder, timestamp, &self.config.api_secret);

        let file = reqwest::multipart::Part::bytes(png)
            .file_name("poster.png")
            .mime_str("image/png")?;
        let form = reqwest::multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", folder.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", file);

        let url = format!(
            "{}/v1_1/{}/image/upload",
            self.config.base_url, self.config.cloud_name
        );
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaUploadError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let media: MediaRef = response.json().await?;
        tracing::info!(folder, public_id = %media.public_id, "Poster uploaded to image host");
        Ok(media)
    }
}

/// Signature over the request parameters.
///
/// The host expects the non-file parameters in alphabetical order, joined
/// as a query string, with the API secret appended, hashed with SHA-256.
fn sign_upload(folder: &str, timestamp: i64, api_secret: &str) -> String {
    sha256_hex(format!("folder={folder}&timestamp={timestamp}{api_secret}").as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_hex_sha256() {
        let sig = sign_upload("makerfest-posters/8A/Ann", 1_700_000_000, "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_depends_on_every_input() {
        let base = sign_upload("f", 1, "s");
        assert_ne!(base, sign_upload("g", 1, "s"));
        assert_ne!(base, sign_upload("f", 2, "s"));
        assert_ne!(base, sign_upload("f", 1, "t"));
        assert_eq!(base, sign_upload("f", 1, "s"));
    }
}
