//! HTTP client for the mirror document service.
//!
//! The service exposes a Firebase-RTDB-style REST surface: JSON documents
//! addressed by path, `PUT` to replace, `PATCH` to merge, `GET` on the
//! collection to read everything (a `null` body when empty).

use std::collections::BTreeMap;
use std::time::Duration;

use makerfest_core::types::DbId;

use crate::document::MirrorDocument;

/// HTTP request timeout for a single mirror call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for mirror store failures.
///
/// Callers on the write path log and swallow these; only the export,
/// whose sole data source is the mirror, surfaces them.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The mirror service returned a non-2xx status code.
    #[error("Mirror returned HTTP {0}")]
    HttpStatus(u16),
}

/// Client for the mirror document service.
pub struct MirrorStore {
    client: reqwest::Client,
    base_url: String,
}

impl MirrorStore {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn document_url(&self, id: DbId) -> String {
        format!("{}/projects/{id}.json", self.base_url)
    }

    /// Replace the document for one project.
    pub async fn put_project(&self, id: DbId, doc: &MirrorDocument) -> Result<(), MirrorError> {
        let response = self
            .client
            .put(self.document_url(id))
            .json(doc)
            .send()
            .await?;
        check_status(response.status())
    }

    /// Merge the published poster reference into an existing document.
    ///
    /// Touches only the three poster fields so a concurrent full sync is
    /// not clobbered.
    pub async fn merge_poster(
        &self,
        id: DbId,
        poster_url: &str,
        poster_public_id: &str,
        uploaded_at_millis: i64,
    ) -> Result<(), MirrorError> {
        let patch = serde_json::json!({
            "poster_url": poster_url,
            "poster_public_id": poster_public_id,
            "poster_uploaded_at": uploaded_at_millis,
        });
        let response = self
            .client
            .patch(self.document_url(id))
            .json(&patch)
            .send()
            .await?;
        check_status(response.status())
    }

    /// Fetch every project document.
    ///
    /// The service returns a `{id: document}` map, or `null` when the
    /// collection is empty. Documents come back in key order.
    pub async fn fetch_all(&self) -> Result<Vec<MirrorDocument>, MirrorError> {
        let url = format!("{}/projects.json", self.base_url);
        let response = self.client.get(url).send().await?;
        check_status(response.status())?;

        let documents: Option<BTreeMap<String, MirrorDocument>> = response.json().await?;
        Ok(documents.map(|map| map.into_values().collect()).unwrap_or_default())
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), MirrorError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(MirrorError::HttpStatus(status.as_u16()))
    }
}
