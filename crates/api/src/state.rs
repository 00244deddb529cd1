use std::sync::Arc;

use makerfest_media::MediaUploader;
use makerfest_mirror::MirrorStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Canonical database connection pool.
    pub pool: makerfest_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Best-effort mirror document store.
    pub mirror: Arc<MirrorStore>,
    /// Image host upload client.
    pub media: Arc<MediaUploader>,
}
