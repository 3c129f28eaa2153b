use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the built frontend bundle
    pub dist_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: Arc::new(dist_dir.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the frontend bundle's index.html is present
    pub assets: String,
}
