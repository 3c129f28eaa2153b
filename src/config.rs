use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default location of the Trunk build output, relative to the repository root.
pub const DEFAULT_DIST_DIR: &str = "workspace/frontend/dist";

/// Default bind address for the host server.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{address}': {source}")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("frontend bundle not found: {0} is not a directory (run `trunk build` in workspace/frontend)")]
    DistDirMissing(PathBuf),
}

/// Settings of the host server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub dist_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(bind_address: impl Into<String>, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_address: bind_address.into(),
            dist_dir: dist_dir.into(),
            request_timeout_secs: 30,
        }
    }

    /// Checks the bind address parses and the bundle directory exists.
    pub fn validate(&self) -> Result<SocketAddr, ConfigError> {
        let addr = self
            .bind_address
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddress {
                address: self.bind_address.clone(),
                source,
            })?;

        if !self.dist_dir.is_dir() {
            return Err(ConfigError::DistDirMissing(self.dist_dir.clone()));
        }

        Ok(addr)
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Load `.env` into the process environment so clap's `env` fallbacks see it.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::trace!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }
}

pub fn has_index(dist_dir: &Path) -> bool {
    dist_dir.join("index.html").is_file()
}
