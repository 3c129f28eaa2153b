use std::time::Duration;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::{has_index, ServerConfig};
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: &ServerConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Business dashboard host starting up");
    debug!("Bind address: {}", config.bind_address);
    debug!("Dist directory: {}", config.dist_dir.display());

    let addr = match config.validate() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid server configuration: {}", e);
            return Err(e.into());
        }
    };

    if !has_index(&config.dist_dir) {
        warn!(
            "{} is missing, the dashboard will not load until the frontend is built",
            config.index_file().display()
        );
    }

    trace!("Creating application router");
    let state = AppState::new(config.dist_dir.clone());
    let app = create_router(state, Duration::from_secs(config.request_timeout_secs));
    debug!("Router created successfully");

    trace!("Attempting to bind TCP listener to {}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("Dashboard available on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
