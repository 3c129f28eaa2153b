#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use std::time::Duration;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_INDEX: &str = "<!DOCTYPE html><html><body>dashboard</body></html>";

    /// Create a dist directory holding an index.html and one asset
    pub fn setup_dist_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dist dir");
        std::fs::write(dir.path().join("index.html"), TEST_INDEX)
            .expect("Failed to write index.html");
        std::fs::write(dir.path().join("frontend.js"), "console.log('dashboard');")
            .expect("Failed to write asset");
        dir
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Only the first call installs the
    /// subscriber.
    fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Create axum app serving `dist_dir` for testing
    pub fn setup_test_app(dist_dir: &std::path::Path) -> Router {
        init_test_tracing();
        create_router(AppState::new(dist_dir), Duration::from_secs(5))
    }
}
