#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_dist_dir, setup_test_app, TEST_INDEX};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check_with_bundle() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.assets, "present");
    }

    #[tokio::test]
    async fn test_health_check_without_bundle() {
        let dist = tempfile::tempdir().unwrap();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.assets, "missing");
    }

    #[tokio::test]
    async fn test_root_serves_host_page() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), TEST_INDEX);
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/frontend.js").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("dashboard"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dist = setup_dist_dir();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/some/deep/link").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), TEST_INDEX);
    }
}
