//! Integration tests for the view-sync flow.
//!
//! These tests drive `ViewSyncController` against a mock users service and
//! check the resulting view state.

use userboard_client::ViewSyncController;
use userboard_core::{AppConfig, Draft, StatusKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_user(id: i64, name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "email": email })
}

fn controller_for(server: &MockServer) -> ViewSyncController {
    ViewSyncController::new(AppConfig::new(server.uri(), "test")).unwrap()
}

async fn mount_users(server: &MockServer, users: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(server)
        .await;
}

async fn mount_health(server: &MockServer, uptime: f64) {
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "uptime": uptime })),
        )
        .mount(server)
        .await;
}

// =============================================================================
// Activation
// =============================================================================

mod activation {
    use super::*;

    #[tokio::test]
    async fn test_activate_loads_users_and_health() {
        let mock_server = MockServer::start().await;
        mount_users(
            &mock_server,
            serde_json::json!([
                mock_user(1, "Alice", "alice@example.com"),
                mock_user(2, "Bob", "bob@example.com"),
                mock_user(3, "Carol", "carol@example.com"),
            ]),
        )
        .await;
        mount_health(&mock_server, 125.9).await;

        let controller = controller_for(&mock_server);
        controller.activate().await;

        let state = controller.snapshot();
        let names: Vec<_> = state.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert!(state.backend_status.contains("125s"));
        assert!(state.message.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_activate_with_broken_health_still_lists() {
        let mock_server = MockServer::start().await;
        mount_users(&mock_server, serde_json::json!([mock_user(1, "Alice", "a@example.com")]))
            .await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.activate().await;

        let state = controller.snapshot();
        assert_eq!(state.users.len(), 1);
        assert!(state.backend_status.starts_with("Backend connection failed:"));
        assert!(state.backend_status.contains("503"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_reports_everywhere() {
        let controller =
            ViewSyncController::new(AppConfig::new("http://127.0.0.1:1", "test")).unwrap();
        controller.activate().await;

        let state = controller.snapshot();
        assert!(state.users.is_empty());
        assert_eq!(state.status_kind(), Some(StatusKind::Error));
        assert!(state.backend_status.starts_with("Backend connection failed:"));
        assert!(!state.loading);
    }
}

// =============================================================================
// List and Create
// =============================================================================

mod list_and_create {
    use super::*;

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_users() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_user(1, "Alice", "a@example.com")])),
            )
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.list_users().await;
        controller.list_users().await;

        let state = controller.snapshot();
        assert_eq!(state.users.len(), 1);
        assert!(state.message.contains("Error"));
        assert!(state.message.contains("database offline"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_malformed_list_body_is_reported() {
        let mock_server = MockServer::start().await;
        mount_users(&mock_server, serde_json::json!({ "not": "a list" })).await;

        let controller = controller_for(&mock_server);
        controller.list_users().await;

        let state = controller.snapshot();
        assert!(state.users.is_empty());
        assert!(state.message.starts_with("Error fetching users:"));
    }

    #[tokio::test]
    async fn test_incomplete_draft_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.create_user(Draft::new("", "a@b.com")).await;
        controller.create_user(Draft::new("Al", "")).await;

        let state = controller.snapshot();
        assert!(state.message.contains("fill in all fields"));
        assert!(state.users.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_create_appends_after_list() {
        let mock_server = MockServer::start().await;
        mount_users(&mock_server, serde_json::json!([mock_user(1, "Alice", "a@example.com")]))
            .await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(mock_user(2, "Al", "a@b.com")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.list_users().await;
        controller.set_draft_name("Al");
        controller.set_draft_email("a@b.com");
        controller.submit_draft().await;

        let state = controller.snapshot();
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[1].name, "Al");
        assert_eq!(state.draft, Draft::default());
        assert_eq!(state.status_kind(), Some(StatusKind::Success));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_rejected_create_is_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(400).set_body_string("email taken"))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.create_user(Draft::new("Al", "a@b.com")).await;

        let state = controller.snapshot();
        assert!(state.users.is_empty());
        assert!(state.message.starts_with("Error adding user:"));
        assert!(state.message.contains("email taken"));
        assert!(!state.loading);
    }
}
