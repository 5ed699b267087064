//! Integration tests for the CLI client using wiremock mock server

use pms_cli::{Client, ClientError};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[tokio::test]
async fn test_health_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "message": "Backend is running",
            "databaseStatus": "Connected"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.health().await.unwrap();

    assert_eq!(result["status"], "OK");
    assert_eq!(result["databaseStatus"], "Connected");
}

#[tokio::test]
async fn test_list_projects_returns_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "00000000-0000-0000-0000-000000000001", "name": "Apollo" }
        ])))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.list_projects().await.unwrap();

    let projects = result.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Apollo");
}

#[tokio::test]
async fn test_get_project_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/00000000-0000-0000-0000-000000000001"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Project not found",
            "error": { "code": "NOT_FOUND", "message": "Project not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client
        .get_project("00000000-0000-0000-0000-000000000001")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_unknown_route_error_uses_top_level_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Route not found",
            "path": "/users",
            "method": "GET"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.list_users().await.unwrap_err();

    match err {
        ClientError::Api { code, message, .. } => {
            assert_eq!(code, "UNKNOWN");
            assert_eq!(message, "Route not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "ann@example.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Logged in successfully",
            "role": "QA"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.login("ann@example.com", "pw").await.unwrap();

    assert_eq!(result["message"], "Logged in successfully");
}

#[tokio::test]
async fn test_list_tasks_sends_scope_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("userId", "00000000-0000-0000-0000-000000000009"))
        .and(query_param("role", "Backend Developer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client
        .list_tasks(
            Some("00000000-0000-0000-0000-000000000009"),
            Some("Backend Developer"),
        )
        .await
        .unwrap();

    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn test_token_sent_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/daily-tasks"))
        .and(header("authorization", "Bearer signed.jwt.value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("signed.jwt.value"));
    let result = client.list_daily_tasks(None, None).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_non_json_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/debug/db"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let err = client.debug_db().await.unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}
