use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3008/", None);
    assert_eq!(client.base_url, "http://localhost:3008");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3008", None);
    assert_eq!(client.base_url, "http://localhost:3008");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:3008", Some("abc.def.ghi"));
    assert_eq!(client.token, Some("abc.def.ghi".to_string()));
}

#[test]
fn test_api_error_exposes_status() {
    let err = ClientError::api_error(404, "NOT_FOUND".into(), "Project not found".into());
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Project not found"));
}

#[tokio::test]
async fn test_unparseable_server_url_is_reported() {
    let client = Client::new("not a url", None);
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Url { .. }));
}
