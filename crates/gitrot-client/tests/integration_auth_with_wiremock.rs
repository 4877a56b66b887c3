//! Integration tests for the auth and user profile endpoints using wiremock

mod common;

use gitrot_client::{ProfileUpdate, UserAuthRequest};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn octocat_login() -> UserAuthRequest {
    UserAuthRequest::builder()
        .email("octocat@example.com")
        .name("The Octocat")
        .image("https://avatars.githubusercontent.com/u/583231?v=4")
        .provider("github")
        .provider_id("583231")
        .build()
        .expect("Failed to build auth request")
}

#[tokio::test]
async fn test_register_or_login_success() {
    let mock_server = MockServer::start().await;

    let response_body = common::load_response_fixture("auth_login");

    Mock::given(method("POST"))
        .and(path("/auth/register-or-login"))
        .and(body_json(serde_json::json!({
            "email": "octocat@example.com",
            "name": "The Octocat",
            "image": "https://avatars.githubusercontent.com/u/583231?v=4",
            "provider": "github",
            "provider_id": "583231"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let user = client
        .auth()
        .register_or_login(&octocat_login())
        .await
        .expect("Request failed");

    assert_eq!(user.user_id, "665f1c2a9b3e4d0012a77b31");
    assert!(!user.is_new);
    assert_eq!(user.name, "The Octocat");

    mock_server.verify().await;
}

#[tokio::test]
async fn test_register_or_login_first_visit_sets_is_new() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register-or-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": "665f1c2a9b3e4d0012a77b99",
            "is_new": true,
            "email": "octocat@example.com",
            "name": "The Octocat",
            "image": ""
        })))
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let user = client
        .auth()
        .register_or_login(&octocat_login())
        .await
        .expect("Request failed");

    assert!(user.is_new);
}

#[tokio::test]
async fn test_register_or_login_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register-or-login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "Database connection failed"
        })))
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let result = client.auth().register_or_login(&octocat_login()).await;

    let err = result.expect_err("expected an error");
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Database connection failed"));
}

#[tokio::test]
async fn test_profile_fetch_posts_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/665f1c2a9b3e4d0012a77b31"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("auth_login")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let user = client
        .auth()
        .profile("665f1c2a9b3e4d0012a77b31")
        .await
        .expect("Request failed");

    assert_eq!(user.email, "octocat@example.com");

    // The profile fetch endpoint takes no request body
    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_profile_fetch_unknown_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "User not found"
        })))
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let err = client.auth().profile("nope").await.expect_err("expected 404");

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_update_profile_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/665f1c2a9b3e4d0012a77b31"))
        .and(body_json(serde_json::json!({"name": "Octocat the Second"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user_id": "665f1c2a9b3e4d0012a77b31",
            "is_new": false,
            "email": "octocat@example.com",
            "name": "Octocat the Second",
            "image": "https://avatars.githubusercontent.com/u/583231?v=4"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let update = ProfileUpdate::default().name("Octocat the Second");
    let user = client
        .auth()
        .update_profile("665f1c2a9b3e4d0012a77b31", &update)
        .await
        .expect("Request failed");

    assert_eq!(user.name, "Octocat the Second");
    mock_server.verify().await;
}
