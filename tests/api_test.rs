//! Integration tests for API endpoints.
//!
//! Each test builds the real router over a fresh in-memory store and drives
//! it in-process, without binding a socket.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use repo_binder::api::{create_router, AppState};
use repo_binder::config::Config;

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::from_config(Config::default()))
}

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body should be UTF-8")
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-Api-Token", token)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_repo(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("X-Api-Token", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn create_user(app: &Router, login: &str, is_member: bool, age: i64) -> TestResponse {
    send(
        app,
        post_json(
            "/users",
            json!({ "login": login, "is_member": is_member, "age": age }),
        ),
    )
    .await
}

async fn repo_count(app: &Router) -> u64 {
    let health = send(app, get("/health")).await;
    health.json()["repos"].as_u64().unwrap()
}

// =============================================================================
// Create User
// =============================================================================

#[tokio::test]
async fn test_create_user_echoes_input_and_collection() {
    let app = app();
    let response = create_user(&app, "ggicci", true, 18).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));

    let body = response.json();
    assert_eq!(body["input"]["login"], "ggicci");
    assert_eq!(body["input"]["is_member"], true);
    assert_eq!(body["input"]["age"], 18);
    assert!(body["input"]["created_at"].is_string());
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0], body["input"]);
}

#[tokio::test]
async fn test_create_user_overrides_caller_created_at() {
    let app = app();
    let response = send(
        &app,
        post_json(
            "/users",
            json!({
                "login": "ggicci",
                "created_at": "1999-12-31T23:59:59Z",
                "is_member": false,
                "age": 1
            }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_ne!(response.json()["input"]["created_at"], "1999-12-31T23:59:59Z");
}

#[tokio::test]
async fn test_create_user_malformed_created_at_is_bad_request() {
    let app = app();
    let response = send(
        &app,
        post_json("/users", json!({ "login": "ggicci", "created_at": 5 })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let users = send(&app, get("/health")).await.json();
    assert_eq!(users["users"], 0);
}

#[tokio::test]
async fn test_created_at_non_decreasing_and_order_kept() {
    let app = app();
    for i in 0..5 {
        let response = create_user(&app, &format!("user{}", i), i % 2 == 0, 20 + i).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let last = create_user(&app, "user5", false, 25).await.json();
    let users = last["users"].as_array().unwrap();
    assert_eq!(users.len(), 6);

    let logins: Vec<_> = users.iter().map(|u| u["login"].as_str().unwrap()).collect();
    assert_eq!(logins, vec!["user0", "user1", "user2", "user3", "user4", "user5"]);

    // RFC 3339 UTC timestamps from one clock compare correctly as instants
    let stamps: Vec<chrono::DateTime<chrono::Utc>> = users
        .iter()
        .map(|u| u["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_create_user_malformed_body_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "BINDING_ERROR");

    let users = send(&app, get("/health")).await.json();
    assert_eq!(users["users"], 0);
}

#[tokio::test]
async fn test_create_user_wrong_field_type_is_bad_request() {
    let app = app();
    let response = send(&app, post_json("/users", json!({ "login": "x", "age": "old" }))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_without_content_type_still_binds() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(r#"{"login":"plain","is_member":true,"age":3}"#))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["input"]["login"], "plain");
}

// =============================================================================
// List Users
// =============================================================================

#[tokio::test]
async fn test_list_users_filters_by_membership() {
    let app = app();
    create_user(&app, "a", true, 1).await;
    create_user(&app, "b", false, 2).await;
    create_user(&app, "c", true, 3).await;

    let members = send(&app, get("/users?is_member=true")).await;
    assert_eq!(members.status, StatusCode::OK);
    let body = members.json();
    let logins: Vec<_> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["login"].as_str().unwrap())
        .collect();
    assert_eq!(logins, vec!["a", "c"]);
    assert_eq!(body["input"]["is_member"], true);

    // Absent filter means non-members
    let others = send(&app, get("/users")).await.json();
    assert_eq!(others["users"].as_array().unwrap().len(), 1);
    assert_eq!(others["users"][0]["login"], "b");
    assert_eq!(others["input"]["is_member"], false);
}

#[tokio::test]
async fn test_list_users_no_match_is_empty_array() {
    let app = app();
    create_user(&app, "a", false, 1).await;

    let response = send(&app, get("/users?is_member=true")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["users"], json!([]));
}

#[tokio::test]
async fn test_list_users_accepts_vip_alias() {
    let app = app();
    create_user(&app, "vip", true, 1).await;

    let body = send(&app, get("/users?vip=1")).await.json();
    assert_eq!(body["users"][0]["login"], "vip");
}

#[tokio::test]
async fn test_list_users_repeated_is_member_uses_first() {
    let app = app();
    create_user(&app, "member", true, 1).await;
    create_user(&app, "guest", false, 1).await;

    let response = send(&app, get("/users?is_member=true&is_member=false")).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0]["login"], "member");
    assert_eq!(body["input"]["is_member"], true);
}

#[tokio::test]
async fn test_list_users_echoes_sort_params_without_sorting() {
    let app = app();
    create_user(&app, "old", true, 90).await;
    create_user(&app, "young", true, 10).await;

    let body = send(
        &app,
        get("/users?is_member=true&sort_by%5B%5D=age&sort_by%5B%5D=login&sort_desc%5B%5D=false&sort_desc%5B%5D=true"),
    )
    .await
    .json();

    assert_eq!(body["input"]["sort_by"], json!(["age", "login"]));
    assert_eq!(body["input"]["sort_desc"], json!([false, true]));
    // Insertion order, not age order
    assert_eq!(body["users"][0]["login"], "old");
    assert_eq!(body["users"][1]["login"], "young");
}

#[tokio::test]
async fn test_list_users_bad_boolean_is_bad_request() {
    let app = app();
    let response = send(&app, get("/users?is_member=maybe")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, get("/users?sort_desc%5B%5D=up")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeated_list_calls_are_identical() {
    let app = app();
    create_user(&app, "a", true, 1).await;
    create_user(&app, "b", true, 2).await;

    let first = send(&app, get("/users?is_member=true")).await;
    let second = send(&app, get("/users?is_member=true")).await;
    assert_eq!(first.body, second.body);
}

// =============================================================================
// Create Repository
// =============================================================================

#[tokio::test]
async fn test_create_repository_without_token_is_rejected() {
    let app = app();
    let response = send(
        &app,
        post_repo("/users/ggicci/repos", None, json!({ "name": "httpin", "language": "Go" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(repo_count(&app).await, 0);
}

#[tokio::test]
async fn test_create_repository_with_secret_appends_once() {
    let app = app();
    let response = send(
        &app,
        post_repo(
            "/users/ggicci/repos",
            Some("secret"),
            json!({ "name": "httpin", "language": "Go" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["input"]["token"], "secret");
    assert_eq!(body["input"]["new_repository"]["name"], "httpin");
    assert_eq!(body["input"]["new_repository"]["language"], "Go");
    assert_eq!(body["repos"], json!([{ "name": "httpin", "language": "Go" }]));
    assert_eq!(repo_count(&app).await, 1);
}

#[tokio::test]
async fn test_create_repository_wrong_token_is_forbidden() {
    let app = app();
    let response = send(
        &app,
        post_repo(
            "/users/ggicci/repos",
            Some("guess"),
            json!({ "name": "httpin", "language": "Go" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.text(), "Forbidden");
    assert_eq!(repo_count(&app).await, 0);
}

#[tokio::test]
async fn test_create_repository_token_from_query() {
    let app = app();
    let response = send(
        &app,
        post_repo(
            "/users/anyone/repos?access_token=secret",
            None,
            json!({ "name": "dotfiles", "language": "Shell" }),
        ),
    )
    .await;

    // Any login may create; the collection is global
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(repo_count(&app).await, 1);
}

#[tokio::test]
async fn test_create_repository_malformed_body_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/users/ggicci/repos")
        .header("Authorization", "secret")
        .body(Body::from("[1, 2"))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(repo_count(&app).await, 0);
}

// =============================================================================
// List Repositories Of User
// =============================================================================

#[tokio::test]
async fn test_list_repositories_ignores_lang() {
    let app = app();
    for (name, language) in [("httpin", "Go"), ("binder", "Rust")] {
        send(
            &app,
            post_repo(
                "/users/ggicci/repos",
                Some("secret"),
                json!({ "name": name, "language": language }),
            ),
        )
        .await;
    }

    let response = send(&app, get_with_token("/users/ggicci/repos?lang=Python", "secret")).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["repos"].as_array().unwrap().len(), 2);
    assert_eq!(body["input"]["lang"], "Python");
    assert_eq!(body["input"]["login"], "ggicci");
    assert_eq!(body["input"]["token"], "secret");
}

#[tokio::test]
async fn test_list_repositories_repeated_lang_uses_first() {
    let app = app();
    let response = send(&app, get_with_token("/users/ggicci/repos?lang=a&lang=b", "secret")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["input"]["lang"], "a");
}

#[tokio::test]
async fn test_list_repositories_repeated_token_uses_first() {
    let app = app();

    let allowed = send(&app, get("/users/ggicci/repos?token=secret&token=x")).await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert_eq!(allowed.json()["input"]["token"], "secret");

    let denied = send(&app, get("/users/ggicci/repos?token=x&token=secret")).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_repositories_unknown_login_is_not_found() {
    let app = app();

    for token in ["secret", "wrong"] {
        let response = send(&app, get_with_token("/users/someoneelse/repos", token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "token {}", token);
        assert!(response.body.is_empty());
    }
}

#[tokio::test]
async fn test_list_repositories_wrong_token_is_forbidden() {
    let app = app();
    let response = send(&app, get_with_token("/users/ggicci/repos", "wrong")).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_repositories_missing_token_is_bad_request() {
    let app = app();

    // Token binding happens before the login check
    for uri in ["/users/ggicci/repos", "/users/someoneelse/repos"] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_list_repositories_empty_collection() {
    let app = app();
    let response = send(&app, get("/users/ggicci/repos?token=secret")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["repos"], json!([]));
}

// =============================================================================
// Ambient Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_counts() {
    let app = app();
    create_user(&app, "a", true, 1).await;

    let body = send(&app, get("/health")).await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["users"], 1);
    assert_eq!(body["repos"], 0);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let response = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()["paths"]["/users/{login}/repos"].is_object());
}

#[tokio::test]
async fn test_custom_secret_from_config() {
    let app = create_router(AppState::from_config(
        Config::default().with_api_token("rotated"),
    ));

    let old = send(&app, get_with_token("/users/ggicci/repos", "secret")).await;
    assert_eq!(old.status, StatusCode::FORBIDDEN);

    let new = send(&app, get_with_token("/users/ggicci/repos", "rotated")).await;
    assert_eq!(new.status, StatusCode::OK);
}
