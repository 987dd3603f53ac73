mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_create_group_success() {
    let app = TestApp::spawn().await;
    let (user_id, access_token, _) = app.signed_in_user("a@x.com", "pw").await;

    let response = app
        .post("/api/groups")
        .bearer_auth(&access_token)
        .json(&json!({ "name": "climbers" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "climbers");
    assert_eq!(body["author_id"], user_id);
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_group_requires_access_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/groups")
        .json(&json!({ "name": "climbers" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .post("/api/groups")
        .bearer_auth("garbage")
        .json(&json!({ "name": "climbers" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_create_group_name_bounds() {
    let app = TestApp::spawn().await;
    let (_, access_token, _) = app.signed_in_user("a@x.com", "pw").await;

    for name in [String::new(), "x".repeat(101)] {
        let response = app
            .post("/api/groups")
            .bearer_auth(&access_token)
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    let response = app
        .post("/api/groups")
        .bearer_auth(&access_token)
        .json(&json!({ "name": "x".repeat(100) }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
}
