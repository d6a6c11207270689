//! HTTP surface tests driven in process
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::StatusCode;
use integration_tests::{assert_status, read_json, TestApp, ALICE, BOB};
use serde_json::{json, Value};

#[tokio::test]
async fn health_endpoints_respond() {
    let app = TestApp::new().unwrap();

    let response = app.get("/health", None).await.unwrap();
    assert_status(&response, StatusCode::OK);

    let response = app.get("/health/ready", None).await.unwrap();
    assert_status(&response, StatusCode::OK);
}

#[tokio::test]
async fn react_flow_over_http() {
    let app = TestApp::new().unwrap();

    // Register Bob's post
    let response = app
        .put(
            "/api/v1/content/post/42",
            None,
            json!({ "owner_id": BOB.to_string() }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::NO_CONTENT);

    // Alice reacts with a heart
    let response = app
        .post(
            "/api/v1/content/post/42/reactions",
            Some(ALICE),
            json!({ "type": "heart" }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["counts"]["heart"], 1);
    assert_eq!(body["total"], 1);
    assert_eq!(body["user_reaction"], "heart");

    // Anonymous read sees the count but no own-reaction
    let response = app.get("/api/v1/content/post/42/reactions", None).await.unwrap();
    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["user_reaction"], Value::Null);

    // Who-reacted listing
    let response = app
        .get("/api/v1/content/post/42/reactions/users?type=heart", None)
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["user_id"], ALICE.to_string());
    assert_eq!(body[0]["type"], "heart");

    // Alice's progress shows the Supporter badge
    let response = app
        .get(&format!("/api/v1/users/{ALICE}/progress"), None)
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["counters"]["likes"], 1);
    assert!(body["badges"]
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b == "Supporter"));
}

#[tokio::test]
async fn mutating_without_identity_is_unauthorized() {
    let app = TestApp::new().unwrap();

    app.put(
        "/api/v1/content/post/1",
        None,
        json!({ "owner_id": BOB.to_string() }),
    )
    .await
    .unwrap();

    let response = app
        .post(
            "/api/v1/content/post/1/reactions",
            None,
            json!({ "type": "like" }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::UNAUTHORIZED);

    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn unknown_tags_are_rejected() {
    let app = TestApp::new().unwrap();

    // Unknown content kind in the path
    let response = app.get("/api/v1/content/podcast/1/reactions", None).await.unwrap();
    assert_status(&response, StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_CONTENT_TYPE");

    // Unknown reaction kind in the body
    app.put(
        "/api/v1/content/post/1",
        None,
        json!({ "owner_id": BOB.to_string() }),
    )
    .await
    .unwrap();
    let response = app
        .post(
            "/api/v1/content/post/1/reactions",
            Some(ALICE),
            json!({ "type": "dislike" }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_REACTION_TYPE");

    // Unknown action key
    let response = app
        .post(
            "/api/v1/engagement/actions",
            Some(ALICE),
            json!({ "action": "share" }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::BAD_REQUEST);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_ACTION");
}

#[tokio::test]
async fn reacting_to_unregistered_content_is_not_found() {
    let app = TestApp::new().unwrap();

    let response = app
        .post(
            "/api/v1/content/video/999/reactions",
            Some(ALICE),
            json!({ "type": "like" }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::NOT_FOUND);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_CONTENT");
}

#[tokio::test]
async fn content_deletion_cascades_reactions() {
    let app = TestApp::new().unwrap();

    app.put(
        "/api/v1/content/article/5",
        None,
        json!({ "owner_id": BOB.to_string() }),
    )
    .await
    .unwrap();
    app.post(
        "/api/v1/content/article/5/reactions",
        Some(ALICE),
        json!({ "type": "insightful" }),
    )
    .await
    .unwrap();

    let response = app
        .request(axum::http::Method::DELETE, "/api/v1/content/article/5", None, None)
        .await
        .unwrap();
    assert_status(&response, StatusCode::NO_CONTENT);

    let response = app.get("/api/v1/content/article/5/reactions", None).await.unwrap();
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn scored_actions_report_balances() {
    let app = TestApp::new().unwrap();

    let response = app
        .post(
            "/api/v1/engagement/actions",
            Some(ALICE),
            json!({ "action": "answer" }),
        )
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["current_points"], 15);
    assert_eq!(body["total_points"], 15);
    assert_eq!(body["new_badges"][0], "First Answer");
}

#[tokio::test]
async fn visits_return_streak_state() {
    let app = TestApp::new().unwrap();

    let response = app
        .post("/api/v1/users/@me/visits", Some(ALICE), json!({}))
        .await
        .unwrap();
    assert_status(&response, StatusCode::OK);
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["streak_count"], 1);
    assert_eq!(body["longest_streak"], 1);
    assert_eq!(body["next_milestone"], 3);

    // Second visit the same day is a no-op
    let response = app
        .post("/api/v1/users/@me/visits", Some(ALICE), json!({}))
        .await
        .unwrap();
    let body: Value = read_json(response).await.unwrap();
    assert_eq!(body["streak_count"], 1);
}
