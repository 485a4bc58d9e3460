mod common;

use axum::http::StatusCode;
use common::{app, request, send};
use serde_json::json;
use shared::{
    abstract_trait::hashing::HashingTrait, config::Hashing, testing::InMemoryStore,
};
use std::sync::Arc;

async fn seeded() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    let hashed = Hashing::with_cost(4).hash_password("pw1234").await.unwrap();
    store.add_student("20231234", &hashed, "Kim");
    store.add_admin("registrar", &hashed, "Lee");
    store
}

#[tokio::test]
async fn student_logs_in_and_reads_own_profile() {
    let store = seeded().await;
    let router = app(&store);

    let (status, login) = send(
        &router,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "student_id": "20231234", "password": "pw1234" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["data"]["token"].as_str().unwrap().to_string();

    let (status, me) = send(&router, request("GET", "/api/auth/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["student_id"], "20231234");
    assert!(me["data"].get("password").is_none());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let store = seeded().await;
    let router = app(&store);

    let (status, body) = send(
        &router,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "student_id": "20231234", "password": "wrong" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn missing_password_is_a_bad_request() {
    let store = seeded().await;
    let router = app(&store);

    let (status, _) = send(
        &router,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "student_id": "20231234" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_token_opens_admin_routes_but_not_student_ones() {
    let store = seeded().await;
    let router = app(&store);

    let (status, login) = send(
        &router,
        request(
            "POST",
            "/api/admin/login",
            None,
            Some(json!({ "user_id": "registrar", "password": "pw1234" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["data"]["token"].as_str().unwrap().to_string();

    let (status, me) = send(&router, request("GET", "/api/admin/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["user_id"], "registrar");

    let (status, _) = send(&router, request("GET", "/api/auth/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn expired_or_forged_tokens_are_unauthorized() {
    let store = seeded().await;
    let router = app(&store);

    let (status, _) = send(
        &router,
        request("GET", "/api/auth/me", Some("not-a-token"), None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn healthchecker_and_openapi_are_served() {
    let store = seeded().await;
    let router = app(&store);

    let (status, body) = send(&router, request("GET", "/api/healthchecker", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (status, doc) = send(
        &router,
        request("GET", "/api-docs/openapi.json", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/installments/{invoice_id}/{installment_no}/pay"].is_object());
}
