mod common;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate};
use common::{admin_token, app, request, send, student_token};
use serde_json::json;
use shared::testing::{InMemoryStore, announcement};
use std::sync::Arc;

/// 23 visible and 2 hidden announcements. Returns the store and the admin id.
fn seeded() -> (Arc<InMemoryStore>, i32) {
    let store = Arc::new(InMemoryStore::new());
    let admin = store.add_admin("registrar", "unused", "Registrar");
    let start = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    for id in 1..=25 {
        store.add_announcement(announcement(
            id,
            &format!("Notice {id}"),
            if id == 7 { "Library hours" } else { "General" },
            start + Duration::hours(i64::from(id)),
            id <= 23,
            admin,
        ));
    }
    (store, admin)
}

#[tokio::test]
async fn public_listing_uses_defaults_and_hides_invisible_rows() {
    let (store, _) = seeded();
    let router = app(&store);

    let (status, body) = send(
        &router,
        request("GET", "/api/announcements?page=abc&size=", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["size"], 10);
    assert_eq!(body["totalCount"], 23);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let (store, _) = seeded();
    let router = app(&store);

    let (status, body) = send(
        &router,
        request("GET", "/api/announcements?page=9&size=10", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn admin_listing_includes_hidden_rows() {
    let (store, admin) = seeded();
    let router = app(&store);
    let token = admin_token(admin);

    let (_, body) = send(
        &router,
        request("GET", "/api/announcements", Some(&token), None),
    )
    .await;

    assert_eq!(body["totalCount"], 25);
    assert_eq!(body["data"][0]["announcement_id"], 25);
}

#[tokio::test]
async fn bad_token_on_listing_is_treated_as_anonymous() {
    let (store, _) = seeded();
    let router = app(&store);

    let (status, body) = send(
        &router,
        request("GET", "/api/announcements", Some("garbage"), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 23);
}

#[tokio::test]
async fn search_matches_content() {
    let (store, _) = seeded();
    let router = app(&store);

    let (_, body) = send(
        &router,
        request("GET", "/api/announcements?q=%20library%20", None, None),
    )
    .await;

    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["data"][0]["announcement_id"], 7);
}

#[tokio::test]
async fn mutations_require_an_admin() {
    let (store, _) = seeded();
    let router = app(&store);
    let body = json!({ "title": "Hi", "content": "There" });

    let (status, _) = send(
        &router,
        request("POST", "/api/announcements", None, Some(body.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = student_token("S1");
    let (status, _) = send(
        &router,
        request("POST", "/api/announcements", Some(&token), Some(body)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_creates_and_manages_an_announcement() {
    let (store, admin) = seeded();
    let router = app(&store);
    let token = admin_token(admin);

    let (status, created) = send(
        &router,
        request(
            "POST",
            "/api/announcements",
            Some(&token),
            Some(json!({ "title": "Exam week", "content": "Good luck" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["is_visible"], true);
    assert_eq!(created["data"]["posted_by_name"], "Registrar");
    let id = created["data"]["announcement_id"].as_i64().unwrap();

    let (status, _) = send(
        &router,
        request(
            "PATCH",
            &format!("/api/announcements/{id}"),
            Some(&token),
            Some(json!({ "title": "Exam week (updated)", "content": "Good luck" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        request(
            "PATCH",
            &format!("/api/announcements/{id}/visibility"),
            Some(&token),
            Some(json!({ "is_visible": false })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &router,
        request("GET", &format!("/api/announcements/{id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        request("DELETE", &format!("/api/announcements/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.announcement_count(), 25);
}

#[tokio::test]
async fn non_boolean_visibility_is_rejected() {
    let (store, admin) = seeded();
    let router = app(&store);
    let token = admin_token(admin);

    let (status, body) = send(
        &router,
        request(
            "PATCH",
            "/api/announcements/1/visibility",
            Some(&token),
            Some(json!({ "is_visible": "yes" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert!(store.announcement(1).unwrap().is_visible);
}

#[tokio::test]
async fn mutating_unknown_announcement_is_not_found() {
    let (store, admin) = seeded();
    let router = app(&store);
    let token = admin_token(admin);

    for (method, uri, body) in [
        (
            "PATCH",
            "/api/announcements/999/visibility",
            Some(json!({ "is_visible": true })),
        ),
        (
            "PATCH",
            "/api/announcements/999",
            Some(json!({ "title": "x", "content": "y" })),
        ),
        ("DELETE", "/api/announcements/999", None),
    ] {
        let (status, _) = send(&router, request(method, uri, Some(&token), body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
    }
}
