mod common;

use axum::http::StatusCode;
use common::{app, request, send, student_token};
use shared::testing::{InMemoryStore, schedule_row};
use std::sync::Arc;

fn seeded() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for (year, term) in [(2024, "FALL"), (2025, "SPRING")] {
        store.add_enrollment("S1", year, term, schedule_row(1, 3, Some(95.0), Some(12.0)));
        store.add_enrollment("S1", year, term, schedule_row(2, 3, Some(80.0), Some(9.0)));
        store.add_enrollment("S1", year, term, schedule_row(3, 4, Some(90.0), Some(16.0)));
    }
    store
}

#[tokio::test]
async fn completed_term_includes_the_summary() {
    let store = seeded();
    let router = app(&store);
    let token = student_token("S1");

    let (status, body) = send(
        &router,
        request("GET", "/api/schedule?year=2024&term=FALL", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["summary"]["total_credit"], 10);
    assert_eq!(body["data"]["summary"]["gpa"], 3.7);
    assert_eq!(body["data"]["schedule"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn current_term_has_null_summary_and_no_grades() {
    let store = seeded();
    let router = app(&store);
    let token = student_token("S1");

    let (status, body) = send(
        &router,
        request("GET", "/api/schedule?year=2025&term=SPRING", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["summary"].is_null());
    assert!(
        body["data"]["schedule"]
            .as_array()
            .unwrap()
            .iter()
            .all(|row| row["score"].is_null())
    );
}

#[tokio::test]
async fn missing_term_is_a_bad_request() {
    let store = seeded();
    let router = app(&store);
    let token = student_token("S1");

    let (status, body) = send(
        &router,
        request("GET", "/api/grades?year=2024", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn grades_list_scored_courses() {
    let store = seeded();
    let router = app(&store);
    let token = student_token("S1");

    let (status, body) = send(
        &router,
        request("GET", "/api/grades?year=2024&term=fall", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["grades"].as_array().unwrap().len(), 3);
}
