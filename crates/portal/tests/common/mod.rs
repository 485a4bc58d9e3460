#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use portal::{di::Repositories, handler::AppRouter, state::AppState};
use serde_json::Value;
use shared::{
    abstract_trait::jwt::JwtServiceTrait,
    config::{Config, Hashing, JwtConfig},
    domain::principal::Role,
    testing::InMemoryStore,
};
use std::sync::Arc;
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret";

pub fn config() -> Config {
    Config::from_lookup(|key| {
        let value = match key {
            "DATABASE_URL" => "postgres://unused",
            "JWT_SECRET" => SECRET,
            "RUN_MIGRATIONS" => "false",
            "PORT" => "0",
            _ => return None,
        };
        Some(value.to_string())
    })
    .expect("test config")
}

pub fn repositories(store: &Arc<InMemoryStore>) -> Repositories {
    Repositories {
        students: store.clone(),
        admins: store.clone(),
        invoices: store.clone(),
        installments: store.clone(),
        installment_command: store.clone(),
        academic_records: store.clone(),
        announcement_query: store.clone(),
        announcement_command: store.clone(),
    }
}

pub fn app(store: &Arc<InMemoryStore>) -> Router {
    let state = AppState::from_repositories(
        &config(),
        repositories(store),
        Arc::new(Hashing::with_cost(4)),
    );
    AppRouter::build(state)
}

pub fn student_token(student_id: &str) -> String {
    JwtConfig::new(SECRET, 60)
        .generate_token(student_id, Role::Student, "Student")
        .expect("student token")
}

pub fn admin_token(admin_id: i32) -> String {
    JwtConfig::new(SECRET, 60)
        .generate_token(&admin_id.to_string(), Role::Admin, "Admin")
        .expect("admin token")
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(req).await.expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
