use crate::{
    middleware::{jwt::StudentAuth, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::auth::DynAuthService,
    domain::{
        requests::auth::StudentLoginRequest,
        responses::{ApiResponse, StudentResponse, StudentTokenResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/healthchecker",
    responses((status = 200, description = "Service is alive")),
    tag = "Health"
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Student portal API is running";

    Json(serde_json::json!({
        "status": "success",
        "message": MESSAGE
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = StudentLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<StudentTokenResponse>),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn student_login_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<StudentLoginRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.login_student(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current student", body = ApiResponse<StudentResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not a student token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn student_me_handler(
    Extension(service): Extension<DynAuthService>,
    StudentAuth(student_id): StudentAuth,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_student_me(&student_id).await?;
    Ok(Json(response))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/healthchecker", get(health_checker_handler))
        .route("/api/auth/login", post(student_login_handler))
        .route("/api/auth/me", get(student_me_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
