use crate::{
    middleware::{jwt::AdminAuth, validate::SimpleValidatedJson},
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
        requests::auth::AdminLoginRequest,
        responses::{AdminResponse, AdminTokenResponse, ApiResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AdminTokenResponse>),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn admin_login_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AdminLoginRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.login_admin(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Current admin", body = ApiResponse<AdminResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not an admin token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn admin_me_handler(
    Extension(service): Extension<DynAuthService>,
    AdminAuth(admin_id): AdminAuth,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_admin_me(admin_id).await?;
    Ok(Json(response))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/login", post(admin_login_handler))
        .route("/api/admin/me", get(admin_me_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
