use crate::{
    middleware::{
        jwt::{AdminAuth, OptionalAuth},
        validate::{SimpleValidatedJson, SimpleValidatedQuery, ValidatedPath},
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::announcement::{DynAnnouncementCommandService, DynAnnouncementQueryService},
    domain::{
        requests::announcement::{
            AnnouncementIdPath, AnnouncementListQuery, CreateAnnouncementRequest,
            FindAllAnnouncements, UpdateAnnouncementRequest, UpdateVisibilityRequest,
        },
        responses::{
            AnnouncementMutationResponse, AnnouncementResponse, ApiResponse, ApiResponsePagination,
        },
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = "Announcement",
    params(AnnouncementListQuery),
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of announcements; admins also see hidden ones", body = ApiResponsePagination<Vec<AnnouncementResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_announcements(
    Extension(service): Extension<DynAnnouncementQueryService>,
    OptionalAuth(principal): OptionalAuth,
    SimpleValidatedQuery(params): SimpleValidatedQuery<AnnouncementListQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let req = FindAllAnnouncements::from(params);
    let response = service.list(&req, principal.is_admin()).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    tag = "Announcement",
    params(AnnouncementIdPath),
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "Announcement", body = ApiResponse<AnnouncementResponse>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Not found or hidden", body = ErrorResponse)
    )
)]
pub async fn get_announcement(
    Extension(service): Extension<DynAnnouncementQueryService>,
    OptionalAuth(principal): OptionalAuth,
    ValidatedPath(path): ValidatedPath<AnnouncementIdPath>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(path.id, principal.is_admin()).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = "Announcement",
    security(("bearer_auth" = [])),
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement created", body = ApiResponse<AnnouncementResponse>),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse)
    )
)]
pub async fn create_announcement(
    Extension(service): Extension<DynAnnouncementCommandService>,
    AdminAuth(admin_id): AdminAuth,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(admin_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/announcements/{id}",
    tag = "Announcement",
    security(("bearer_auth" = [])),
    params(AnnouncementIdPath),
    request_body = UpdateAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement updated", body = ApiResponse<AnnouncementMutationResponse>),
        (status = 400, description = "Invalid body or id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Announcement not found", body = ErrorResponse)
    )
)]
pub async fn update_announcement(
    Extension(service): Extension<DynAnnouncementCommandService>,
    AdminAuth(_admin): AdminAuth,
    ValidatedPath(path): ValidatedPath<AnnouncementIdPath>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateAnnouncementRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(path.id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/announcements/{id}/visibility",
    tag = "Announcement",
    security(("bearer_auth" = [])),
    params(AnnouncementIdPath),
    request_body = UpdateVisibilityRequest,
    responses(
        (status = 200, description = "Visibility updated", body = ApiResponse<AnnouncementMutationResponse>),
        (status = 400, description = "is_visible must be a boolean", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Announcement not found", body = ErrorResponse)
    )
)]
pub async fn update_visibility(
    Extension(service): Extension<DynAnnouncementCommandService>,
    AdminAuth(_admin): AdminAuth,
    ValidatedPath(path): ValidatedPath<AnnouncementIdPath>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateVisibilityRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.toggle_visibility(path.id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = "Announcement",
    security(("bearer_auth" = [])),
    params(AnnouncementIdPath),
    responses(
        (status = 200, description = "Announcement deleted", body = ApiResponse<AnnouncementMutationResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Announcement not found", body = ErrorResponse)
    )
)]
pub async fn delete_announcement(
    Extension(service): Extension<DynAnnouncementCommandService>,
    AdminAuth(_admin): AdminAuth,
    ValidatedPath(path): ValidatedPath<AnnouncementIdPath>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(path.id).await?;
    Ok(Json(response))
}

pub fn announcement_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route(
            "/api/announcements/{id}",
            get(get_announcement)
                .patch(update_announcement)
                .delete(delete_announcement),
        )
        .route("/api/announcements/{id}/visibility", patch(update_visibility))
        .layer(Extension(app_state.di_container.announcement_query.clone()))
        .layer(Extension(app_state.di_container.announcement_command.clone()))
}
