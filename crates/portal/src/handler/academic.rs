use crate::{
    middleware::{jwt::StudentAuth, validate::SimpleValidatedQuery},
    state::AppState,
};
use axum::{Extension, Json, response::IntoResponse, routing::get};
use shared::{
    abstract_trait::academic::DynAcademicQueryService,
    domain::{
        requests::academic::FindTermRequest,
        responses::{ApiResponse, GradeTermResponse, ScheduleResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/schedule",
    tag = "Academic",
    security(("bearer_auth" = [])),
    params(FindTermRequest),
    responses(
        (status = 200, description = "Weekly schedule with a summary for completed terms", body = ApiResponse<ScheduleResponse>),
        (status = 400, description = "Invalid year or term", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_schedule(
    Extension(service): Extension<DynAcademicQueryService>,
    StudentAuth(student_id): StudentAuth,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindTermRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_schedule(&student_id, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/grades",
    tag = "Academic",
    security(("bearer_auth" = [])),
    params(FindTermRequest),
    responses(
        (status = 200, description = "Graded courses of the term", body = ApiResponse<GradeTermResponse>),
        (status = 400, description = "Invalid year or term", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_grades(
    Extension(service): Extension<DynAcademicQueryService>,
    StudentAuth(student_id): StudentAuth,
    SimpleValidatedQuery(params): SimpleValidatedQuery<FindTermRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_grades(&student_id, &params).await?;
    Ok(Json(response))
}

pub fn academic_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/schedule", get(get_schedule))
        .route("/api/grades", get(get_grades))
        .layer(Extension(app_state.di_container.academic_query.clone()))
}
