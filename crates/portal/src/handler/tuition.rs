use crate::{
    middleware::{jwt::StudentAuth, validate::ValidatedPath},
    state::AppState,
};
use axum::{
    Extension, Json,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::tuition::{DynTuitionCommandService, DynTuitionQueryService},
    domain::{
        requests::tuition::{InvoicePath, PayInstallmentRequest},
        responses::{
            ApiResponse, InstallmentResponse, InvoicePaymentSummaryResponse, InvoiceResponse,
            PayInstallmentResponse,
        },
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/tuition-invoices",
    tag = "Tuition",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Invoices of the caller, newest term first", body = ApiResponse<Vec<InvoiceResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_invoices(
    Extension(service): Extension<DynTuitionQueryService>,
    StudentAuth(student_id): StudentAuth,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_invoices(&student_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/tuition-invoices/{invoice_id}/installments",
    tag = "Tuition",
    security(("bearer_auth" = [])),
    params(InvoicePath),
    responses(
        (status = 200, description = "Installments in order", body = ApiResponse<Vec<InstallmentResponse>>),
        (status = 400, description = "Invalid invoice id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Invoice belongs to someone else", body = ErrorResponse),
        (status = 404, description = "Invoice not found", body = ErrorResponse)
    )
)]
pub async fn get_installments(
    Extension(service): Extension<DynTuitionQueryService>,
    StudentAuth(student_id): StudentAuth,
    ValidatedPath(path): ValidatedPath<InvoicePath>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_installments(&student_id, &path).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/tuition-invoices/{invoice_id}/summary",
    tag = "Tuition",
    security(("bearer_auth" = [])),
    params(InvoicePath),
    responses(
        (status = 200, description = "Paid and outstanding amounts", body = ApiResponse<InvoicePaymentSummaryResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Invoice belongs to someone else", body = ErrorResponse),
        (status = 404, description = "Invoice not found", body = ErrorResponse)
    )
)]
pub async fn get_payment_summary(
    Extension(service): Extension<DynTuitionQueryService>,
    StudentAuth(student_id): StudentAuth,
    ValidatedPath(path): ValidatedPath<InvoicePath>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_payment_summary(&student_id, &path).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/installments/{invoice_id}/{installment_no}/pay",
    tag = "Tuition",
    security(("bearer_auth" = [])),
    params(PayInstallmentRequest),
    responses(
        (status = 200, description = "Installment paid, or already paid", body = ApiResponse<PayInstallmentResponse>),
        (status = 400, description = "Invalid path parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Invoice belongs to someone else", body = ErrorResponse),
        (status = 404, description = "Installment not found", body = ErrorResponse)
    )
)]
pub async fn pay_installment(
    Extension(service): Extension<DynTuitionCommandService>,
    StudentAuth(student_id): StudentAuth,
    ValidatedPath(path): ValidatedPath<PayInstallmentRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.pay_installment(&student_id, &path).await?;
    Ok(Json(response))
}

pub fn tuition_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/tuition-invoices", get(get_invoices))
        .route(
            "/api/tuition-invoices/{invoice_id}/installments",
            get(get_installments),
        )
        .route(
            "/api/tuition-invoices/{invoice_id}/summary",
            get(get_payment_summary),
        )
        .route(
            "/api/installments/{invoice_id}/{installment_no}/pay",
            patch(pay_installment),
        )
        .layer(Extension(app_state.di_container.tuition_query.clone()))
        .layer(Extension(app_state.di_container.tuition_command.clone()))
}
