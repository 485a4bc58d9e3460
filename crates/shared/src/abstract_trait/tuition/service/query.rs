use crate::{
    domain::{
        requests::tuition::InvoicePath,
        responses::{ApiResponse, InstallmentResponse, InvoicePaymentSummaryResponse, InvoiceResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTuitionQueryService = Arc<dyn TuitionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TuitionQueryServiceTrait {
    async fn get_invoices(
        &self,
        student_id: &str,
    ) -> Result<ApiResponse<Vec<InvoiceResponse>>, ServiceError>;
    async fn get_installments(
        &self,
        student_id: &str,
        req: &InvoicePath,
    ) -> Result<ApiResponse<Vec<InstallmentResponse>>, ServiceError>;
    async fn compute_paid_amount(&self, invoice_id: i32) -> Result<i64, ServiceError>;
    async fn get_payment_summary(
        &self,
        student_id: &str,
        req: &InvoicePath,
    ) -> Result<ApiResponse<InvoicePaymentSummaryResponse>, ServiceError>;
}
