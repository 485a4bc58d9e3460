use super::ensure_owned_invoice;
use crate::{
    abstract_trait::tuition::{
        DynInstallmentQueryRepository, DynInvoiceQueryRepository, TuitionQueryServiceTrait,
    },
    domain::{
        requests::tuition::InvoicePath,
        responses::{
            ApiResponse, InstallmentResponse, InvoicePaymentSummaryResponse, InvoiceResponse,
        },
    },
    errors::ServiceError,
    model::installment::paid_amount,
    service::validate,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TuitionQueryService {
    invoices: DynInvoiceQueryRepository,
    installments: DynInstallmentQueryRepository,
}

impl TuitionQueryService {
    pub fn new(
        invoices: DynInvoiceQueryRepository,
        installments: DynInstallmentQueryRepository,
    ) -> Self {
        Self {
            invoices,
            installments,
        }
    }
}

#[async_trait]
impl TuitionQueryServiceTrait for TuitionQueryService {
    async fn get_invoices(
        &self,
        student_id: &str,
    ) -> Result<ApiResponse<Vec<InvoiceResponse>>, ServiceError> {
        info!("🔍 Listing invoices for student {student_id}");

        let invoices = self
            .invoices
            .find_by_student(student_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to list invoices for {student_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Invoices retrieved successfully".to_string(),
            data: invoices.into_iter().map(InvoiceResponse::from).collect(),
        })
    }

    async fn get_installments(
        &self,
        student_id: &str,
        req: &InvoicePath,
    ) -> Result<ApiResponse<Vec<InstallmentResponse>>, ServiceError> {
        validate(req)?;

        let invoice = ensure_owned_invoice(&self.invoices, student_id, req.invoice_id).await?;

        let installments = self
            .installments
            .find_by_invoice(invoice.invoice_id)
            .await?;

        info!(
            "✅ Found {} installments for invoice {}",
            installments.len(),
            invoice.invoice_id
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Installments retrieved successfully".to_string(),
            data: installments
                .into_iter()
                .map(InstallmentResponse::from)
                .collect(),
        })
    }

    async fn compute_paid_amount(&self, invoice_id: i32) -> Result<i64, ServiceError> {
        let installments = self.installments.find_by_invoice(invoice_id).await?;
        Ok(paid_amount(&installments))
    }

    async fn get_payment_summary(
        &self,
        student_id: &str,
        req: &InvoicePath,
    ) -> Result<ApiResponse<InvoicePaymentSummaryResponse>, ServiceError> {
        validate(req)?;

        let invoice = ensure_owned_invoice(&self.invoices, student_id, req.invoice_id).await?;
        let installments = self
            .installments
            .find_by_invoice(invoice.invoice_id)
            .await?;

        let paid = paid_amount(&installments);
        let installments_paid = installments.iter().filter(|i| i.is_paid()).count();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Payment summary retrieved successfully".to_string(),
            data: InvoicePaymentSummaryResponse {
                invoice_id: invoice.invoice_id,
                payable_amount: invoice.payable_amount,
                paid_amount: paid,
                outstanding_amount: (invoice.payable_amount - paid).max(0),
                installments_total: installments.len(),
                installments_paid,
            },
        })
    }
}
