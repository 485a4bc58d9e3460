use crate::{
    errors::RepositoryError,
    model::{installment::InstallmentModel, invoice::InvoiceModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInvoiceQueryRepository = Arc<dyn InvoiceQueryRepositoryTrait + Send + Sync>;
pub type DynInstallmentQueryRepository = Arc<dyn InstallmentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InvoiceQueryRepositoryTrait {
    /// Newest term first.
    async fn find_by_student(&self, student_id: &str)
    -> Result<Vec<InvoiceModel>, RepositoryError>;
    async fn find_by_id(&self, invoice_id: i32) -> Result<Option<InvoiceModel>, RepositoryError>;
}

#[async_trait]
pub trait InstallmentQueryRepositoryTrait {
    /// Ascending by installment number.
    async fn find_by_invoice(
        &self,
        invoice_id: i32,
    ) -> Result<Vec<InstallmentModel>, RepositoryError>;
    async fn find_one(
        &self,
        invoice_id: i32,
        installment_no: i32,
    ) -> Result<Option<InstallmentModel>, RepositoryError>;
}
