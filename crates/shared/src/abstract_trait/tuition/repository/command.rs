use crate::errors::RepositoryError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynInstallmentCommandRepository =
    Arc<dyn InstallmentCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InstallmentCommandRepositoryTrait {
    /// Stamps `paid_date` only while it is still null. Returns the number of
    /// rows changed, so an already-paid or missing installment yields 0.
    async fn mark_paid(&self, invoice_id: i32, installment_no: i32)
    -> Result<u64, RepositoryError>;
}
