mod command;
mod query;

pub use self::command::TuitionCommandService;
pub use self::query::TuitionQueryService;

use crate::{
    abstract_trait::tuition::DynInvoiceQueryRepository, errors::ServiceError,
    model::invoice::InvoiceModel,
};
use tracing::warn;

/// Loads the invoice and checks it belongs to `student_id`.
///
/// An unknown invoice is `NotFound`; another student's invoice is `Forbidden`.
pub(crate) async fn ensure_owned_invoice(
    invoices: &DynInvoiceQueryRepository,
    student_id: &str,
    invoice_id: i32,
) -> Result<InvoiceModel, ServiceError> {
    let invoice = invoices
        .find_by_id(invoice_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Invoice {invoice_id} not found")))?;

    if !invoice.is_owned_by(student_id) {
        warn!("🚫 Student {student_id} tried to access invoice {invoice_id}");
        return Err(ServiceError::Forbidden(
            "You do not have access to this invoice".to_string(),
        ));
    }

    Ok(invoice)
}
