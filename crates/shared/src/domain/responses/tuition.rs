use crate::model::{installment::InstallmentModel, invoice::InvoiceModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InvoiceResponse {
    pub invoice_id: i32,
    pub year: i32,
    pub term: String,
    pub tuition_fee: i64,
    pub scholarship_amount: i64,
    pub payable_amount: i64,
    pub pay_start_date: String,
    pub pay_end_date: String,
}

impl From<InvoiceModel> for InvoiceResponse {
    fn from(value: InvoiceModel) -> Self {
        InvoiceResponse {
            invoice_id: value.invoice_id,
            year: value.year,
            term: value.term,
            tuition_fee: value.tuition_fee,
            scholarship_amount: value.scholarship_amount,
            payable_amount: value.payable_amount,
            pay_start_date: value.pay_start_date.to_string(),
            pay_end_date: value.pay_end_date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InstallmentResponse {
    pub installment_no: i32,
    pub amount: i64,
    pub due_start_date: String,
    pub due_end_date: String,
    pub paid_date: Option<String>,
    pub is_paid: bool,
}

impl From<InstallmentModel> for InstallmentResponse {
    fn from(value: InstallmentModel) -> Self {
        InstallmentResponse {
            installment_no: value.installment_no,
            amount: value.amount,
            due_start_date: value.due_start_date.to_string(),
            due_end_date: value.due_end_date.to_string(),
            is_paid: value.paid_date.is_some(),
            paid_date: value.paid_date.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PayInstallmentResponse {
    pub invoice_id: i32,
    pub installment_no: i32,
    pub paid_date: Option<String>,
    /// Rows changed by this call: 1 when it paid the installment, 0 when it
    /// was already paid.
    pub affected_rows: u64,
    pub already_paid: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InvoicePaymentSummaryResponse {
    pub invoice_id: i32,
    pub payable_amount: i64,
    pub paid_amount: i64,
    pub outstanding_amount: i64,
    pub installments_total: usize,
    pub installments_paid: usize,
}
