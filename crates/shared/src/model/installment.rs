use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InstallmentModel {
    pub invoice_id: i32,
    pub installment_no: i32,
    pub amount: i64,
    pub due_start_date: NaiveDate,
    pub due_end_date: NaiveDate,
    pub paid_date: Option<NaiveDateTime>,
}

impl InstallmentModel {
    pub fn is_paid(&self) -> bool {
        self.paid_date.is_some()
    }
}

/// Sum of `amount` over the paid installments.
pub fn paid_amount(installments: &[InstallmentModel]) -> i64 {
    installments
        .iter()
        .filter(|i| i.is_paid())
        .map(|i| i.amount)
        .sum()
}
