use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceModel {
    pub invoice_id: i32,
    pub student_id: String,
    pub year: i32,
    pub term: String,
    pub tuition_fee: i64,
    pub scholarship_amount: i64,
    pub payable_amount: i64,
    pub pay_start_date: NaiveDate,
    pub pay_end_date: NaiveDate,
}

impl InvoiceModel {
    pub fn is_owned_by(&self, student_id: &str) -> bool {
        self.student_id == student_id
    }
}
