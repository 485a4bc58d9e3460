use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams, Clone, Copy)]
#[into_params(parameter_in = Path)]
pub struct InvoicePath {
    #[validate(range(min = 1, message = "invoice_id must be a positive integer"))]
    pub invoice_id: i32,
}

#[derive(Debug, Deserialize, Validate, IntoParams, Clone, Copy)]
#[into_params(parameter_in = Path)]
pub struct PayInstallmentRequest {
    #[validate(range(min = 1, message = "invoice_id must be a positive integer"))]
    pub invoice_id: i32,

    #[validate(range(min = 1, message = "installment_no must be a positive integer"))]
    pub installment_no: i32,
}
