use crate::{
    domain::{
        requests::tuition::PayInstallmentRequest,
        responses::{ApiResponse, PayInstallmentResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTuitionCommandService = Arc<dyn TuitionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TuitionCommandServiceTrait {
    async fn pay_installment(
        &self,
        student_id: &str,
        req: &PayInstallmentRequest,
    ) -> Result<ApiResponse<PayInstallmentResponse>, ServiceError>;
}
