use crate::{
    domain::{
        requests::academic::FindTermRequest,
        responses::{ApiResponse, GradeTermResponse, ScheduleResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAcademicQueryService = Arc<dyn AcademicQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait AcademicQueryServiceTrait {
    async fn get_schedule(
        &self,
        student_id: &str,
        req: &FindTermRequest,
    ) -> Result<ApiResponse<ScheduleResponse>, ServiceError>;
    async fn get_grades(
        &self,
        student_id: &str,
        req: &FindTermRequest,
    ) -> Result<ApiResponse<GradeTermResponse>, ServiceError>;
}
