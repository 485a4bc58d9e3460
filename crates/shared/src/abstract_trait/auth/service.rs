use crate::{
    domain::{
        requests::auth::{AdminLoginRequest, StudentLoginRequest},
        responses::{
            AdminResponse, AdminTokenResponse, ApiResponse, StudentResponse, StudentTokenResponse,
        },
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login_student(
        &self,
        req: &StudentLoginRequest,
    ) -> Result<ApiResponse<StudentTokenResponse>, ServiceError>;
    async fn login_admin(
        &self,
        req: &AdminLoginRequest,
    ) -> Result<ApiResponse<AdminTokenResponse>, ServiceError>;
    async fn get_student_me(
        &self,
        student_id: &str,
    ) -> Result<ApiResponse<StudentResponse>, ServiceError>;
    async fn get_admin_me(&self, admin_id: i32) -> Result<ApiResponse<AdminResponse>, ServiceError>;
}
