use crate::{
    errors::RepositoryError,
    model::{admin::AdminModel, student::StudentModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStudentQueryRepository = Arc<dyn StudentQueryRepositoryTrait + Send + Sync>;
pub type DynAdminQueryRepository = Arc<dyn AdminQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StudentQueryRepositoryTrait {
    async fn find_by_id(&self, student_id: &str) -> Result<Option<StudentModel>, RepositoryError>;
}

#[async_trait]
pub trait AdminQueryRepositoryTrait {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<AdminModel>, RepositoryError>;
    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminModel>, RepositoryError>;
}
