use crate::{
    abstract_trait::auth::{AdminQueryRepositoryTrait, StudentQueryRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::{admin::AdminModel, student::StudentModel},
};
use async_trait::async_trait;
use tracing::error;

pub struct StudentQueryRepository {
    db: ConnectionPool,
}

impl StudentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentQueryRepositoryTrait for StudentQueryRepository {
    async fn find_by_id(&self, student_id: &str) -> Result<Option<StudentModel>, RepositoryError> {
        sqlx::query_as::<_, StudentModel>(
            "SELECT student_id, password, name FROM students WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch student {student_id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}

pub struct AdminQueryRepository {
    db: ConnectionPool,
}

impl AdminQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminQueryRepositoryTrait for AdminQueryRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<AdminModel>, RepositoryError> {
        sqlx::query_as::<_, AdminModel>(
            "SELECT admin_id, user_id, password, name FROM admins WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch admin by user id {user_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminModel>, RepositoryError> {
        sqlx::query_as::<_, AdminModel>(
            "SELECT admin_id, user_id, password, name FROM admins WHERE admin_id = $1",
        )
        .bind(admin_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch admin {admin_id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
