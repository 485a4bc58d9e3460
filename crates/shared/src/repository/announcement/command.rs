use crate::{
    abstract_trait::announcement::AnnouncementCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    errors::RepositoryError,
    model::announcement::AnnouncementModel,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::error;

pub struct AnnouncementCommandRepository {
    db: ConnectionPool,
}

impl AnnouncementCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl AnnouncementCommandRepositoryTrait for AnnouncementCommandRepository {
    async fn create(
        &self,
        posted_by: i32,
        req: &CreateAnnouncementRequest,
        posted_date: NaiveDateTime,
    ) -> Result<AnnouncementModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, AnnouncementModel>(
            r#"
            WITH inserted AS (
                INSERT INTO announcements (title, content, posted_date, is_visible, posted_by)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING announcement_id, title, content, posted_date, is_visible, posted_by
            )
            SELECT
                i.announcement_id,
                i.title,
                i.content,
                i.posted_date,
                i.is_visible,
                i.posted_by,
                m.name AS posted_by_name
            FROM inserted i
            JOIN admins m ON i.posted_by = m.admin_id
            "#,
        )
        .bind(req.title.trim())
        .bind(&req.content)
        .bind(posted_date)
        .bind(req.is_visible)
        .bind(posted_by)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during announcement creation: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateAnnouncementRequest,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE announcements
            SET title = $2, content = $3
            WHERE announcement_id = $1
            "#,
        )
        .bind(id)
        .bind(req.title.trim())
        .bind(&req.content)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update announcement {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }

    async fn update_visibility(&self, id: i32, is_visible: bool) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result =
            sqlx::query("UPDATE announcements SET is_visible = $2 WHERE announcement_id = $1")
                .bind(id)
                .bind(is_visible)
                .execute(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to update visibility of announcement {id}: {e:?}");
                    RepositoryError::from(e)
                })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM announcements WHERE announcement_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete announcement {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
