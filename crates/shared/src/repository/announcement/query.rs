use crate::{
    abstract_trait::announcement::AnnouncementQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::announcement::FindAllAnnouncements,
    errors::RepositoryError,
    model::announcement::AnnouncementModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AnnouncementQueryRepository {
    db: ConnectionPool,
}

impl AnnouncementQueryRepository {
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
impl AnnouncementQueryRepositoryTrait for AnnouncementQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllAnnouncements,
        include_hidden: bool,
    ) -> Result<(Vec<AnnouncementModel>, i64), RepositoryError> {
        info!(
            "🔍 Listing announcements page={} size={} search={:?} include_hidden={include_hidden}",
            req.page, req.size, req.search
        );

        let mut conn = self.get_conn().await?;
        let pattern = req.like_pattern();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM announcements a
            WHERE ($1 OR a.is_visible)
              AND ($2::TEXT IS NULL OR a.title ILIKE $2 OR a.content ILIKE $2)
            "#,
        )
        .bind(include_hidden)
        .bind(pattern.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to count announcements: {e:?}");
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, AnnouncementModel>(
            r#"
            SELECT
                a.announcement_id,
                a.title,
                a.content,
                a.posted_date,
                a.is_visible,
                a.posted_by,
                m.name AS posted_by_name
            FROM announcements a
            JOIN admins m ON a.posted_by = m.admin_id
            WHERE ($1 OR a.is_visible)
              AND ($2::TEXT IS NULL OR a.title ILIKE $2 OR a.content ILIKE $2)
            ORDER BY a.posted_date DESC, a.announcement_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(include_hidden)
        .bind(pattern.as_deref())
        .bind(i64::from(req.size))
        .bind(req.offset())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch announcements: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} of {total} announcements", rows.len());

        Ok((rows, total))
    }

    async fn find_by_id(
        &self,
        id: i32,
        include_hidden: bool,
    ) -> Result<Option<AnnouncementModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, AnnouncementModel>(
            r#"
            SELECT
                a.announcement_id,
                a.title,
                a.content,
                a.posted_date,
                a.is_visible,
                a.posted_by,
                m.name AS posted_by_name
            FROM announcements a
            JOIN admins m ON a.posted_by = m.admin_id
            WHERE a.announcement_id = $1
              AND ($2 OR a.is_visible)
            "#,
        )
        .bind(id)
        .bind(include_hidden)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch announcement {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }
}
