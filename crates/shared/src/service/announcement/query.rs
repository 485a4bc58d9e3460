use crate::{
    abstract_trait::announcement::{AnnouncementQueryServiceTrait, DynAnnouncementQueryRepository},
    domain::{
        requests::announcement::FindAllAnnouncements,
        responses::{AnnouncementResponse, ApiResponse, ApiResponsePagination, Pagination},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AnnouncementQueryService {
    query: DynAnnouncementQueryRepository,
}

impl AnnouncementQueryService {
    pub fn new(query: DynAnnouncementQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl AnnouncementQueryServiceTrait for AnnouncementQueryService {
    async fn list(
        &self,
        req: &FindAllAnnouncements,
        include_hidden: bool,
    ) -> Result<ApiResponsePagination<Vec<AnnouncementResponse>>, ServiceError> {
        info!(
            "🔍 Searching announcements | Page: {}, Size: {}, Search: {:?}",
            req.page,
            req.size,
            req.search.as_deref().unwrap_or("None")
        );

        let (rows, total_count) =
            self.query
                .find_all(req, include_hidden)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch announcements: {e:?}");
                    ServiceError::Repo(e)
                })?;

        info!("✅ Found {} announcements (total {total_count})", rows.len());

        Ok(ApiResponsePagination {
            data: rows.into_iter().map(AnnouncementResponse::from).collect(),
            pagination: Pagination::new(req.page, req.size, total_count),
        })
    }

    async fn find_by_id(
        &self,
        id: i32,
        include_hidden: bool,
    ) -> Result<ApiResponse<AnnouncementResponse>, ServiceError> {
        if id < 1 {
            return Err(ServiceError::validation("id must be a positive integer"));
        }

        let announcement = self
            .query
            .find_by_id(id, include_hidden)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Announcement {id} not found")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Announcement retrieved successfully".to_string(),
            data: AnnouncementResponse::from(announcement),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryStore, announcement};
    use chrono::{Duration, NaiveDate};
    use std::sync::Arc;

    /// 23 visible announcements plus 4 hidden ones, one posted per day.
    fn seeded() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        let admin = store.add_admin("admin", "hash", "Registrar");
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        for id in 1..=27 {
            let hidden = id > 23;
            let title = if id % 5 == 0 {
                format!("Tuition notice {id}")
            } else {
                format!("Notice {id}")
            };
            store.add_announcement(announcement(
                id,
                &title,
                "body",
                start + Duration::days(i64::from(id)),
                !hidden,
                admin,
            ));
        }
        store
    }

    fn service(store: &Arc<InMemoryStore>) -> AnnouncementQueryService {
        AnnouncementQueryService::new(store.clone())
    }

    #[tokio::test]
    async fn pages_follow_the_visible_total() {
        let store = seeded();
        let svc = service(&store);

        let first = svc
            .list(&FindAllAnnouncements::new(1, 10, None), false)
            .await
            .unwrap();
        assert_eq!(first.pagination.total_count, 23);
        assert_eq!(first.pagination.total_pages, 3);
        assert_eq!(first.data.len(), 10);
        assert_eq!(first.data[0].announcement_id, 23);

        let third = svc
            .list(&FindAllAnnouncements::new(3, 10, None), false)
            .await
            .unwrap();
        assert_eq!(third.data.len(), 3);

        let beyond = svc
            .list(&FindAllAnnouncements::new(4, 10, None), false)
            .await
            .unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn hidden_rows_never_leak_to_viewers() {
        let store = seeded();
        let svc = service(&store);

        let mut page = 1;
        loop {
            let res = svc
                .list(&FindAllAnnouncements::new(page, 7, None), false)
                .await
                .unwrap();
            if res.data.is_empty() {
                break;
            }
            assert!(res.data.iter().all(|a| a.is_visible));
            page += 1;
        }

        let admin = svc
            .list(&FindAllAnnouncements::new(1, 10, None), true)
            .await
            .unwrap();
        assert_eq!(admin.pagination.total_count, 27);
        assert_eq!(admin.data[0].announcement_id, 27);
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let store = seeded();

        let res = service(&store)
            .list(&FindAllAnnouncements::new(1, 10, Some("TUITION")), false)
            .await
            .unwrap();

        let ids: Vec<i32> = res.data.iter().map(|a| a.announcement_id).collect();
        assert_eq!(ids, vec![20, 15, 10, 5]);
        assert_eq!(res.pagination.total_count, 4);
    }

    #[tokio::test]
    async fn hidden_announcement_is_not_found_for_viewers() {
        let store = seeded();
        let svc = service(&store);

        assert!(matches!(
            svc.find_by_id(25, false).await,
            Err(ServiceError::NotFound(_))
        ));
        assert_eq!(
            svc.find_by_id(25, true).await.unwrap().data.posted_by_name,
            "Registrar"
        );
    }
}
