use crate::{
    abstract_trait::announcement::{
        AnnouncementCommandServiceTrait, DynAnnouncementCommandRepository,
    },
    domain::{
        requests::announcement::{
            CreateAnnouncementRequest, UpdateAnnouncementRequest, UpdateVisibilityRequest,
        },
        responses::{AnnouncementMutationResponse, AnnouncementResponse, ApiResponse},
    },
    errors::ServiceError,
    service::validate,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

pub struct AnnouncementCommandService {
    command: DynAnnouncementCommandRepository,
}

impl AnnouncementCommandService {
    pub fn new(command: DynAnnouncementCommandRepository) -> Self {
        Self { command }
    }
}

fn ensure_affected(id: i32, affected: u64) -> Result<(), ServiceError> {
    if affected == 0 {
        warn!("⚠️ Announcement {id} not found");
        return Err(ServiceError::NotFound(format!("Announcement {id} not found")));
    }
    Ok(())
}

fn mutation(
    message: &str,
    announcement_id: i32,
    affected_rows: u64,
) -> ApiResponse<AnnouncementMutationResponse> {
    ApiResponse {
        status: "success".to_string(),
        message: message.to_string(),
        data: AnnouncementMutationResponse {
            announcement_id,
            affected_rows,
        },
    }
}

#[async_trait]
impl AnnouncementCommandServiceTrait for AnnouncementCommandService {
    async fn create(
        &self,
        admin_id: i32,
        req: &CreateAnnouncementRequest,
    ) -> Result<ApiResponse<AnnouncementResponse>, ServiceError> {
        validate(req)?;

        info!("📝 Admin {admin_id} creating announcement '{}'", req.title.trim());

        let posted_date = Utc::now().naive_utc();
        let created = self
            .command
            .create(admin_id, req, posted_date)
            .await
            .map_err(|e| {
                error!("❌ Failed to create announcement: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("✅ Announcement {} created", created.announcement_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Announcement created successfully".to_string(),
            data: AnnouncementResponse::from(created),
        })
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateAnnouncementRequest,
    ) -> Result<ApiResponse<AnnouncementMutationResponse>, ServiceError> {
        validate(req)?;

        let affected = self.command.update(id, req).await?;
        ensure_affected(id, affected)?;

        info!("✅ Announcement {id} updated");

        Ok(mutation("Announcement updated successfully", id, affected))
    }

    async fn toggle_visibility(
        &self,
        id: i32,
        req: &UpdateVisibilityRequest,
    ) -> Result<ApiResponse<AnnouncementMutationResponse>, ServiceError> {
        let affected = self.command.update_visibility(id, req.is_visible).await?;
        ensure_affected(id, affected)?;

        info!("✅ Announcement {id} visibility set to {}", req.is_visible);

        Ok(mutation("Visibility updated successfully", id, affected))
    }

    async fn delete(
        &self,
        id: i32,
    ) -> Result<ApiResponse<AnnouncementMutationResponse>, ServiceError> {
        let affected = self.command.delete(id).await?;
        ensure_affected(id, affected)?;

        info!("🗑️ Announcement {id} deleted");

        Ok(mutation("Announcement deleted successfully", id, affected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;
    use std::sync::Arc;

    fn create_req(title: &str) -> CreateAnnouncementRequest {
        CreateAnnouncementRequest {
            title: title.to_string(),
            content: "Campus is closed on Friday.".to_string(),
            is_visible: true,
        }
    }

    #[tokio::test]
    async fn create_assigns_server_time_and_author() {
        let store = Arc::new(InMemoryStore::new());
        let admin = store.add_admin("admin", "hash", "Registrar");
        let svc = AnnouncementCommandService::new(store.clone());

        let before = Utc::now().naive_utc();
        let res = svc.create(admin, &create_req("Closure")).await.unwrap();

        assert_eq!(res.data.posted_by_name, "Registrar");
        assert!(res.data.is_visible);
        let stored = store.announcement(res.data.announcement_id).unwrap();
        assert!(stored.posted_date >= before);
    }

    #[tokio::test]
    async fn mutations_on_unknown_id_are_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let svc = AnnouncementCommandService::new(store.clone());

        let update = UpdateAnnouncementRequest {
            title: "New".to_string(),
            content: "Body".to_string(),
        };

        assert!(matches!(
            svc.update(404, &update).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            svc.toggle_visibility(404, &UpdateVisibilityRequest { is_visible: false })
                .await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(svc.delete(404).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn toggle_then_delete_existing_announcement() {
        let store = Arc::new(InMemoryStore::new());
        let admin = store.add_admin("admin", "hash", "Registrar");
        let svc = AnnouncementCommandService::new(store.clone());
        let id = svc
            .create(admin, &create_req("Closure"))
            .await
            .unwrap()
            .data
            .announcement_id;

        let toggled = svc
            .toggle_visibility(id, &UpdateVisibilityRequest { is_visible: false })
            .await
            .unwrap();
        assert_eq!(toggled.data.affected_rows, 1);
        assert!(!store.announcement(id).unwrap().is_visible);

        svc.delete(id).await.unwrap();
        assert_eq!(store.announcement_count(), 0);
    }

    #[tokio::test]
    async fn blank_title_never_reaches_the_store() {
        let store = Arc::new(InMemoryStore::new());
        let admin = store.add_admin("admin", "hash", "Registrar");
        let svc = AnnouncementCommandService::new(store.clone());

        let res = svc.create(admin, &create_req("   ")).await;

        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(store.announcement_count(), 0);
    }
}
