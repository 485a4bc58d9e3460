use crate::{
    domain::{
        requests::announcement::{
            CreateAnnouncementRequest, UpdateAnnouncementRequest, UpdateVisibilityRequest,
        },
        responses::{AnnouncementMutationResponse, AnnouncementResponse, ApiResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAnnouncementCommandService = Arc<dyn AnnouncementCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait AnnouncementCommandServiceTrait {
    async fn create(
        &self,
        admin_id: i32,
        req: &CreateAnnouncementRequest,
    ) -> Result<ApiResponse<AnnouncementResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateAnnouncementRequest,
    ) -> Result<ApiResponse<AnnouncementMutationResponse>, ServiceError>;
    async fn toggle_visibility(
        &self,
        id: i32,
        req: &UpdateVisibilityRequest,
    ) -> Result<ApiResponse<AnnouncementMutationResponse>, ServiceError>;
    async fn delete(
        &self,
        id: i32,
    ) -> Result<ApiResponse<AnnouncementMutationResponse>, ServiceError>;
}
