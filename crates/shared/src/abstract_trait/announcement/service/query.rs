use crate::{
    domain::{
        requests::announcement::FindAllAnnouncements,
        responses::{AnnouncementResponse, ApiResponse, ApiResponsePagination},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAnnouncementQueryService = Arc<dyn AnnouncementQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait AnnouncementQueryServiceTrait {
    async fn list(
        &self,
        req: &FindAllAnnouncements,
        include_hidden: bool,
    ) -> Result<ApiResponsePagination<Vec<AnnouncementResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        id: i32,
        include_hidden: bool,
    ) -> Result<ApiResponse<AnnouncementResponse>, ServiceError>;
}
