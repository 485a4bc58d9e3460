use crate::{
    domain::requests::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    errors::RepositoryError,
    model::announcement::AnnouncementModel,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynAnnouncementCommandRepository =
    Arc<dyn AnnouncementCommandRepositoryTrait + Send + Sync>;

/// Mutations return the number of affected rows; 0 means the id is unknown.
#[async_trait]
pub trait AnnouncementCommandRepositoryTrait {
    async fn create(
        &self,
        posted_by: i32,
        req: &CreateAnnouncementRequest,
        posted_date: NaiveDateTime,
    ) -> Result<AnnouncementModel, RepositoryError>;
    async fn update(&self, id: i32, req: &UpdateAnnouncementRequest)
    -> Result<u64, RepositoryError>;
    async fn update_visibility(&self, id: i32, is_visible: bool) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}
