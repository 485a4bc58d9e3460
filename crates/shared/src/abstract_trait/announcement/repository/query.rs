use crate::{
    domain::requests::announcement::FindAllAnnouncements, errors::RepositoryError,
    model::announcement::AnnouncementModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAnnouncementQueryRepository = Arc<dyn AnnouncementQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AnnouncementQueryRepositoryTrait {
    /// One page plus the total number of rows matching the same filter.
    async fn find_all(
        &self,
        req: &FindAllAnnouncements,
        include_hidden: bool,
    ) -> Result<(Vec<AnnouncementModel>, i64), RepositoryError>;
    async fn find_by_id(
        &self,
        id: i32,
        include_hidden: bool,
    ) -> Result<Option<AnnouncementModel>, RepositoryError>;
}
