use crate::model::announcement::AnnouncementModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AnnouncementResponse {
    pub announcement_id: i32,
    pub title: String,
    pub content: String,
    pub posted_date: String,
    pub is_visible: bool,
    pub posted_by: i32,
    pub posted_by_name: String,
}

impl From<AnnouncementModel> for AnnouncementResponse {
    fn from(value: AnnouncementModel) -> Self {
        AnnouncementResponse {
            announcement_id: value.announcement_id,
            title: value.title,
            content: value.content,
            posted_date: value.posted_date.to_string(),
            is_visible: value.is_visible,
            posted_by: value.posted_by,
            posted_by_name: value.posted_by_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AnnouncementMutationResponse {
    pub announcement_id: i32,
    pub affected_rows: u64,
}
