use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnnouncementModel {
    pub announcement_id: i32,
    pub title: String,
    pub content: String,
    pub posted_date: NaiveDateTime,
    pub is_visible: bool,
    pub posted_by: i32,
    pub posted_by_name: String,
}
