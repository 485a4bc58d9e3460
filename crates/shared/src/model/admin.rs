use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminModel {
    pub admin_id: i32,
    pub user_id: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
}
