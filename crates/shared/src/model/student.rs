use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentModel {
    pub student_id: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
}
