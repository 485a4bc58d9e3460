use crate::model::{admin::AdminModel, student::StudentModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct StudentResponse {
    pub student_id: String,
    pub name: String,
}

impl From<StudentModel> for StudentResponse {
    fn from(value: StudentModel) -> Self {
        StudentResponse {
            student_id: value.student_id,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminResponse {
    pub admin_id: i32,
    pub user_id: String,
    pub name: String,
}

impl From<AdminModel> for AdminResponse {
    fn from(value: AdminModel) -> Self {
        AdminResponse {
            admin_id: value.admin_id,
            user_id: value.user_id,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct StudentTokenResponse {
    pub token: String,
    pub student: StudentResponse,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AdminTokenResponse {
    pub token: String,
    pub admin: AdminResponse,
}
