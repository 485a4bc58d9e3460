use super::not_blank;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct StudentLoginRequest {
    #[validate(
        length(min = 1, max = 20, message = "student_id is required"),
        custom(function = "not_blank", message = "student_id is required")
    )]
    pub student_id: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct AdminLoginRequest {
    #[validate(
        length(min = 1, max = 50, message = "user_id is required"),
        custom(function = "not_blank", message = "user_id is required")
    )]
    pub user_id: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
