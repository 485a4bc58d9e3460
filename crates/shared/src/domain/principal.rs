use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

/// JWT payload. `sub` is the student id for students and the numeric admin id
/// for admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// The caller identity every service entry point is handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    Student(String),
    Admin(i32),
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Principal::Anonymous => None,
            Principal::Student(_) => Some(Role::Student),
            Principal::Admin(_) => Some(Role::Admin),
        }
    }
}
