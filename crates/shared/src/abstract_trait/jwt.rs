use crate::{
    domain::principal::{Claims, Role},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: std::fmt::Debug {
    fn generate_token(&self, subject: &str, role: Role, name: &str) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError>;
}
