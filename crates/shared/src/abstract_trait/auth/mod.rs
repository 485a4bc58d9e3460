mod repository;
mod service;

pub use self::repository::{
    AdminQueryRepositoryTrait, DynAdminQueryRepository, DynStudentQueryRepository,
    StudentQueryRepositoryTrait,
};
pub use self::service::{AuthServiceTrait, DynAuthService};
