mod repository;
mod service;

pub use self::repository::{AcademicRecordQueryRepositoryTrait, DynAcademicRecordQueryRepository};
pub use self::service::{AcademicQueryServiceTrait, DynAcademicQueryService};
