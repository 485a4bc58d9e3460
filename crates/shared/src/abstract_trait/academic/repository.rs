use crate::{
    errors::RepositoryError,
    model::academic::{GradeRowModel, ScheduleRowModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAcademicRecordQueryRepository =
    Arc<dyn AcademicRecordQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AcademicRecordQueryRepositoryTrait {
    /// One row per weekly slot of every offering the student is enrolled in.
    async fn find_schedule(
        &self,
        student_id: &str,
        year: i32,
        term: &str,
    ) -> Result<Vec<ScheduleRowModel>, RepositoryError>;
    /// Enrollments with a posted score, one row per offering.
    async fn find_grades(
        &self,
        student_id: &str,
        year: i32,
        term: &str,
    ) -> Result<Vec<GradeRowModel>, RepositoryError>;
}
