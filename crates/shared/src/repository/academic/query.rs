use crate::{
    abstract_trait::academic::AcademicRecordQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::academic::{GradeRowModel, ScheduleRowModel},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AcademicRecordQueryRepository {
    db: ConnectionPool,
}

impl AcademicRecordQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl AcademicRecordQueryRepositoryTrait for AcademicRecordQueryRepository {
    async fn find_schedule(
        &self,
        student_id: &str,
        year: i32,
        term: &str,
    ) -> Result<Vec<ScheduleRowModel>, RepositoryError> {
        info!("🔍 Fetching schedule for {student_id} in {year}/{term}");

        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, ScheduleRowModel>(
            r#"
            SELECT
                o.offering_id,
                c.course_name,
                c.course_code,
                c.credit,
                p.name AS professor,
                s.day_of_week,
                s.start_time,
                s.end_time,
                s.room,
                e.score,
                e.letter_grade,
                e.grade_point,
                e.pass_fail
            FROM enrollments e
            JOIN course_offerings o ON e.offering_id = o.offering_id
            JOIN courses c ON o.course_id = c.course_id
            JOIN class_schedules s ON s.offering_id = o.offering_id
            JOIN professors p ON p.professor_id = o.professor_id
            WHERE e.student_id = $1
              AND o.year = $2
              AND UPPER(o.term) = UPPER($3)
            ORDER BY o.offering_id, s.schedule_id
            "#,
        )
        .bind(student_id)
        .bind(year)
        .bind(term)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch schedule for {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_grades(
        &self,
        student_id: &str,
        year: i32,
        term: &str,
    ) -> Result<Vec<GradeRowModel>, RepositoryError> {
        info!("🔍 Fetching grades for {student_id} in {year}/{term}");

        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, GradeRowModel>(
            r#"
            SELECT
                o.offering_id,
                c.course_name,
                c.course_code,
                c.credit,
                e.score,
                e.letter_grade,
                e.grade_point,
                e.pass_fail
            FROM enrollments e
            JOIN course_offerings o ON e.offering_id = o.offering_id
            JOIN courses c ON o.course_id = c.course_id
            WHERE e.student_id = $1
              AND o.year = $2
              AND UPPER(o.term) = UPPER($3)
              AND e.score IS NOT NULL
            ORDER BY o.offering_id
            "#,
        )
        .bind(student_id)
        .bind(year)
        .bind(term)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch grades for {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
