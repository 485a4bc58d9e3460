use super::summarize;
use crate::{
    abstract_trait::academic::{AcademicQueryServiceTrait, DynAcademicRecordQueryRepository},
    config::{AcademicCalendar, AverageDivisor},
    domain::{
        requests::academic::FindTermRequest,
        responses::{
            ApiResponse, GradeResponse, GradeTermResponse, ScheduleEntryResponse, ScheduleResponse,
        },
    },
    errors::ServiceError,
    service::validate,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AcademicQueryService {
    records: DynAcademicRecordQueryRepository,
    calendar: AcademicCalendar,
    divisor: AverageDivisor,
}

impl AcademicQueryService {
    pub fn new(
        records: DynAcademicRecordQueryRepository,
        calendar: AcademicCalendar,
        divisor: AverageDivisor,
    ) -> Self {
        Self {
            records,
            calendar,
            divisor,
        }
    }
}

#[async_trait]
impl AcademicQueryServiceTrait for AcademicQueryService {
    async fn get_schedule(
        &self,
        student_id: &str,
        req: &FindTermRequest,
    ) -> Result<ApiResponse<ScheduleResponse>, ServiceError> {
        validate(req)?;

        let term = req.term.trim();
        let is_current_term = self.calendar.is_current(req.year, term);

        info!(
            "📅 Schedule for {student_id} in {}/{term} (current term: {is_current_term})",
            req.year
        );

        let rows = self
            .records
            .find_schedule(student_id, req.year, term)
            .await
            .map_err(|e| {
                error!("❌ Failed to load schedule for {student_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        // Grades of the running term are not final.
        let (rows, summary) = if is_current_term {
            let rows = rows.into_iter().map(|r| r.without_grades()).collect();
            (rows, None)
        } else {
            let summary = summarize(&rows, self.divisor);
            (rows, summary)
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Schedule retrieved successfully".to_string(),
            data: ScheduleResponse {
                year: req.year,
                term: term.to_string(),
                is_current_term,
                schedule: rows.into_iter().map(ScheduleEntryResponse::from).collect(),
                summary,
            },
        })
    }

    async fn get_grades(
        &self,
        student_id: &str,
        req: &FindTermRequest,
    ) -> Result<ApiResponse<GradeTermResponse>, ServiceError> {
        validate(req)?;

        let term = req.term.trim();
        let rows = self
            .records
            .find_grades(student_id, req.year, term)
            .await
            .map_err(|e| {
                error!("❌ Failed to load grades for {student_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("✅ Found {} graded courses for {student_id}", rows.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Grades retrieved successfully".to_string(),
            data: GradeTermResponse {
                year: req.year,
                term: term.to_string(),
                grades: rows.into_iter().map(GradeResponse::from).collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryStore, schedule_row};
    use std::sync::Arc;

    fn seeded() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        for (year, term) in [(2024, "FALL"), (2025, "SPRING")] {
            store.add_enrollment("S1", year, term, schedule_row(1, 3, Some(95.0), Some(12.0)));
            store.add_enrollment("S1", year, term, schedule_row(2, 3, Some(80.0), Some(9.0)));
            store.add_enrollment("S1", year, term, schedule_row(3, 4, None, None));
        }
        store.add_enrollment("S2", 2024, "FALL", schedule_row(9, 3, Some(50.0), Some(3.0)));
        store
    }

    fn service(store: &Arc<InMemoryStore>) -> AcademicQueryService {
        AcademicQueryService::new(
            store.clone(),
            AcademicCalendar::new(2025, "SPRING"),
            AverageDivisor::AllRows,
        )
    }

    fn term(year: i32, term: &str) -> FindTermRequest {
        FindTermRequest {
            year,
            term: term.to_string(),
        }
    }

    #[tokio::test]
    async fn current_term_hides_grades_and_summary() {
        let store = seeded();

        let res = service(&store)
            .get_schedule("S1", &term(2025, "spring"))
            .await
            .unwrap();

        assert!(res.data.is_current_term);
        assert!(res.data.summary.is_none());
        assert_eq!(res.data.schedule.len(), 3);
        assert!(res.data.schedule.iter().all(|r| r.score.is_none()));
    }

    #[tokio::test]
    async fn completed_term_carries_summary() {
        let store = seeded();

        let res = service(&store)
            .get_schedule("S1", &term(2024, "FALL"))
            .await
            .unwrap();

        let summary = res.data.summary.unwrap();
        assert_eq!(summary.total_credit, 10);
        assert_eq!(summary.gpa, Some(2.1));
        assert_eq!(summary.avg_score, 58.33);
    }

    #[tokio::test]
    async fn grades_only_include_scored_rows() {
        let store = seeded();

        let res = service(&store)
            .get_grades("S1", &term(2024, "FALL"))
            .await
            .unwrap();

        let ids: Vec<i32> = res.data.grades.iter().map(|g| g.offering_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn blank_term_is_a_validation_error() {
        let store = seeded();

        let res = service(&store).get_schedule("S1", &term(2024, "  ")).await;

        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }
}
