use crate::model::academic::{GradeRowModel, ScheduleRowModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate over one completed term. `gpa` is `None` when the term carries
/// no credits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AcademicSummary {
    pub avg_score: f64,
    pub total_credit: i32,
    pub gpa: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ScheduleEntryResponse {
    pub offering_id: i32,
    pub course_name: String,
    pub course_code: String,
    pub credit: i32,
    pub professor: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub score: Option<f64>,
    pub letter_grade: Option<String>,
    pub grade_point: Option<f64>,
    pub pass_fail: Option<String>,
}

impl From<ScheduleRowModel> for ScheduleEntryResponse {
    fn from(value: ScheduleRowModel) -> Self {
        ScheduleEntryResponse {
            offering_id: value.offering_id,
            course_name: value.course_name,
            course_code: value.course_code,
            credit: value.credit,
            professor: value.professor,
            day_of_week: value.day_of_week,
            start_time: value.start_time.format("%H:%M").to_string(),
            end_time: value.end_time.format("%H:%M").to_string(),
            room: value.room,
            score: value.score,
            letter_grade: value.letter_grade,
            grade_point: value.grade_point,
            pass_fail: value.pass_fail,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ScheduleResponse {
    pub year: i32,
    pub term: String,
    pub is_current_term: bool,
    pub schedule: Vec<ScheduleEntryResponse>,
    pub summary: Option<AcademicSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct GradeResponse {
    pub offering_id: i32,
    pub course_name: String,
    pub course_code: String,
    pub credit: i32,
    pub score: f64,
    pub letter_grade: Option<String>,
    pub grade_point: Option<f64>,
    pub pass_fail: Option<String>,
}

impl From<GradeRowModel> for GradeResponse {
    fn from(value: GradeRowModel) -> Self {
        GradeResponse {
            offering_id: value.offering_id,
            course_name: value.course_name,
            course_code: value.course_code,
            credit: value.credit,
            score: value.score,
            letter_grade: value.letter_grade,
            grade_point: value.grade_point,
            pass_fail: value.pass_fail,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct GradeTermResponse {
    pub year: i32,
    pub term: String,
    pub grades: Vec<GradeResponse>,
}
