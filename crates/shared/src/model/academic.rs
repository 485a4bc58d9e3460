use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One weekly class slot of an enrolled offering, with the enrollment's
/// grade columns (null until grading is posted).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduleRowModel {
    pub offering_id: i32,
    pub course_name: String,
    pub course_code: String,
    pub credit: i32,
    pub professor: String,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub score: Option<f64>,
    pub letter_grade: Option<String>,
    pub grade_point: Option<f64>,
    pub pass_fail: Option<String>,
}

impl ScheduleRowModel {
    pub fn without_grades(self) -> Self {
        Self {
            score: None,
            letter_grade: None,
            grade_point: None,
            pass_fail: None,
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GradeRowModel {
    pub offering_id: i32,
    pub course_name: String,
    pub course_code: String,
    pub credit: i32,
    pub score: f64,
    pub letter_grade: Option<String>,
    pub grade_point: Option<f64>,
    pub pass_fail: Option<String>,
}
