use crate::{
    config::AverageDivisor, domain::responses::AcademicSummary,
    model::academic::ScheduleRowModel, utils::round2,
};
use std::collections::HashSet;

/// Aggregates one term's enrollment rows.
///
/// Rows are counted once per offering, so an offering meeting several times a
/// week does not weigh more. Returns `None` when no row carries a score.
pub fn summarize(rows: &[ScheduleRowModel], divisor: AverageDivisor) -> Option<AcademicSummary> {
    let mut seen = HashSet::new();
    let offerings: Vec<&ScheduleRowModel> = rows
        .iter()
        .filter(|row| seen.insert(row.offering_id))
        .collect();

    let scored = offerings.iter().filter(|row| row.score.is_some()).count();
    if scored == 0 {
        return None;
    }

    let total_score: f64 = offerings.iter().map(|row| row.score.unwrap_or(0.0)).sum();
    let total_credit: i32 = offerings.iter().map(|row| row.credit).sum();
    let total_grade_point: f64 = offerings
        .iter()
        .map(|row| row.grade_point.unwrap_or(0.0))
        .sum();

    let count = match divisor {
        AverageDivisor::AllRows => offerings.len(),
        AverageDivisor::ScoredRows => scored,
    };

    let gpa = (total_credit != 0).then(|| round2(total_grade_point / f64::from(total_credit)));

    Some(AcademicSummary {
        avg_score: round2(total_score / count as f64),
        total_credit,
        gpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::schedule_row;

    #[test]
    fn gpa_is_grade_points_over_credits() {
        let rows = vec![
            schedule_row(1, 3, Some(95.0), Some(12.0)),
            schedule_row(2, 3, Some(80.0), Some(9.0)),
            schedule_row(3, 4, Some(90.0), Some(16.0)),
        ];

        let summary = summarize(&rows, AverageDivisor::AllRows).unwrap();

        assert_eq!(summary.total_credit, 10);
        assert_eq!(summary.gpa, Some(3.7));
        assert_eq!(summary.avg_score, 88.33);
    }

    #[test]
    fn ungraded_rows_count_toward_the_default_divisor() {
        let rows = vec![
            schedule_row(1, 3, Some(90.0), Some(12.0)),
            schedule_row(2, 3, None, None),
        ];

        let all = summarize(&rows, AverageDivisor::AllRows).unwrap();
        let scored = summarize(&rows, AverageDivisor::ScoredRows).unwrap();

        assert_eq!(all.avg_score, 45.0);
        assert_eq!(scored.avg_score, 90.0);
        assert_eq!(all.total_credit, 6);
    }

    #[test]
    fn no_scores_means_no_summary() {
        let rows = vec![schedule_row(1, 3, None, None), schedule_row(2, 2, None, None)];

        assert_eq!(summarize(&rows, AverageDivisor::AllRows), None);
        assert_eq!(summarize(&[], AverageDivisor::AllRows), None);
    }

    #[test]
    fn zero_credit_term_has_no_gpa() {
        let rows = vec![schedule_row(1, 0, Some(100.0), Some(0.0))];

        let summary = summarize(&rows, AverageDivisor::AllRows).unwrap();

        assert_eq!(summary.gpa, None);
        assert_eq!(summary.avg_score, 100.0);
    }

    #[test]
    fn offerings_with_several_slots_count_once() {
        let mut tuesday = schedule_row(1, 3, Some(90.0), Some(12.0));
        tuesday.day_of_week = "TUE".to_string();
        let rows = vec![
            schedule_row(1, 3, Some(90.0), Some(12.0)),
            tuesday,
            schedule_row(2, 3, Some(70.0), Some(6.0)),
        ];

        let summary = summarize(&rows, AverageDivisor::AllRows).unwrap();

        assert_eq!(summary.total_credit, 6);
        assert_eq!(summary.avg_score, 80.0);
        assert_eq!(summary.gpa, Some(3.0));
    }
}
