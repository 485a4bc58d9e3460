use crate::model::{
    academic::ScheduleRowModel, announcement::AnnouncementModel, installment::InstallmentModel,
    invoice::InvoiceModel,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn invoice(invoice_id: i32, student_id: &str, year: i32, term: &str, payable: i64) -> InvoiceModel {
    InvoiceModel {
        invoice_id,
        student_id: student_id.to_string(),
        year,
        term: term.to_string(),
        tuition_fee: payable,
        scholarship_amount: 0,
        payable_amount: payable,
        pay_start_date: date(year, 2, 1),
        pay_end_date: date(year, 2, 28),
    }
}

pub fn installment(invoice_id: i32, installment_no: i32, amount: i64) -> InstallmentModel {
    InstallmentModel {
        invoice_id,
        installment_no,
        amount,
        due_start_date: date(2025, 2, 1),
        due_end_date: date(2025, 2, 28),
        paid_date: None,
    }
}

/// A graded (or ungraded when `score` is `None`) single-slot schedule row.
pub fn schedule_row(
    offering_id: i32,
    credit: i32,
    score: Option<f64>,
    grade_point: Option<f64>,
) -> ScheduleRowModel {
    ScheduleRowModel {
        offering_id,
        course_name: format!("Course {offering_id}"),
        course_code: format!("CS{offering_id:03}"),
        credit,
        professor: "Prof. Park".to_string(),
        day_of_week: "MON".to_string(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default(),
        room: "E-101".to_string(),
        score,
        letter_grade: score.map(|_| "A".to_string()),
        grade_point,
        pass_fail: score.map(|_| "P".to_string()),
    }
}

pub fn announcement(
    announcement_id: i32,
    title: &str,
    content: &str,
    posted_date: NaiveDateTime,
    is_visible: bool,
    posted_by: i32,
) -> AnnouncementModel {
    AnnouncementModel {
        announcement_id,
        title: title.to_string(),
        content: content.to_string(),
        posted_date,
        is_visible,
        posted_by,
        posted_by_name: String::new(),
    }
}
