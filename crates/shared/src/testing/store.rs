use crate::{
    abstract_trait::{
        academic::AcademicRecordQueryRepositoryTrait,
        announcement::{AnnouncementCommandRepositoryTrait, AnnouncementQueryRepositoryTrait},
        auth::{AdminQueryRepositoryTrait, StudentQueryRepositoryTrait},
        tuition::{
            InstallmentCommandRepositoryTrait, InstallmentQueryRepositoryTrait,
            InvoiceQueryRepositoryTrait,
        },
    },
    domain::requests::announcement::{
        CreateAnnouncementRequest, FindAllAnnouncements, UpdateAnnouncementRequest,
    },
    errors::RepositoryError,
    model::{
        academic::{GradeRowModel, ScheduleRowModel},
        admin::AdminModel,
        announcement::AnnouncementModel,
        installment::InstallmentModel,
        invoice::InvoiceModel,
        student::StudentModel,
    },
};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

struct Enrollment {
    student_id: String,
    year: i32,
    term: String,
    row: ScheduleRowModel,
}

#[derive(Default)]
struct Tables {
    students: Vec<StudentModel>,
    admins: Vec<AdminModel>,
    invoices: Vec<InvoiceModel>,
    installments: Vec<InstallmentModel>,
    enrollments: Vec<Enrollment>,
    announcements: Vec<AnnouncementModel>,
    unavailable: bool,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Like [`Self::lock`], but fails every call while the store is marked
    /// unavailable.
    fn open(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        let tables = self.lock();
        if tables.unavailable {
            return Err(RepositoryError::Custom(
                "connection refused: store is unavailable".to_string(),
            ));
        }
        Ok(tables)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn add_student(&self, student_id: &str, password_hash: &str, name: &str) {
        self.lock().students.push(StudentModel {
            student_id: student_id.to_string(),
            password: password_hash.to_string(),
            name: name.to_string(),
        });
    }

    /// Returns the new `admin_id`.
    pub fn add_admin(&self, user_id: &str, password_hash: &str, name: &str) -> i32 {
        let mut tables = self.lock();
        let admin_id = tables.admins.iter().map(|a| a.admin_id).max().unwrap_or(0) + 1;
        tables.admins.push(AdminModel {
            admin_id,
            user_id: user_id.to_string(),
            password: password_hash.to_string(),
            name: name.to_string(),
        });
        admin_id
    }

    pub fn add_invoice(&self, invoice: InvoiceModel) {
        self.lock().invoices.push(invoice);
    }

    pub fn add_installment(&self, installment: InstallmentModel) {
        self.lock().installments.push(installment);
    }

    pub fn add_enrollment(&self, student_id: &str, year: i32, term: &str, row: ScheduleRowModel) {
        self.lock().enrollments.push(Enrollment {
            student_id: student_id.to_string(),
            year,
            term: term.to_string(),
            row,
        });
    }

    /// Stores the announcement as given, filling `posted_by_name` from the
    /// admin table.
    pub fn add_announcement(&self, mut announcement: AnnouncementModel) {
        let mut tables = self.lock();
        announcement.posted_by_name = admin_name(&tables, announcement.posted_by);
        tables.announcements.push(announcement);
    }

    pub fn installment(&self, invoice_id: i32, installment_no: i32) -> Option<InstallmentModel> {
        self.lock()
            .installments
            .iter()
            .find(|i| i.invoice_id == invoice_id && i.installment_no == installment_no)
            .cloned()
    }

    pub fn announcement(&self, id: i32) -> Option<AnnouncementModel> {
        self.lock()
            .announcements
            .iter()
            .find(|a| a.announcement_id == id)
            .cloned()
    }

    pub fn announcement_count(&self) -> usize {
        self.lock().announcements.len()
    }
}

fn admin_name(tables: &Tables, admin_id: i32) -> String {
    tables
        .admins
        .iter()
        .find(|a| a.admin_id == admin_id)
        .map(|a| a.name.clone())
        .unwrap_or_default()
}

fn same_term(enrollment: &Enrollment, student_id: &str, year: i32, term: &str) -> bool {
    enrollment.student_id == student_id
        && enrollment.year == year
        && enrollment.term.eq_ignore_ascii_case(term)
}

fn matches_search(announcement: &AnnouncementModel, search: Option<&str>) -> bool {
    match search {
        None => true,
        Some(needle) => {
            let needle = needle.to_lowercase();
            announcement.title.to_lowercase().contains(&needle)
                || announcement.content.to_lowercase().contains(&needle)
        }
    }
}

#[async_trait]
impl StudentQueryRepositoryTrait for InMemoryStore {
    async fn find_by_id(&self, student_id: &str) -> Result<Option<StudentModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables
            .students
            .iter()
            .find(|s| s.student_id == student_id)
            .cloned())
    }
}

#[async_trait]
impl AdminQueryRepositoryTrait for InMemoryStore {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<AdminModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables.admins.iter().find(|a| a.user_id == user_id).cloned())
    }

    async fn find_by_id(&self, admin_id: i32) -> Result<Option<AdminModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables.admins.iter().find(|a| a.admin_id == admin_id).cloned())
    }
}

#[async_trait]
impl InvoiceQueryRepositoryTrait for InMemoryStore {
    async fn find_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<InvoiceModel>, RepositoryError> {
        let tables = self.open()?;
        let mut rows: Vec<InvoiceModel> = tables
            .invoices
            .iter()
            .filter(|i| i.student_id == student_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| b.term.cmp(&a.term))
                .then_with(|| b.invoice_id.cmp(&a.invoice_id))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, invoice_id: i32) -> Result<Option<InvoiceModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables
            .invoices
            .iter()
            .find(|i| i.invoice_id == invoice_id)
            .cloned())
    }
}

#[async_trait]
impl InstallmentQueryRepositoryTrait for InMemoryStore {
    async fn find_by_invoice(
        &self,
        invoice_id: i32,
    ) -> Result<Vec<InstallmentModel>, RepositoryError> {
        let tables = self.open()?;
        let mut rows: Vec<InstallmentModel> = tables
            .installments
            .iter()
            .filter(|i| i.invoice_id == invoice_id)
            .cloned()
            .collect();
        rows.sort_by_key(|i| i.installment_no);
        Ok(rows)
    }

    async fn find_one(
        &self,
        invoice_id: i32,
        installment_no: i32,
    ) -> Result<Option<InstallmentModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables
            .installments
            .iter()
            .find(|i| i.invoice_id == invoice_id && i.installment_no == installment_no)
            .cloned())
    }
}

#[async_trait]
impl InstallmentCommandRepositoryTrait for InMemoryStore {
    async fn mark_paid(&self, invoice_id: i32, installment_no: i32) -> Result<u64, RepositoryError> {
        let mut tables = self.open()?;
        let target = tables.installments.iter_mut().find(|i| {
            i.invoice_id == invoice_id && i.installment_no == installment_no && i.paid_date.is_none()
        });

        match target {
            Some(installment) => {
                installment.paid_date = Some(Utc::now().naive_utc());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl AcademicRecordQueryRepositoryTrait for InMemoryStore {
    async fn find_schedule(
        &self,
        student_id: &str,
        year: i32,
        term: &str,
    ) -> Result<Vec<ScheduleRowModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| same_term(e, student_id, year, term))
            .map(|e| e.row.clone())
            .collect())
    }

    async fn find_grades(
        &self,
        student_id: &str,
        year: i32,
        term: &str,
    ) -> Result<Vec<GradeRowModel>, RepositoryError> {
        let tables = self.open()?;
        let mut seen = HashSet::new();

        Ok(tables
            .enrollments
            .iter()
            .filter(|e| same_term(e, student_id, year, term))
            .filter(|e| seen.insert(e.row.offering_id))
            .filter_map(|e| {
                let row = &e.row;
                row.score.map(|score| GradeRowModel {
                    offering_id: row.offering_id,
                    course_name: row.course_name.clone(),
                    course_code: row.course_code.clone(),
                    credit: row.credit,
                    score,
                    letter_grade: row.letter_grade.clone(),
                    grade_point: row.grade_point,
                    pass_fail: row.pass_fail.clone(),
                })
            })
            .collect())
    }
}

#[async_trait]
impl AnnouncementQueryRepositoryTrait for InMemoryStore {
    async fn find_all(
        &self,
        req: &FindAllAnnouncements,
        include_hidden: bool,
    ) -> Result<(Vec<AnnouncementModel>, i64), RepositoryError> {
        let tables = self.open()?;
        let mut eligible: Vec<AnnouncementModel> = tables
            .announcements
            .iter()
            .filter(|a| include_hidden || a.is_visible)
            .filter(|a| matches_search(a, req.search.as_deref()))
            .cloned()
            .collect();
        eligible.sort_by(|a, b| {
            b.posted_date
                .cmp(&a.posted_date)
                .then_with(|| b.announcement_id.cmp(&a.announcement_id))
        });

        let total = eligible.len() as i64;
        let page = eligible
            .into_iter()
            .skip(usize::try_from(req.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(req.size).unwrap_or(0))
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(
        &self,
        id: i32,
        include_hidden: bool,
    ) -> Result<Option<AnnouncementModel>, RepositoryError> {
        let tables = self.open()?;
        Ok(tables
            .announcements
            .iter()
            .find(|a| a.announcement_id == id && (include_hidden || a.is_visible))
            .cloned())
    }
}

#[async_trait]
impl AnnouncementCommandRepositoryTrait for InMemoryStore {
    async fn create(
        &self,
        posted_by: i32,
        req: &CreateAnnouncementRequest,
        posted_date: NaiveDateTime,
    ) -> Result<AnnouncementModel, RepositoryError> {
        let mut tables = self.open()?;
        if !tables.admins.iter().any(|a| a.admin_id == posted_by) {
            return Err(RepositoryError::ForeignKey(format!(
                "admin {posted_by} does not exist"
            )));
        }

        let announcement_id = tables
            .announcements
            .iter()
            .map(|a| a.announcement_id)
            .max()
            .unwrap_or(0)
            + 1;

        let record = AnnouncementModel {
            announcement_id,
            title: req.title.trim().to_string(),
            content: req.content.clone(),
            posted_date,
            is_visible: req.is_visible,
            posted_by,
            posted_by_name: admin_name(&tables, posted_by),
        };
        tables.announcements.push(record.clone());

        Ok(record)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateAnnouncementRequest,
    ) -> Result<u64, RepositoryError> {
        let mut tables = self.open()?;
        match tables
            .announcements
            .iter_mut()
            .find(|a| a.announcement_id == id)
        {
            Some(a) => {
                a.title = req.title.trim().to_string();
                a.content = req.content.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_visibility(&self, id: i32, is_visible: bool) -> Result<u64, RepositoryError> {
        let mut tables = self.open()?;
        match tables
            .announcements
            .iter_mut()
            .find(|a| a.announcement_id == id)
        {
            Some(a) => {
                a.is_visible = is_visible;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut tables = self.open()?;
        let before = tables.announcements.len();
        tables.announcements.retain(|a| a.announcement_id != id);
        Ok((before - tables.announcements.len()) as u64)
    }
}
