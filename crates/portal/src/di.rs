use shared::{
    abstract_trait::{
        academic::{DynAcademicQueryService, DynAcademicRecordQueryRepository},
        announcement::{
            DynAnnouncementCommandRepository, DynAnnouncementCommandService,
            DynAnnouncementQueryRepository, DynAnnouncementQueryService,
        },
        auth::{DynAdminQueryRepository, DynAuthService, DynStudentQueryRepository},
        hashing::DynHashing,
        jwt::DynJwtService,
        tuition::{
            DynInstallmentCommandRepository, DynInstallmentQueryRepository,
            DynInvoiceQueryRepository, DynTuitionCommandService, DynTuitionQueryService,
        },
    },
    config::{AcademicCalendar, AverageDivisor, ConnectionPool},
    repository::{
        academic::AcademicRecordQueryRepository,
        announcement::{AnnouncementCommandRepository, AnnouncementQueryRepository},
        auth::{AdminQueryRepository, StudentQueryRepository},
        tuition::{InstallmentCommandRepository, InstallmentQueryRepository, InvoiceQueryRepository},
    },
    service::{
        academic::AcademicQueryService,
        announcement::{AnnouncementCommandService, AnnouncementQueryService},
        auth::AuthService,
        tuition::{TuitionCommandService, TuitionQueryService},
    },
};
use std::sync::Arc;

/// Every store handle the services need. Built from a pool in production and
/// from a substitute store in tests.
#[derive(Clone)]
pub struct Repositories {
    pub students: DynStudentQueryRepository,
    pub admins: DynAdminQueryRepository,
    pub invoices: DynInvoiceQueryRepository,
    pub installments: DynInstallmentQueryRepository,
    pub installment_command: DynInstallmentCommandRepository,
    pub academic_records: DynAcademicRecordQueryRepository,
    pub announcement_query: DynAnnouncementQueryRepository,
    pub announcement_command: DynAnnouncementCommandRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            students: Arc::new(StudentQueryRepository::new(pool.clone())),
            admins: Arc::new(AdminQueryRepository::new(pool.clone())),
            invoices: Arc::new(InvoiceQueryRepository::new(pool.clone())),
            installments: Arc::new(InstallmentQueryRepository::new(pool.clone())),
            installment_command: Arc::new(InstallmentCommandRepository::new(pool.clone())),
            academic_records: Arc::new(AcademicRecordQueryRepository::new(pool.clone())),
            announcement_query: Arc::new(AnnouncementQueryRepository::new(pool.clone())),
            announcement_command: Arc::new(AnnouncementCommandRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub tuition_query: DynTuitionQueryService,
    pub tuition_command: DynTuitionCommandService,
    pub academic_query: DynAcademicQueryService,
    pub announcement_query: DynAnnouncementQueryService,
    pub announcement_command: DynAnnouncementCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("tuition_query", &"TuitionQueryService")
            .field("tuition_command", &"TuitionCommandService")
            .field("academic_query", &"AcademicQueryService")
            .field("announcement_query", &"AnnouncementQueryService")
            .field("announcement_command", &"AnnouncementCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        repos: Repositories,
        hashing: DynHashing,
        jwt: DynJwtService,
        calendar: AcademicCalendar,
        divisor: AverageDivisor,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            repos.students.clone(),
            repos.admins.clone(),
            hashing,
            jwt,
        )) as DynAuthService;

        let tuition_query = Arc::new(TuitionQueryService::new(
            repos.invoices.clone(),
            repos.installments.clone(),
        )) as DynTuitionQueryService;

        let tuition_command = Arc::new(TuitionCommandService::new(
            repos.invoices.clone(),
            repos.installments.clone(),
            repos.installment_command.clone(),
        )) as DynTuitionCommandService;

        let academic_query = Arc::new(AcademicQueryService::new(
            repos.academic_records.clone(),
            calendar,
            divisor,
        )) as DynAcademicQueryService;

        let announcement_query =
            Arc::new(AnnouncementQueryService::new(repos.announcement_query.clone()))
                as DynAnnouncementQueryService;

        let announcement_command =
            Arc::new(AnnouncementCommandService::new(repos.announcement_command))
                as DynAnnouncementCommandService;

        Self {
            auth_service,
            tuition_query,
            tuition_command,
            academic_query,
            announcement_query,
            announcement_command,
        }
    }
}
