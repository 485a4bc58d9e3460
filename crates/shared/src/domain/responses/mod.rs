mod academic;
mod announcement;
mod api;
mod auth;
mod pagination;
mod tuition;

pub use self::academic::{
    AcademicSummary, GradeResponse, GradeTermResponse, ScheduleEntryResponse, ScheduleResponse,
};
pub use self::announcement::{AnnouncementMutationResponse, AnnouncementResponse};
pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::auth::{AdminResponse, AdminTokenResponse, StudentResponse, StudentTokenResponse};
pub use self::pagination::Pagination;
pub use self::tuition::{
    InstallmentResponse, InvoicePaymentSummaryResponse, InvoiceResponse, PayInstallmentResponse,
};
