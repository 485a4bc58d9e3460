mod query;
mod summary;

pub use self::query::AcademicQueryService;
pub use self::summary::summarize;
