mod query;

pub use self::query::AcademicRecordQueryRepository;
