mod query;

pub use self::query::{AdminQueryRepository, StudentQueryRepository};
