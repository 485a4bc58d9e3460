mod command;
mod query;

pub use self::command::{DynTuitionCommandService, TuitionCommandServiceTrait};
pub use self::query::{DynTuitionQueryService, TuitionQueryServiceTrait};
