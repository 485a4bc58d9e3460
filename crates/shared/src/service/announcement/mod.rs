mod command;
mod query;

pub use self::command::AnnouncementCommandService;
pub use self::query::AnnouncementQueryService;
