mod command;
mod query;

pub use self::command::AnnouncementCommandRepository;
pub use self::query::AnnouncementQueryRepository;
