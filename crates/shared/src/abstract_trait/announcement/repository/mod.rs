mod command;
mod query;

pub use self::command::{AnnouncementCommandRepositoryTrait, DynAnnouncementCommandRepository};
pub use self::query::{AnnouncementQueryRepositoryTrait, DynAnnouncementQueryRepository};
