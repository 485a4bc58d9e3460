mod command;
mod query;

pub use self::command::{AnnouncementCommandServiceTrait, DynAnnouncementCommandService};
pub use self::query::{AnnouncementQueryServiceTrait, DynAnnouncementQueryService};
