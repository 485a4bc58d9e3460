mod command;
mod query;

pub use self::command::InstallmentCommandRepository;
pub use self::query::{InstallmentQueryRepository, InvoiceQueryRepository};
