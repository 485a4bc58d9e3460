mod command;
mod query;

pub use self::command::{DynInstallmentCommandRepository, InstallmentCommandRepositoryTrait};
pub use self::query::{
    DynInstallmentQueryRepository, DynInvoiceQueryRepository, InstallmentQueryRepositoryTrait,
    InvoiceQueryRepositoryTrait,
};
