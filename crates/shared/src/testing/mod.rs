//! In-memory stand-in for the PostgreSQL repositories.
//!
//! [`InMemoryStore`] implements every repository trait with the same
//! observable semantics as the SQL implementations (ordering, visibility
//! filtering, the conditional `paid_date` write) so services and the HTTP
//! layer can be exercised without a database.

mod fixtures;
mod store;

pub use self::fixtures::{announcement, installment, invoice, schedule_row};
pub use self::store::InMemoryStore;
