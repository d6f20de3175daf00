//! Inventory record access: user-scoped storage, filtering, and counts.
//!
//! The [`ProductDirectory`] is the record-access facade the excluded web layer
//! talks to: CRUD with referential maintenance (cascades, nulling), usage
//! history, and the filtered/sorted/counted product listing. Storage is
//! abstracted behind [`UserStore`] with an in-memory implementation for
//! tests and development.

pub mod directory;
pub mod query;
pub mod store;

pub use directory::ProductDirectory;
pub use query::{Pagination, ProductFilter, ProductListing, ProductPage, TierCounts};
pub use store::{InMemoryUserStore, UserStore};
