//! Catalog domain module (brands and categories).
//!
//! This crate contains the shared product catalog: brands and categories that
//! products reference. Implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod brand;
pub mod category;
pub mod presets;

pub use brand::Brand;
pub use category::{Category, CategoryType};
