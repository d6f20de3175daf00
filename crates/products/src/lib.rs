//! Products domain module (cosmetics inventory records).
//!
//! This crate contains business rules for owned cosmetic products, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! expiration calculator lives here; it is the one piece of real arithmetic in
//! the system and takes "today" as an explicit parameter so it stays testable.

pub mod expiration;
pub mod product;
pub mod usage;

pub use expiration::{ExpirationInput, ExpirationReport, ExpirationTier, assess};
pub use product::{CosmeticProduct, OpenStatus, PaoMonths, ProductSpec, Rating};
pub use usage::UsageLog;
