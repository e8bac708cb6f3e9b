//! Storage layer
//!
//! All state lives in the durable store; nothing is cached in-process.
//! Cross-request invariants (slug uniqueness, owner references) are
//! enforced here via database constraints.

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{Link, LinkAnalytics, ScanEvent, ScanMetadata};
