//! Airport and route catalog.
//!
//! The catalog is the static data the planner searches over. It is loaded
//! from JSON (a file, or the copy built into the binary), validated once,
//! and then shared read-only.

mod error;
mod index;
mod store;

pub use error::CatalogError;
pub use index::RouteIndex;
pub use store::Catalog;
