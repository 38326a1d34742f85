//! Catalog record store for lab
//!
//! The catalog is a static, compiled-in list of topic records. It is exposed
//! through the [`RecordSource`] trait so the query service can be pointed at a
//! different backend.

pub mod builtin;
pub mod source;
pub mod store;

pub use source::RecordSource;
pub use store::{CatalogError, CatalogStore};
