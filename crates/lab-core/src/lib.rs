//! Core domain models and logic for lab
//!
//! This crate contains:
//! - Domain models (CatalogRecord, QueryParams, PaginatedResult)
//! - Query engine (pure filter + paginate)
//! - Filter labels and the pagination window used by front ends

pub mod engine;
pub mod error;
pub mod labels;
pub mod page;
pub mod query;
pub mod record;

pub use engine::run_query;
pub use error::{ComputeError, QueryError, Result};
pub use labels::FilterLabels;
pub use page::{PageLink, PaginatedResult, page_window};
pub use query::{CategoryFilter, DEFAULT_PAGE_SIZE, DifficultyFilter, QueryParams};
pub use record::{CatalogRecord, Category, Difficulty};
