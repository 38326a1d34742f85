//! In-memory caching for lab
//!
//! Provides:
//! - A TTL cache with lazy expiry on read
//! - Canonical, order-independent cache keys derived from query parameters

pub mod cache;
pub mod key;

pub use cache::TtlCache;
pub use key::{CacheError, CacheKey};
