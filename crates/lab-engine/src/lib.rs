//! Catalog query service
//!
//! Composes the record source, the query engine and the TTL cache behind a
//! single async call. Only this layer waits (the simulated backend latency),
//! and every internal failure leaves it as the generic
//! [`QueryError::QueryFailed`].

use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lab_cache::{CacheKey, TtlCache};
use lab_catalog::RecordSource;
use lab_core::{CatalogRecord, PaginatedResult, QueryError, QueryParams, Result, run_query};
use tracing::{debug, error};

/// Cache namespace for catalog pages
pub const EXAMPLES_NAMESPACE: &str = "examples";

/// Shared page cache type
pub type PageCache = TtlCache<PaginatedResult>;

#[derive(Debug, Clone)]
pub struct QueryServiceConfig {
    /// Prefix of every cache key written by the service
    pub namespace: String,
    /// Delay applied on cache misses to stand in for a backend round trip
    pub latency: Duration,
    /// How long a computed page stays cached
    pub ttl: Duration,
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            namespace: EXAMPLES_NAMESPACE.to_string(),
            latency: Duration::from_millis(300),
            ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Hit/miss counters since the service was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub hits: u64,
    pub misses: u64,
}

pub struct QueryService {
    source: Arc<dyn RecordSource>,
    cache: Arc<PageCache>,
    config: QueryServiceConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryService {
    pub fn new(
        source: Arc<dyn RecordSource>,
        cache: Arc<PageCache>,
        config: QueryServiceConfig,
    ) -> Self {
        Self {
            source,
            cache,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Fetch one page of the catalog
    ///
    /// Invalid params are rejected before the cache is consulted. Cached pages
    /// are returned without delay; misses wait for the configured latency,
    /// run the query and cache the page for the configured TTL.
    pub async fn fetch_page(&self, params: QueryParams) -> Result<PaginatedResult> {
        params.validate()?;
        let params = params.normalized();

        let key = CacheKey::derive(&self.config.namespace, &params)
            .map_err(|e| query_failed("derive cache key", e))?;

        if let Some(page) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "catalog cache hit");
            return Ok(page);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(key = %key, source = self.source.name(), "catalog cache miss");

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let records = self
            .source
            .records()
            .await
            .map_err(|e| query_failed("load catalog records", e))?;
        let page = run_query(&records, &params).map_err(|e| query_failed("run catalog query", e))?;

        self.cache.set(key, page.clone(), self.config.ttl);
        Ok(page)
    }

    /// Look up a single topic by id
    pub async fn get_record(&self, id: &str) -> Result<CatalogRecord> {
        self.source
            .find(id)
            .await
            .map_err(|e| query_failed("look up catalog record", e))?
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }

    /// Drop every cached page
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    /// Drop expired pages nobody has read since they expired
    pub fn purge_expired(&self) -> usize {
        let purged = self.cache.purge_expired();
        if purged > 0 {
            debug!(purged, "purged expired catalog pages");
        }
        purged
    }

    /// Pages currently held by the cache, expired or not
    pub fn cached_pages(&self) -> usize {
        self.cache.len()
    }

    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Log the cause and hide it behind the generic error
fn query_failed(context: &str, cause: impl Display) -> QueryError {
    error!("Failed to {}: {}", context, cause);
    QueryError::QueryFailed
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_catalog::CatalogStore;

    fn service(latency: Duration) -> QueryService {
        let store = CatalogStore::builtin().unwrap();
        QueryService::new(
            Arc::new(store),
            Arc::new(PageCache::new()),
            QueryServiceConfig {
                latency,
                ..Default::default()
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_call_is_a_hit() {
        let service = service(Duration::from_millis(300));
        let first = service.fetch_page(QueryParams::default()).await.unwrap();
        let second = service.fetch_page(QueryParams::default()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.stats(), ServiceStats { hits: 1, misses: 1 });
    }

    #[tokio::test]
    async fn test_validation_skips_cache() {
        let service = service(Duration::ZERO);
        let err = service.fetch_page(QueryParams::page(0, 6)).await.unwrap_err();

        assert!(matches!(err, QueryError::Validation(_)));
        assert_eq!(service.stats(), ServiceStats::default());
    }

    #[tokio::test]
    async fn test_get_record() {
        let service = service(Duration::ZERO);
        assert_eq!(service.get_record("use-memo").await.unwrap().id, "use-memo");
        assert_eq!(
            service.get_record("nope").await.unwrap_err(),
            QueryError::NotFound("nope".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalidate_forces_recompute() {
        let service = service(Duration::ZERO);
        service.fetch_page(QueryParams::default()).await.unwrap();
        service.invalidate();
        service.fetch_page(QueryParams::default()).await.unwrap();
        assert_eq!(service.stats().misses, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_drops_expired_pages() {
        let service = service(Duration::ZERO);
        service.fetch_page(QueryParams::page(1, 6)).await.unwrap();
        service.fetch_page(QueryParams::page(2, 6)).await.unwrap();
        assert_eq!(service.cached_pages(), 2);

        assert_eq!(service.purge_expired(), 0);
        tokio::time::advance(Duration::from_secs(5 * 60 + 1)).await;
        assert_eq!(service.purge_expired(), 2);
        assert_eq!(service.cached_pages(), 0);
    }
}
