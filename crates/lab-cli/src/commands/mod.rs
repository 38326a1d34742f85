pub mod labels;
pub mod query;
pub mod serve;
pub mod show;

use std::sync::Arc;

use anyhow::Result;
use lab_catalog::CatalogStore;
use lab_config::Config;
use lab_engine::{PageCache, QueryService, QueryServiceConfig};

/// Build the query service over the built-in catalog with one shared cache
pub fn build_service(config: &Config) -> Result<QueryService> {
    let store = CatalogStore::builtin()?;
    let cache = Arc::new(PageCache::new());

    Ok(QueryService::new(
        Arc::new(store),
        cache,
        QueryServiceConfig {
            namespace: config.namespace.clone(),
            latency: config.latency(),
            ttl: config.ttl(),
        },
    ))
}
