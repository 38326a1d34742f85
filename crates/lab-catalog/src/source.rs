//! Record source trait

use std::sync::Arc;

use async_trait::async_trait;
use lab_core::CatalogRecord;

/// Where the query service reads catalog records from
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Name of the source, for logs
    fn name(&self) -> &'static str;

    /// Every record, in catalog order
    async fn records(&self) -> anyhow::Result<Arc<Vec<CatalogRecord>>>;

    /// Look up a single record by id
    async fn find(&self, id: &str) -> anyhow::Result<Option<CatalogRecord>>;
}
