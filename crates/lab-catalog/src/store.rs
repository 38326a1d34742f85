//! Immutable in-memory catalog

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use lab_core::CatalogRecord;
use thiserror::Error;

use crate::source::RecordSource;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Read-only record collection indexed by id
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Arc<Vec<CatalogRecord>>,
    by_id: HashMap<String, usize>,
}

impl CatalogStore {
    /// Build a store, rejecting empty or duplicate ids
    pub fn new(records: Vec<CatalogRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    id: record.id.clone(),
                    reason: "id must not be empty".to_string(),
                });
            }
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: Arc::new(records),
            by_id,
        })
    }

    /// The compiled-in topic catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(crate::builtin::records()?)
    }

    pub fn all(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&CatalogRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordSource for CatalogStore {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn records(&self) -> anyhow::Result<Arc<Vec<CatalogRecord>>> {
        Ok(Arc::clone(&self.records))
    }

    async fn find(&self, id: &str) -> anyhow::Result<Option<CatalogRecord>> {
        Ok(self.get(id).cloned())
    }
}
