use thiserror::Error;

/// Errors surfaced to callers of the catalog query service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query: {0}")]
    Validation(String),

    /// Generic failure; callers must not depend on the message text
    #[error("Query failed, please try again")]
    QueryFailed,

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl QueryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Failures inside the query engine itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    #[error("Invalid page offset: page {page} with page size {page_size}")]
    InvalidOffset { page: u32, page_size: u32 },

    #[error("Page size must be positive")]
    ZeroPageSize,

    #[error("Page count does not fit in u32: {0} items")]
    PageCountOverflow(usize),
}

pub type Result<T> = std::result::Result<T, QueryError>;
