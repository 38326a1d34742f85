//! Query parameters for the catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};
use crate::record::{CatalogRecord, Category, Difficulty};

/// Number of cards per catalog page
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Parameters of a single catalog query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Free-text search; empty and absent are equivalent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub difficulty: DifficultyFilter,
    pub category: CategoryFilter,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            difficulty: DifficultyFilter::All,
            category: CategoryFilter::All,
        }
    }
}

impl QueryParams {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: DifficultyFilter) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Reject pages and page sizes below 1
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(QueryError::validation("page must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(QueryError::validation("page size must be at least 1"));
        }
        Ok(())
    }

    /// Collapse an empty search string to `None`
    pub fn normalized(mut self) -> Self {
        if self.search.as_deref().is_some_and(str::is_empty) {
            self.search = None;
        }
        self
    }

    /// Search text, if any, treating the empty string as absent
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Difficulty selector; wire form is `"all"` or `"1"`..`"5"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DifficultyFilter {
    #[default]
    All,
    Level(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(self, record: &CatalogRecord) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Level(level) => record.difficulty_level == level,
        }
    }

    /// Every selectable value, `All` first
    pub fn options() -> impl Iterator<Item = DifficultyFilter> {
        std::iter::once(DifficultyFilter::All).chain(Difficulty::all().map(DifficultyFilter::Level))
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str("all"),
            DifficultyFilter::Level(level) => write!(f, "{level}"),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(DifficultyFilter::All);
        }
        let level: u8 = s
            .parse()
            .map_err(|_| QueryError::validation(format!("unknown difficulty: {s}")))?;
        Ok(DifficultyFilter::Level(Difficulty::new(level)?))
    }
}

impl TryFrom<String> for DifficultyFilter {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DifficultyFilter> for String {
    fn from(f: DifficultyFilter) -> Self {
        f.to_string()
    }
}

/// Category selector; wire form is `"all"` or a category name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, record: &CatalogRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == category,
        }
    }

    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(f: CategoryFilter) -> Self {
        f.to_string()
    }
}
