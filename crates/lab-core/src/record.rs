//! Catalog record domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::QueryError;

/// One topic entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Stable identifier, also used as the routing key of the topic page
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty_level: Difficulty,
    pub category: Category,
    /// Display order is preserved; matching ignores order
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl CatalogRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty_level: Difficulty,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            difficulty_level,
            category,
            tags: Vec::new(),
            last_updated: OffsetDateTime::UNIX_EPOCH,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_last_updated(mut self, last_updated: OffsetDateTime) -> Self {
        self.last_updated = last_updated;
        self
    }
}

/// Topic difficulty, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Display names indexed by `level - MIN`
    const LABELS: [&'static str; 5] =
        ["Beginner", "Basic", "Intermediate", "Advanced", "Expert"];

    pub fn new(level: u8) -> Result<Self, QueryError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(QueryError::validation(format!(
                "difficulty must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            )))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[usize::from(self.0 - Self::MIN)]
    }

    /// All levels in ascending order
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = QueryError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hooks,
    Apis,
    Patterns,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hooks, Category::Apis, Category::Patterns];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hooks => "hooks",
            Category::Apis => "apis",
            Category::Patterns => "patterns",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| QueryError::validation(format!("unknown category: {s}")))
    }
}
