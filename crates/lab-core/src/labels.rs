//! Human-readable labels for the catalog filter controls

use serde::Serialize;

use crate::query::{CategoryFilter, DifficultyFilter};
use crate::record::Category;

pub fn difficulty_label(filter: DifficultyFilter) -> &'static str {
    match filter {
        DifficultyFilter::All => "All levels",
        DifficultyFilter::Level(level) => level.label(),
    }
}

pub fn category_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All categories",
        CategoryFilter::Only(Category::Hooks) => "Hooks",
        CategoryFilter::Only(Category::Apis) => "APIs",
        CategoryFilter::Only(Category::Patterns) => "Patterns",
    }
}

/// A selectable filter value and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelOption {
    pub value: String,
    pub label: &'static str,
}

/// Label tables for both filter controls, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterLabels {
    pub difficulty: Vec<LabelOption>,
    pub category: Vec<LabelOption>,
}

impl FilterLabels {
    pub fn new() -> Self {
        Self {
            difficulty: DifficultyFilter::options()
                .map(|f| LabelOption {
                    value: f.to_string(),
                    label: difficulty_label(f),
                })
                .collect(),
            category: CategoryFilter::options()
                .map(|f| LabelOption {
                    value: f.to_string(),
                    label: category_label(f),
                })
                .collect(),
        }
    }
}

impl Default for FilterLabels {
    fn default() -> Self {
        Self::new()
    }
}
