//! Query engine - pure filter and paginate over catalog records
//!
//! No I/O and no hidden state: the same records and params always produce
//! the same page.

use crate::error::ComputeError;
use crate::page::PaginatedResult;
use crate::query::{CategoryFilter, DifficultyFilter, QueryParams};
use crate::record::CatalogRecord;

/// Every filter of one query, with the search text lowered once
struct RecordFilter {
    needle: Option<String>,
    difficulty: DifficultyFilter,
    category: CategoryFilter,
}

impl RecordFilter {
    fn new(params: &QueryParams) -> Self {
        Self {
            needle: params.search_term().map(str::to_lowercase),
            difficulty: params.difficulty,
            category: params.category,
        }
    }

    /// Case-insensitive substring match over title, description and tags
    fn matches_search(&self, record: &CatalogRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record.title.to_lowercase().contains(needle)
            || record.description.to_lowercase().contains(needle)
            || record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    fn matches(&self, record: &CatalogRecord) -> bool {
        self.matches_search(record)
            && self.difficulty.matches(record)
            && self.category.matches(record)
    }
}

/// Filter `records` by `params` and slice out the requested page
///
/// Matching records keep their source order. A page past the end yields an
/// empty `items` list with the usual totals.
pub fn run_query(
    records: &[CatalogRecord],
    params: &QueryParams,
) -> Result<PaginatedResult, ComputeError> {
    if params.page_size == 0 {
        return Err(ComputeError::ZeroPageSize);
    }

    let filter = RecordFilter::new(params);
    let filtered: Vec<&CatalogRecord> = records.iter().filter(|r| filter.matches(r)).collect();

    let total_items = filtered.len();
    let page_size = params.page_size as usize;
    let total_pages = u32::try_from(total_items.div_ceil(page_size))
        .map_err(|_| ComputeError::PageCountOverflow(total_items))?;

    let start = (params.page as usize)
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .ok_or(ComputeError::InvalidOffset {
            page: params.page,
            page_size: params.page_size,
        })?;

    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Ok(PaginatedResult {
        items,
        total_items,
        page: params.page,
        page_size: params.page_size,
        total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Category, Difficulty};

    fn record(id: &str, difficulty: u8, category: Category, tags: &[&str]) -> CatalogRecord {
        CatalogRecord::new(
            id,
            format!("Topic {id}"),
            format!("About {id}"),
            Difficulty::new(difficulty).unwrap(),
            category,
        )
        .with_tags(tags.iter().copied())
    }

    fn numbered(count: usize) -> Vec<CatalogRecord> {
        (0..count)
            .map(|i| record(&format!("r{i}"), (i % 5 + 1) as u8, Category::Hooks, &[]))
            .collect()
    }

    fn ids(result: &PaginatedResult) -> Vec<&str> {
        result.items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_pagination_bounds() {
        let records = numbered(13);
        let expected = [6, 6, 1, 0];

        for (page, len) in (1..=4).zip(expected) {
            let result = run_query(&records, &QueryParams::page(page, 6)).unwrap();
            assert_eq!(result.items.len(), len, "page {page}");
            assert_eq!(result.total_items, 13);
            assert_eq!(result.total_pages, 3);
            assert_eq!(result.page, page);
        }
    }

    #[test]
    fn test_pages_preserve_source_order() {
        let records = numbered(13);
        let result = run_query(&records, &QueryParams::page(2, 6)).unwrap();
        assert_eq!(ids(&result), vec!["r6", "r7", "r8", "r9", "r10", "r11"]);
    }

    #[test]
    fn test_page_size_larger_than_total() {
        let records = numbered(4);
        let result = run_query(&records, &QueryParams::page(1, 50)).unwrap();
        assert_eq!(result.items.len(), 4);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_empty_collection() {
        let result = run_query(&[], &QueryParams::default().with_search("x")).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = vec![
            record("a", 1, Category::Hooks, &["react"]),
            record("b", 1, Category::Hooks, &["vue"]),
        ];
        let result = run_query(&records, &QueryParams::default().with_search("REACT")).unwrap();
        assert_eq!(ids(&result), vec!["a"]);

        // title and description both contain the id
        let result = run_query(&records, &QueryParams::default().with_search("TOPIC B")).unwrap();
        assert_eq!(ids(&result), vec!["b"]);
        let result = run_query(&records, &QueryParams::default().with_search("about a")).unwrap();
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_tag_substring_matches() {
        let records = vec![record("a", 1, Category::Hooks, &["performance"])];
        let result = run_query(&records, &QueryParams::default().with_search("perf")).unwrap();
        assert_eq!(result.total_items, 1);
    }

    #[test]
    fn test_empty_search_equals_absent() {
        let records = numbered(7);
        let absent = run_query(&records, &QueryParams::default()).unwrap();
        let empty = run_query(&records, &QueryParams::default().with_search("")).unwrap();
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let records = vec![
            record("hit", 3, Category::Apis, &["forms"]),
            record("wrong-category", 3, Category::Hooks, &["forms"]),
            record("wrong-level", 2, Category::Apis, &["forms"]),
            record("wrong-search", 3, Category::Apis, &["timers"]),
        ];
        let params = QueryParams::default()
            .with_search("forms")
            .with_category(CategoryFilter::Only(Category::Apis))
            .with_difficulty(DifficultyFilter::Level(Difficulty::new(3).unwrap()));

        let result = run_query(&records, &params).unwrap();
        assert_eq!(ids(&result), vec!["hit"]);
        assert_eq!(result.total_items, 1);
    }

    #[test]
    fn test_difficulty_all_keeps_every_level() {
        let records = numbered(10);
        let result = run_query(&records, &QueryParams::page(1, 10)).unwrap();
        let mut levels: Vec<u8> = result.items.iter().map(|r| r.difficulty_level.level()).collect();
        levels.sort_unstable();
        levels.dedup();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_page_is_compute_error() {
        let records = numbered(3);
        assert_eq!(
            run_query(&records, &QueryParams::page(0, 6)),
            Err(ComputeError::InvalidOffset {
                page: 0,
                page_size: 6
            })
        );
        assert_eq!(
            run_query(&records, &QueryParams::page(1, 0)),
            Err(ComputeError::ZeroPageSize)
        );
    }
}
