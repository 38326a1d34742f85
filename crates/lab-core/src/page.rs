//! Paginated results and the pagination control window

use serde::{Deserialize, Serialize};

use crate::record::CatalogRecord;

/// One page of matching records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult {
    pub items: Vec<CatalogRecord>,
    /// Matching records before pagination
    pub total_items: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl PaginatedResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Entry of a pagination control strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: u32, active: bool },
    Ellipsis,
}

/// Pages shown beside the current page before ellipses kick in
const MAX_VISIBLE_PAGES: u32 = 5;

/// Build the pagination strip for `current` out of `total_pages`
///
/// Page 1 is always present. Short ranges list every page; longer ones show
/// the neighbors of `current`, the last page, and ellipses for the gaps.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageLink> {
    let page = |number| PageLink::Page {
        number,
        active: number == current,
    };

    let mut links = vec![page(1)];

    if total_pages <= MAX_VISIBLE_PAGES {
        links.extend((2..=total_pages).map(page));
        return links;
    }

    if current > 3 {
        links.push(PageLink::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total_pages - 1);
    links.extend((start..=end).map(page));

    if current < total_pages - 2 {
        links.push(PageLink::Ellipsis);
    }

    links.push(page(total_pages));
    links
}
