//! Query command - page through the catalog

use anyhow::Result;
use lab_config::Config;
use lab_core::{CatalogRecord, PageLink, PaginatedResult, QueryParams, page_window};

use crate::cli::{OutputFormat, QueryArgs};

pub async fn handle(args: QueryArgs, config: &Config) -> Result<()> {
    let service = super::build_service(config)?;

    let mut params = QueryParams::page(args.page, args.page_size.unwrap_or(config.page_size))
        .with_difficulty(args.difficulty)
        .with_category(args.category);
    if let Some(search) = args.search {
        params = params.with_search(search);
    }

    let page = service.fetch_page(params).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        OutputFormat::Text => print!("{}", render_page(&page)),
    }

    Ok(())
}

pub(crate) fn render_page(page: &PaginatedResult) -> String {
    let mut out = String::new();

    if page.total_items == 0 {
        out.push_str("No topics match these filters.\n");
        return out;
    }

    out.push_str(&format!(
        "Page {}/{} ({} matching)\n\n",
        page.page, page.total_pages, page.total_items
    ));

    if page.is_empty() {
        out.push_str("This page is past the last page.\n");
    }
    for record in &page.items {
        out.push_str(&render_card(record));
        out.push('\n');
    }

    out.push_str(&render_nav(page));
    out.push('\n');
    out
}

/// Previous/next markers around the page strip
fn render_nav(page: &PaginatedResult) -> String {
    let mut parts = Vec::new();
    if page.has_previous() {
        parts.push("< prev".to_string());
    }
    parts.push(render_window(&page_window(page.page, page.total_pages)));
    if page.has_next() {
        parts.push("next >".to_string());
    }
    parts.join("  ")
}

pub(crate) fn render_card(record: &CatalogRecord) -> String {
    let stars = "*".repeat(record.difficulty_level.level() as usize);
    format!(
        "[{}] {:<5} {} ({})\n    {}\n    tags: {}\n    updated: {}\n",
        record.category,
        stars,
        record.title,
        record.id,
        record.description,
        record.tags.join(", "),
        record.last_updated.date()
    )
}

fn render_window(links: &[PageLink]) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page { number, active: true } => format!("[{number}]"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_window_marks_active() {
        assert_eq!(render_window(&page_window(5, 10)), "1 ... 4 [5] 6 ... 10");
    }

    fn result(page: u32, total_pages: u32) -> PaginatedResult {
        PaginatedResult {
            items: Vec::new(),
            total_items: total_pages as usize * 6,
            page,
            page_size: 6,
            total_pages,
        }
    }

    #[test]
    fn test_render_nav_markers() {
        assert_eq!(render_nav(&result(1, 3)), "[1] 2 3  next >");
        assert_eq!(render_nav(&result(2, 3)), "< prev  1 [2] 3  next >");
        assert_eq!(render_nav(&result(3, 3)), "< prev  1 2 [3]");
        assert_eq!(render_nav(&result(1, 1)), "[1]");
    }

    #[test]
    fn test_render_past_last_page() {
        let out = render_page(&result(5, 3));
        assert!(out.contains("past the last page"));
        assert!(out.ends_with("< prev  1 2 3\n"));
    }

    #[test]
    fn test_render_empty_result() {
        let page = PaginatedResult {
            items: Vec::new(),
            total_items: 0,
            page: 1,
            page_size: 6,
            total_pages: 0,
        };
        assert_eq!(render_page(&page), "No topics match these filters.\n");
    }
}
