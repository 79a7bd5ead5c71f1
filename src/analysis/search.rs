//! Keyword page search.

use std::ops::RangeInclusive;

use rayon::prelude::*;

use crate::model::PageLayout;

use super::flatten;
use super::order;

/// Configuration for keyword search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Match case exactly instead of case-folding both sides.
    pub case_sensitive: bool,

    /// Inclusive page-number bounds; the whole document when `None`.
    pub pages: Option<RangeInclusive<u32>>,
}

impl SearchConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable case-sensitive matching.
    pub fn with_case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    /// Restrict the search to an inclusive page range.
    pub fn with_pages(mut self, pages: RangeInclusive<u32>) -> Self {
        self.pages = Some(pages);
        self
    }
}

/// Page numbers whose text contains `keyword`, in the order the pages
/// were given.
///
/// Pages are independent once materialized, so matching fans out across
/// threads; the collect keeps input order, so observable output is
/// identical to a sequential scan.
pub fn search_pages(pages: &[PageLayout], keyword: &str, config: &SearchConfig) -> Vec<u32> {
    if keyword.is_empty() {
        return Vec::new();
    }
    let needle = if config.case_sensitive {
        keyword.to_string()
    } else {
        keyword.to_lowercase()
    };

    pages
        .par_iter()
        .filter_map(|page| {
            let text = page_search_text(page);
            let matched = if config.case_sensitive {
                text.contains(&needle)
            } else {
                text.to_lowercase().contains(&needle)
            };
            matched.then_some(page.number)
        })
        .collect()
}

/// Line-granularity page text for matching: every minimal text unit in
/// reading order, joined by single newlines.
fn page_search_text(page: &PageLayout) -> String {
    let items: Vec<(f32, String)> = flatten::text_units(&page.primitives)
        .filter_map(|unit| unit.text().map(|text| (unit.bbox().top(), text)))
        .collect();
    order::linearize(items, "\n")
}
