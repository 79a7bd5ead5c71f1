//! Header/footer zone classification.
//!
//! Text recurring at the same vertical position across the scanned page
//! prefix is promoted to a header or footer. Candidates are bucketed by
//! `(trimmed text, bottom edge rounded to 10pt)` and counted globally
//! over the window.

use std::collections::HashMap;

use crate::model::{PageLayout, ZoneReport};

use super::flatten;

/// Configuration for the zone scan.
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    /// Number of pages scanned from the start of the document.
    pub scan_pages: u32,

    /// Fraction of page height above which text counts as header-zone.
    pub top_margin: f32,

    /// Fraction of page height below which text counts as footer-zone.
    pub bottom_margin: f32,

    /// Minimum cross-page occurrences before a candidate promotes.
    pub min_occurrence: u32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            scan_pages: 10,
            top_margin: 0.90,
            bottom_margin: 0.10,
            min_occurrence: 3,
        }
    }
}

impl ZoneConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan window size.
    pub fn with_scan_pages(mut self, pages: u32) -> Self {
        self.scan_pages = pages;
        self
    }

    /// Set the header-zone fraction.
    pub fn with_top_margin(mut self, fraction: f32) -> Self {
        self.top_margin = fraction;
        self
    }

    /// Set the footer-zone fraction.
    pub fn with_bottom_margin(mut self, fraction: f32) -> Self {
        self.bottom_margin = fraction;
        self
    }

    /// Set the promotion threshold.
    pub fn with_min_occurrence(mut self, count: u32) -> Self {
        self.min_occurrence = count;
        self
    }
}

/// Accumulates zone candidates over a scan window, then classifies.
#[derive(Debug, Default)]
pub struct ZoneScan {
    counts: HashMap<(String, i64), u32>,
    first_page_height: Option<f32>,
}

impl ZoneScan {
    /// Start an empty scan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one page's zone candidates.
    ///
    /// Zone boundaries use this page's own height; pages in one document
    /// may differ in size.
    pub fn observe(&mut self, page: &PageLayout, config: &ZoneConfig) {
        if self.first_page_height.is_none() {
            self.first_page_height = Some(page.height);
        }
        let header_y = page.height * config.top_margin;
        let footer_y = page.height * config.bottom_margin;

        for container in flatten::top_level_containers(page) {
            let text = match container.text() {
                Some(t) => t,
                None => continue,
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            let bbox = container.bbox();
            if bbox.top() > header_y || bbox.bottom() < footer_y {
                let bucket = ((bbox.bottom() / 10.0).round() * 10.0) as i64;
                *self
                    .counts
                    .entry((trimmed.to_string(), bucket))
                    .or_insert(0) += 1;
            }
        }
    }

    /// Promote candidates seen at least `min_occurrence` times.
    ///
    /// The header/footer split line is derived from the first scanned
    /// page's height only, even when later pages differ in size. Kept
    /// for compatibility with existing consumers.
    pub fn classify(self, config: &ZoneConfig) -> ZoneReport {
        let first_height = match self.first_page_height {
            Some(h) => h,
            None => return ZoneReport::default(),
        };
        let footer_line = first_height * config.bottom_margin;

        let mut report = ZoneReport::default();
        for ((text, bucket), occurrences) in self.counts {
            if occurrences < config.min_occurrence {
                continue;
            }
            if bucket as f32 > footer_line {
                report.headers.push(text);
            } else {
                report.footers.push(text);
            }
        }
        // Lists are unordered by contract; sort for reproducible output
        report.headers.sort();
        report.footers.sort();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, Primitive};

    fn text_at(text: &str, y0: f32, y1: f32) -> Primitive {
        Primitive::container(
            BBox::new(72.0, y0, 300.0, y1),
            text.chars()
                .enumerate()
                .map(|(i, c)| {
                    Primitive::character(
                        BBox::new(72.0 + 6.0 * i as f32, y0, 78.0 + 6.0 * i as f32, y1),
                        c.to_string(),
                        "Helvetica",
                        9.0,
                    )
                })
                .collect(),
        )
    }

    fn page_with(number: u32, height: f32, prims: Vec<Primitive>) -> PageLayout {
        let mut page = PageLayout::new(number as u64, number, 612.0, height);
        for p in prims {
            page.push(p);
        }
        page
    }

    #[test]
    fn test_recurring_header_promotes_at_threshold() {
        let config = ZoneConfig::new().with_scan_pages(5);
        let mut scan = ZoneScan::new();
        for n in 1..=5 {
            let prims = if n <= 3 {
                vec![text_at("Annual Report", 770.0, 780.0)]
            } else {
                vec![]
            };
            scan.observe(&page_with(n, 792.0, prims), &config);
        }
        let report = scan.classify(&config);
        assert_eq!(report.headers, vec!["Annual Report".to_string()]);
        assert!(report.footers.is_empty());
    }

    #[test]
    fn test_below_threshold_is_excluded() {
        let config = ZoneConfig::new().with_scan_pages(5);
        let mut scan = ZoneScan::new();
        for n in 1..=5 {
            let prims = if n <= 2 {
                vec![text_at("Annual Report", 770.0, 780.0)]
            } else {
                vec![]
            };
            scan.observe(&page_with(n, 792.0, prims), &config);
        }
        assert!(scan.classify(&config).is_empty());
    }

    #[test]
    fn test_footer_at_bucket_zero() {
        // "Page 1" near the bottom edge on 3 of 5 pages lands in footers
        let config = ZoneConfig::new().with_scan_pages(5);
        let mut scan = ZoneScan::new();
        for n in 1..=5 {
            let prims = if n <= 3 {
                vec![text_at("Page 1", 2.0, 12.0)]
            } else {
                vec![]
            };
            scan.observe(&page_with(n, 792.0, prims), &config);
        }
        let report = scan.classify(&config);
        assert!(report.headers.is_empty());
        assert_eq!(report.footers, vec!["Page 1".to_string()]);
    }

    #[test]
    fn test_body_text_is_ignored() {
        let config = ZoneConfig::default();
        let mut scan = ZoneScan::new();
        for n in 1..=5 {
            scan.observe(
                &page_with(n, 792.0, vec![text_at("body paragraph", 400.0, 412.0)]),
                &config,
            );
        }
        assert!(scan.classify(&config).is_empty());
    }

    #[test]
    fn test_split_line_uses_first_page_height() {
        // Pages 2 and 3 are much taller, so y=100 sits in their footer
        // zone (below 200). The split line still comes from page 1 alone,
        // where 100 clears 79.2, so the candidate lands in headers.
        let config = ZoneConfig::new().with_min_occurrence(2);
        let mut scan = ZoneScan::new();
        scan.observe(&page_with(1, 792.0, vec![]), &config);
        for n in 2..=3 {
            scan.observe(
                &page_with(n, 2000.0, vec![text_at("Chapter", 100.0, 112.0)]),
                &config,
            );
        }
        let report = scan.classify(&config);
        assert_eq!(report.headers, vec!["Chapter".to_string()]);
        assert!(report.footers.is_empty());
    }

    #[test]
    fn test_empty_scan() {
        let report = ZoneScan::new().classify(&ZoneConfig::default());
        assert!(report.is_empty());
    }
}
