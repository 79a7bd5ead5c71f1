//! Document analyzer: the exposed operations over one byte stream.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{Error, Result};
use crate::model::{
    BBox, OutlineEntry, PageLayout, TableCandidate, TableRecord, TextBlock, ZoneReport,
};
use crate::provider::LayoutProvider;

use super::search::{self, SearchConfig};
use super::section::{self, SectionConfig};
use super::tables::{self, TableConfig};
use super::toc::{self, PageIdentifierMap};
use super::zones::{ZoneConfig, ZoneScan};
use super::{blocks, flatten, order, region};

/// Derives document structure from a byte stream through a layout
/// provider.
///
/// The analyzer owns the stream and rewinds it before every provider
/// call, so independent operations can be issued in any sequence without
/// the caller managing the cursor. Operations are synchronous and
/// process one page (or one scan window) to completion.
///
/// Requests for content that does not exist (a page out of range, a
/// region with no text, a header bbox matching nothing) log a
/// diagnostic and return an empty result. Only acquisition and provider
/// failures surface as errors.
pub struct Analyzer<R, P> {
    stream: R,
    provider: P,
}

impl<R: Read + Seek, P: LayoutProvider> Analyzer<R, P> {
    /// Create an analyzer over a stream and a layout provider.
    pub fn new(stream: R, provider: P) -> Self {
        Self { stream, provider }
    }

    /// Consume the analyzer, returning the stream and provider.
    pub fn into_parts(self) -> (R, P) {
        (self.stream, self.provider)
    }

    fn rewind(&mut self) -> Result<()> {
        self.stream.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    fn load_page(&mut self, number: u32) -> Result<Option<PageLayout>> {
        self.rewind()?;
        let page = self.provider.page(&mut self.stream, number)?;
        if page.is_none() {
            log::warn!("page {} is out of range", number);
        }
        Ok(page)
    }

    /// Total number of pages.
    ///
    /// A page tree that cannot be enumerated degrades to 0 with a logged
    /// error rather than failing the call.
    pub fn page_count(&mut self) -> Result<u32> {
        self.rewind()?;
        match self.provider.page_count(&mut self.stream) {
            Ok(count) => Ok(count),
            Err(Error::MalformedLayout(message)) => {
                log::error!("could not enumerate pages: {}", message);
                Ok(0)
            }
            Err(err) => Err(err),
        }
    }

    /// Full text of a page: top-level text containers in reading order,
    /// separated by blank lines. Empty for a missing page.
    pub fn page_text(&mut self, number: u32) -> Result<String> {
        let page = match self.load_page(number)? {
            Some(page) => page,
            None => return Ok(String::new()),
        };
        let items: Vec<(f32, String)> = flatten::top_level_containers(&page)
            .filter_map(|c| c.text().map(|text| (c.bbox().top(), text)))
            .collect();
        Ok(order::linearize(items, "\n\n"))
    }

    /// Text blocks of a page with font metadata, in reading order.
    pub fn text_blocks(&mut self, number: u32) -> Result<Vec<TextBlock>> {
        Ok(match self.load_page(number)? {
            Some(page) => blocks::collect_blocks(&page),
            None => Vec::new(),
        })
    }

    /// Text of the blocks lying entirely between two y-coordinates.
    pub fn text_between(&mut self, number: u32, upper_y: f32, lower_y: f32) -> Result<String> {
        Ok(match self.load_page(number)? {
            Some(page) => region::text_between(&page, upper_y, lower_y),
            None => String::new(),
        })
    }

    /// Section content following the header block at `header_bbox`.
    pub fn section_after_header(
        &mut self,
        number: u32,
        header_bbox: BBox,
        config: &SectionConfig,
    ) -> Result<String> {
        let page = match self.load_page(number)? {
            Some(page) => page,
            None => return Ok(String::new()),
        };
        let page_blocks = blocks::collect_blocks(&page);
        Ok(section::section_text(&page_blocks, header_bbox, config))
    }

    /// Headers and footers recurring over the scan window.
    pub fn headers_and_footers(&mut self, config: &ZoneConfig) -> Result<ZoneReport> {
        if config.scan_pages == 0 {
            return Ok(ZoneReport::default());
        }
        self.rewind()?;
        let pages = self.provider.pages(&mut self.stream, 1, config.scan_pages)?;
        let mut scan = ZoneScan::new();
        for page in &pages {
            scan.observe(page, config);
        }
        Ok(scan.classify(config))
    }

    /// Candidate table regions on a page, merged and confidence-filtered.
    pub fn detect_tables(
        &mut self,
        number: u32,
        config: &TableConfig,
    ) -> Result<Vec<TableCandidate>> {
        Ok(match self.load_page(number)? {
            Some(page) => tables::detect_regions(&page, config),
            None => Vec::new(),
        })
    }

    /// Text inside an arbitrary bounding box, in reading order.
    pub fn text_in_region(&mut self, number: u32, region_bbox: BBox) -> Result<String> {
        Ok(match self.load_page(number)? {
            Some(page) => region::region_text(&page, region_bbox),
            None => String::new(),
        })
    }

    /// Naive two-column records from the text inside a bounding box.
    pub fn table_records(&mut self, number: u32, region_bbox: BBox) -> Result<Vec<TableRecord>> {
        let raw = self.text_in_region(number, region_bbox)?;
        Ok(tables::two_column_records(tables::split_rows(&raw)))
    }

    /// Resolved table of contents, one entry per outline node.
    pub fn table_of_contents(&mut self) -> Result<Vec<OutlineEntry>> {
        self.rewind()?;
        let identifiers = self.provider.page_identifiers(&mut self.stream)?;
        let map = PageIdentifierMap::new(&identifiers);

        self.rewind()?;
        let nodes = self.provider.outline(&mut self.stream)?;

        let provider = &self.provider;
        let stream = &mut self.stream;
        Ok(toc::resolve_outline(&map, &nodes, |dest| {
            stream.seek(SeekFrom::Start(0))?;
            provider.resolve_destination(&mut *stream, dest)
        }))
    }

    /// Pages containing `keyword`, ascending.
    pub fn find_pages_with_keyword(
        &mut self,
        keyword: &str,
        config: &SearchConfig,
    ) -> Result<Vec<u32>> {
        let count = self.page_count()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let (first, last) = match &config.pages {
            Some(range) => ((*range.start()).max(1), (*range.end()).min(count)),
            None => (1, count),
        };
        if first > last {
            return Ok(Vec::new());
        }
        self.rewind()?;
        let pages = self.provider.pages(&mut self.stream, first, last)?;
        Ok(search::search_pages(&pages, keyword, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Primitive;
    use crate::provider::{DocumentLayout, StaticLayout};
    use std::io::Cursor;

    fn word(text: &str, x: f32, y: f32, size: f32) -> Primitive {
        let chars = text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                Primitive::character(
                    BBox::new(
                        x + size * 0.6 * i as f32,
                        y,
                        x + size * 0.6 * (i + 1) as f32,
                        y + size,
                    ),
                    c.to_string(),
                    "Helvetica",
                    size,
                )
            })
            .collect();
        Primitive::container(
            BBox::new(x, y, x + size * 0.6 * text.len() as f32, y + size),
            chars,
        )
    }

    fn fixture() -> StaticLayout {
        let mut page1 = PageLayout::new(101, 1, 612.0, 792.0);
        page1.push(word("Title", 72.0, 740.0, 18.0));
        page1.push(word("Opening paragraph.", 72.0, 600.0, 11.0));

        let mut page2 = PageLayout::new(102, 2, 612.0, 792.0);
        page2.push(word("Closing remarks.", 72.0, 600.0, 11.0));

        StaticLayout::new(DocumentLayout {
            pages: vec![page1, page2],
            outline: Vec::new(),
            destinations: Default::default(),
        })
    }

    fn analyzer() -> Analyzer<Cursor<Vec<u8>>, StaticLayout> {
        Analyzer::new(Cursor::new(Vec::<u8>::new()), fixture())
    }

    #[test]
    fn test_page_count() {
        assert_eq!(analyzer().page_count().unwrap(), 2);
    }

    #[test]
    fn test_page_text_reading_order() {
        let text = analyzer().page_text(1).unwrap();
        assert_eq!(text, "Title\n\nOpening paragraph.");
    }

    #[test]
    fn test_missing_page_is_empty_not_error() {
        let mut analyzer = analyzer();
        assert_eq!(analyzer.page_text(99).unwrap(), "");
        assert!(analyzer.text_blocks(99).unwrap().is_empty());
        assert!(analyzer
            .detect_tables(99, &TableConfig::default())
            .unwrap()
            .is_empty());
        assert_eq!(
            analyzer
                .text_in_region(99, BBox::new(0.0, 0.0, 612.0, 792.0))
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_operations_do_not_require_manual_seeks() {
        // Consecutive independent calls over the same analyzer
        let mut analyzer = analyzer();
        assert_eq!(analyzer.page_count().unwrap(), 2);
        assert!(!analyzer.page_text(1).unwrap().is_empty());
        assert!(!analyzer.page_text(2).unwrap().is_empty());
        assert_eq!(analyzer.page_count().unwrap(), 2);
    }

    #[test]
    fn test_keyword_search_with_range() {
        let mut analyzer = analyzer();
        let config = SearchConfig::new().with_pages(2..=9);
        assert_eq!(
            analyzer.find_pages_with_keyword("remarks", &config).unwrap(),
            vec![2]
        );
        let config = SearchConfig::new().with_pages(3..=9);
        assert!(analyzer
            .find_pages_with_keyword("remarks", &config)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_section_after_header() {
        let mut analyzer = analyzer();
        let blocks = analyzer.text_blocks(1).unwrap();
        let header = &blocks[0];
        assert_eq!(header.text, "Title");
        let section = analyzer
            .section_after_header(1, header.bbox, &SectionConfig::default())
            .unwrap();
        assert_eq!(section, "Opening paragraph.");
    }
}
