//! # pagesift
//!
//! Document-structure heuristics over PDF layout primitives.
//!
//! An external layout provider parses raw bytes into per-page trees of
//! positioned primitives (text containers, characters with font
//! metadata, rectangles, rule lines). This library consumes those
//! primitives and derives the structure people actually ask about:
//! reading-order text, recurring headers and footers, the content span
//! of a section, candidate table regions with confidences, and a
//! resolved table of contents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagesift::{open_layout, TableConfig, ZoneConfig};
//!
//! fn main() -> pagesift::Result<()> {
//!     // Open a serialized layout document
//!     let mut analyzer = open_layout("document.layout.json")?;
//!
//!     println!("{} pages", analyzer.page_count()?);
//!     println!("{}", analyzer.page_text(5)?);
//!
//!     let zones = analyzer.headers_and_footers(&ZoneConfig::default())?;
//!     println!("headers: {:?}", zones.headers);
//!
//!     for table in analyzer.detect_tables(27, &TableConfig::default())? {
//!         println!("table at {:?} ({})", table.bbox, table.confidence);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order**: top-to-bottom text reconstruction per page
//! - **Zones**: header/footer detection by cross-page recurrence
//! - **Sections**: content following a header, bounded by font rank
//! - **Tables**: rectangle density scoring with logistic confidence
//! - **TOC**: outline destinations resolved to page numbers
//! - **Sources**: local paths or cached remote object references

pub mod analysis;
pub mod error;
pub mod model;
pub mod provider;
pub mod source;

// Re-export commonly used types
pub use analysis::{
    Analyzer, FontProfile, SearchConfig, SectionConfig, TableConfig, ZoneConfig, ZoneScan,
};
pub use error::{Error, Result};
pub use model::{
    BBox, OutlineEntry, PageLayout, PageTarget, Primitive, TableCandidate, TableRecord, TextBlock,
    ZoneReport,
};
pub use provider::{
    Destination, DocumentLayout, JsonLayoutProvider, LayoutProvider, OutlineNode, RawAction,
    StaticLayout,
};
pub use source::{ByteSource, ObjectFetcher, RemoteDisabled, SourceOptions};

use std::path::Path;

/// Open a local serialized layout document for analysis.
///
/// Convenience wrapper pairing [`source::open_document`] with the
/// bundled [`JsonLayoutProvider`].
///
/// # Example
///
/// ```no_run
/// let mut analyzer = pagesift::open_layout("document.layout.json").unwrap();
/// let toc = analyzer.table_of_contents().unwrap();
/// ```
pub fn open_layout<P: AsRef<Path>>(path: P) -> Result<Analyzer<ByteSource, JsonLayoutProvider>> {
    let reference = path.as_ref().to_string_lossy().into_owned();
    let stream = source::open_document(&reference, &SourceOptions::default(), &RemoteDisabled)?;
    Ok(Analyzer::new(stream, JsonLayoutProvider::new()))
}

/// Open a document reference (local path or `s3://` object) through a
/// caller-supplied fetcher.
pub fn open_layout_with(
    reference: &str,
    options: &SourceOptions,
    fetcher: &dyn ObjectFetcher,
) -> Result<Analyzer<ByteSource, JsonLayoutProvider>> {
    let stream = source::open_document(reference, options, fetcher)?;
    Ok(Analyzer::new(stream, JsonLayoutProvider::new()))
}
