//! The layout-provider seam.
//!
//! PDF byte decoding is an external collaborator: something else parses
//! raw bytes into a page tree of positioned primitives, an outline, and a
//! destination table. This module defines the interface the heuristics
//! consume, plus two bundled implementations: a JSON-backed provider for
//! serialized layout documents and an in-memory one for fixtures.
//!
//! Every trait method receives the byte stream positioned at offset zero;
//! the [`Analyzer`](crate::analysis::Analyzer) owns the stream and rewinds
//! it before each call. Implementations must not assume any state survives
//! between calls, and must not cache materialized pages.

mod json;

pub use json::{DocumentLayout, JsonLayoutProvider, StaticLayout};

use std::io::{Read, Seek};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::PageLayout;

/// Object-safe alias for a seekable byte stream.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// An outline entry's jump target before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// A named destination to be looked up in the document's table.
    Named(String),

    /// An explicit destination carrying the target page identifier.
    PageId(u64),
}

/// An outline entry's action, when it has no destination.
///
/// Mirrors the loose action dictionaries providers emit: `kind` is the
/// action's type name, `uri` its payload for URI actions. Either may be
/// absent on malformed entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    /// Action kind (e.g. "URI", "GoToR"), `None` when the shape was not
    /// recognized.
    #[serde(default)]
    pub kind: Option<String>,

    /// Decoded URI payload for URI actions.
    #[serde(default)]
    pub uri: Option<String>,
}

/// One raw outline entry as walked by the provider, pre-resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Nesting depth as given; never re-nested.
    pub level: u32,

    /// Entry title.
    pub title: String,

    /// Jump destination, if any.
    #[serde(default)]
    pub destination: Option<Destination>,

    /// Action, consulted only when there is no destination.
    #[serde(default)]
    pub action: Option<RawAction>,
}

/// Materializes layout structure from a document byte stream.
///
/// Each call stands alone: the stream arrives rewound, the result is owned
/// by the caller and dropped after use.
pub trait LayoutProvider {
    /// Number of pages in the document.
    fn page_count(&self, stream: &mut dyn ReadSeek) -> Result<u32>;

    /// Materialize one page (1-indexed). `None` when out of range.
    fn page(&self, stream: &mut dyn ReadSeek, number: u32) -> Result<Option<PageLayout>>;

    /// Materialize an inclusive page range, skipping out-of-range numbers.
    ///
    /// The default implementation rewinds and fetches page by page.
    fn pages(&self, stream: &mut dyn ReadSeek, first: u32, last: u32) -> Result<Vec<PageLayout>> {
        let mut out = Vec::new();
        for number in first..=last {
            stream.seek(std::io::SeekFrom::Start(0))?;
            match self.page(stream, number)? {
                Some(page) => out.push(page),
                None => break,
            }
        }
        Ok(out)
    }

    /// Page identifiers in document order; every page appears exactly once.
    fn page_identifiers(&self, stream: &mut dyn ReadSeek) -> Result<Vec<u64>>;

    /// Raw outline entries in traversal order.
    fn outline(&self, stream: &mut dyn ReadSeek) -> Result<Vec<OutlineNode>>;

    /// Resolve a destination to its target page identifier.
    ///
    /// Fails with [`Error::UnresolvedDestination`](crate::Error) when the
    /// destination cannot be mapped.
    fn resolve_destination(&self, stream: &mut dyn ReadSeek, dest: &Destination) -> Result<u64>;
}
