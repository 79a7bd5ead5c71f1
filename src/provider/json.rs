//! Bundled layout providers: JSON-backed and in-memory.

use std::collections::HashMap;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::PageLayout;

use super::{Destination, LayoutProvider, OutlineNode, ReadSeek};

/// A whole document's layout in interchange form: pages of primitives,
/// the raw outline, and the named-destination table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentLayout {
    /// Pages in document order.
    pub pages: Vec<PageLayout>,

    /// Raw outline entries in traversal order.
    #[serde(default)]
    pub outline: Vec<OutlineNode>,

    /// Named destination → target page identifier.
    #[serde(default)]
    pub destinations: HashMap<String, u64>,
}

impl DocumentLayout {
    fn find_page(&self, number: u32) -> Option<&PageLayout> {
        self.pages.iter().find(|p| p.number == number)
    }

    fn resolve(&self, dest: &Destination) -> Result<u64> {
        match dest {
            Destination::PageId(id) => Ok(*id),
            Destination::Named(name) => self
                .destinations
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnresolvedDestination(name.clone())),
        }
    }
}

/// Provider that deserializes a [`DocumentLayout`] from a JSON byte
/// stream.
///
/// The document is re-read on every call; nothing is cached between
/// calls, matching the per-call materialization contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLayoutProvider;

impl JsonLayoutProvider {
    /// Create a JSON layout provider.
    pub fn new() -> Self {
        Self
    }

    fn load(&self, stream: &mut dyn ReadSeek) -> Result<DocumentLayout> {
        serde_json::from_reader(BufReader::new(stream))
            .map_err(|e| Error::MalformedLayout(e.to_string()))
    }
}

impl LayoutProvider for JsonLayoutProvider {
    fn page_count(&self, stream: &mut dyn ReadSeek) -> Result<u32> {
        Ok(self.load(stream)?.pages.len() as u32)
    }

    fn page(&self, stream: &mut dyn ReadSeek, number: u32) -> Result<Option<PageLayout>> {
        let doc = self.load(stream)?;
        Ok(doc.pages.into_iter().find(|p| p.number == number))
    }

    fn pages(&self, stream: &mut dyn ReadSeek, first: u32, last: u32) -> Result<Vec<PageLayout>> {
        // One parse covers the whole range
        let doc = self.load(stream)?;
        Ok(doc
            .pages
            .into_iter()
            .filter(|p| p.number >= first && p.number <= last)
            .collect())
    }

    fn page_identifiers(&self, stream: &mut dyn ReadSeek) -> Result<Vec<u64>> {
        Ok(self.load(stream)?.pages.iter().map(|p| p.id).collect())
    }

    fn outline(&self, stream: &mut dyn ReadSeek) -> Result<Vec<OutlineNode>> {
        Ok(self.load(stream)?.outline)
    }

    fn resolve_destination(&self, stream: &mut dyn ReadSeek, dest: &Destination) -> Result<u64> {
        self.load(stream)?.resolve(dest)
    }
}

/// Provider over a layout already materialized in memory.
///
/// Ignores the byte stream entirely; the fixture path for tests and for
/// callers that obtained a [`DocumentLayout`] elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    layout: DocumentLayout,
}

impl StaticLayout {
    /// Wrap an in-memory layout.
    pub fn new(layout: DocumentLayout) -> Self {
        Self { layout }
    }

    /// Borrow the wrapped layout.
    pub fn layout(&self) -> &DocumentLayout {
        &self.layout
    }
}

impl LayoutProvider for StaticLayout {
    fn page_count(&self, _stream: &mut dyn ReadSeek) -> Result<u32> {
        Ok(self.layout.pages.len() as u32)
    }

    fn page(&self, _stream: &mut dyn ReadSeek, number: u32) -> Result<Option<PageLayout>> {
        Ok(self.layout.find_page(number).cloned())
    }

    fn pages(&self, _stream: &mut dyn ReadSeek, first: u32, last: u32) -> Result<Vec<PageLayout>> {
        Ok(self
            .layout
            .pages
            .iter()
            .filter(|p| p.number >= first && p.number <= last)
            .cloned()
            .collect())
    }

    fn page_identifiers(&self, _stream: &mut dyn ReadSeek) -> Result<Vec<u64>> {
        Ok(self.layout.pages.iter().map(|p| p.id).collect())
    }

    fn outline(&self, _stream: &mut dyn ReadSeek) -> Result<Vec<OutlineNode>> {
        Ok(self.layout.outline.clone())
    }

    fn resolve_destination(&self, _stream: &mut dyn ReadSeek, dest: &Destination) -> Result<u64> {
        self.layout.resolve(dest)
    }
}
