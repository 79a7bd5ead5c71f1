//! Outline (table of contents) resolution.
//!
//! Walks the raw outline in traversal order and resolves each entry's
//! destination against the document's page-identifier map. Entries are
//! never dropped: whatever cannot be resolved is emitted with a symbolic
//! placeholder instead.

use std::collections::HashMap;

use crate::error::Result;
use crate::model::{OutlineEntry, PageTarget};
use crate::provider::{Destination, OutlineNode};

/// Maps page identifiers to 1-based page numbers.
///
/// Built once per document from the full page list; every identifier in
/// the page tree appears exactly once. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PageIdentifierMap {
    numbers: HashMap<u64, u32>,
}

impl PageIdentifierMap {
    /// Build the map from identifiers in document order.
    pub fn new(identifiers: &[u64]) -> Self {
        Self {
            numbers: identifiers
                .iter()
                .enumerate()
                .map(|(index, id)| (*id, index as u32 + 1))
                .collect(),
        }
    }

    /// Page number for an identifier, if known.
    pub fn page_number(&self, id: u64) -> Option<u32> {
        self.numbers.get(&id).copied()
    }

    /// Number of mapped pages.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Whether the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Resolve raw outline nodes into final entries.
///
/// `resolve` maps a destination to a page identifier; a failure there,
/// or an identifier missing from the map, yields `[Unresolved
/// Destination]` rather than an error. Emission order matches `nodes`.
pub fn resolve_outline<F>(
    map: &PageIdentifierMap,
    nodes: &[OutlineNode],
    mut resolve: F,
) -> Vec<OutlineEntry>
where
    F: FnMut(&Destination) -> Result<u64>,
{
    nodes
        .iter()
        .map(|node| {
            let target = classify(map, node, &mut resolve);
            OutlineEntry::new(node.level, node.title.clone(), target)
        })
        .collect()
}

fn classify<F>(map: &PageIdentifierMap, node: &OutlineNode, resolve: &mut F) -> PageTarget
where
    F: FnMut(&Destination) -> Result<u64>,
{
    if let Some(dest) = &node.destination {
        return match resolve(dest) {
            Ok(id) => match map.page_number(id) {
                Some(number) => PageTarget::Page(number),
                None => {
                    log::warn!(
                        "could not resolve destination for '{}': unknown page id {}",
                        node.title,
                        id
                    );
                    PageTarget::Unresolved
                }
            },
            Err(err) => {
                log::warn!("could not resolve destination for '{}': {}", node.title, err);
                PageTarget::Unresolved
            }
        };
    }

    if let Some(action) = &node.action {
        return match (&action.kind, &action.uri) {
            (Some(kind), Some(uri)) if kind == "URI" => PageTarget::Uri(uri.clone()),
            (Some(kind), _) => PageTarget::Action(kind.clone()),
            (None, _) => PageTarget::UnknownAction,
        };
    }

    PageTarget::Container
}
