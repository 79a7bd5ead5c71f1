//! Flattening of the per-page primitive tree.
//!
//! Providers hand over a hierarchical tree (text boxes holding line
//! groupings holding characters). The heuristics all work on flat
//! sequences; this module supplies the traversals they select from.

use crate::model::{PageLayout, Primitive};

/// Lazy depth-first iterator over a primitive forest.
///
/// Visits every node exactly once, in preorder, descending into any
/// container regardless of depth. Backed by an explicit stack; nesting
/// depth never touches the call stack.
pub struct Descendants<'a> {
    stack: Vec<&'a Primitive>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Primitive;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Primitive::Container { children, .. } = node {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

/// All primitives under `roots`, depth first.
pub fn descendants(roots: &[Primitive]) -> Descendants<'_> {
    Descendants {
        stack: roots.iter().rev().collect(),
    }
}

/// Minimal text units under `roots`: the deepest containers plus any
/// character not wrapped in one.
///
/// Every character glyph is covered by exactly one yielded unit, so
/// concatenating unit texts never duplicates content. Containers that
/// hold further containers are descended into, not yielded.
pub struct TextUnits<'a> {
    stack: Vec<&'a Primitive>,
}

impl<'a> Iterator for TextUnits<'a> {
    type Item = &'a Primitive;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Primitive::Container { children, .. } => {
                    if children
                        .iter()
                        .any(|c| matches!(c, Primitive::Container { .. }))
                    {
                        self.stack.extend(children.iter().rev());
                    } else {
                        return Some(node);
                    }
                }
                Primitive::Character { .. } => return Some(node),
                _ => {}
            }
        }
        None
    }
}

/// Minimal text units under `roots`, depth first.
pub fn text_units(roots: &[Primitive]) -> TextUnits<'_> {
    TextUnits {
        stack: roots.iter().rev().collect(),
    }
}

/// The page's top-level text containers, in provider order.
pub fn top_level_containers(page: &PageLayout) -> impl Iterator<Item = &Primitive> {
    page.primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Container { .. }))
}
