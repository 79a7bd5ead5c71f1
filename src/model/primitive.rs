//! Positioned layout primitives as produced by the layout provider.
//!
//! A page is a tree: text containers nest arbitrarily deep (a text box
//! holds line groupings, a line holds characters), while rectangles and
//! rule lines are flat geometry. The tree is materialized per processing
//! call and dropped afterwards; nothing in this module caches.

use serde::{Deserialize, Serialize};

use super::geometry::BBox;

/// A single positioned element on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// A text container: a text box or a line grouping with nested children.
    Container {
        /// Bounding box of the whole container.
        bbox: BBox,
        /// Nested primitives, in reading order as emitted by the provider.
        children: Vec<Primitive>,
    },

    /// A single positioned character with font metadata.
    Character {
        /// Bounding box of the glyph.
        bbox: BBox,
        /// The character's text, including synthetic spaces and newlines.
        glyph: String,
        /// Font name as reported by the provider (e.g. "Helvetica-Bold").
        font_name: String,
        /// Font size in points.
        font_size: f32,
    },

    /// A filled or stroked rectangle.
    Rect {
        /// Bounding box of the rectangle.
        bbox: BBox,
    },

    /// A straight painted line.
    RuleLine {
        /// Bounding box of the line.
        bbox: BBox,
    },
}

impl Primitive {
    /// Build a text container.
    pub fn container(bbox: BBox, children: Vec<Primitive>) -> Self {
        Primitive::Container { bbox, children }
    }

    /// Build a character primitive.
    pub fn character(
        bbox: BBox,
        glyph: impl Into<String>,
        font_name: impl Into<String>,
        font_size: f32,
    ) -> Self {
        Primitive::Character {
            bbox,
            glyph: glyph.into(),
            font_name: font_name.into(),
            font_size,
        }
    }

    /// Build a rectangle primitive.
    pub fn rect(bbox: BBox) -> Self {
        Primitive::Rect { bbox }
    }

    /// Build a rule-line primitive.
    pub fn rule_line(bbox: BBox) -> Self {
        Primitive::RuleLine { bbox }
    }

    /// The primitive's bounding box.
    pub fn bbox(&self) -> BBox {
        match self {
            Primitive::Container { bbox, .. }
            | Primitive::Character { bbox, .. }
            | Primitive::Rect { bbox }
            | Primitive::RuleLine { bbox } => *bbox,
        }
    }

    /// Whether this primitive exposes extractable text.
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self,
            Primitive::Container { .. } | Primitive::Character { .. }
        )
    }

    /// Extractable text of this primitive, `None` for pure geometry.
    ///
    /// For a container this is the depth-first concatenation of every
    /// nested character glyph. Traversal uses an explicit stack so that
    /// pathological nesting cannot exhaust the call stack.
    pub fn text(&self) -> Option<String> {
        match self {
            Primitive::Rect { .. } | Primitive::RuleLine { .. } => None,
            Primitive::Character { glyph, .. } => Some(glyph.clone()),
            Primitive::Container { children, .. } => {
                let mut out = String::new();
                let mut stack: Vec<&Primitive> = children.iter().rev().collect();
                while let Some(node) = stack.pop() {
                    match node {
                        Primitive::Character { glyph, .. } => out.push_str(glyph),
                        Primitive::Container { children, .. } => {
                            stack.extend(children.iter().rev());
                        }
                        _ => {}
                    }
                }
                Some(out)
            }
        }
    }
}

/// One page as materialized by the layout provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    /// Stable page identifier, unique within the document.
    pub id: u64,

    /// Page number (1-indexed).
    pub number: u32,

    /// Page width in points.
    pub width: f32,

    /// Page height in points.
    pub height: f32,

    /// Top-level primitives of the page.
    pub primitives: Vec<Primitive>,
}

impl PageLayout {
    /// Create an empty page.
    pub fn new(id: u64, number: u32, width: f32, height: f32) -> Self {
        Self {
            id,
            number,
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Add a top-level primitive to the page.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}
