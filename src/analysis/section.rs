//! Section segmentation: text following a header block.
//!
//! A section runs from a header block to the next block of equal or
//! larger mean font size, the heuristic stand-in for "next header of the
//! same or higher rank". Incidental large text (a pull quote) therefore
//! also terminates a section; accepted as a known limitation.

use crate::model::{BBox, TextBlock};

/// Configuration for header matching.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    /// Maximum per-coordinate distance between the requested header bbox
    /// and a block on the page.
    pub tolerance: f32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

impl SectionConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header-matching tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Collect the text of the blocks following the header at `header_bbox`.
///
/// `blocks` must already be in reading order. Returns an empty string
/// when no block matches the bbox within tolerance, or when nothing
/// smaller follows the header.
pub fn section_text(blocks: &[TextBlock], header_bbox: BBox, config: &SectionConfig) -> String {
    let header_idx = match blocks
        .iter()
        .position(|b| b.bbox.approx_eq(&header_bbox, config.tolerance))
    {
        Some(idx) => idx,
        None => return String::new(),
    };
    let header_size = blocks[header_idx].font_size;

    let mut parts: Vec<&str> = Vec::new();
    for block in &blocks[header_idx + 1..] {
        if block.font_size >= header_size {
            break;
        }
        let text = block.text.trim();
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join("\n\n")
}
