//! Derived text-block records.

use serde::Serialize;

use super::geometry::BBox;

/// A text block derived from one top-level container: its text plus the
/// representative font metadata aggregated over the nested characters.
///
/// Blocks exist only transiently during a single extraction call.
#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    /// Trimmed text of the block.
    pub text: String,

    /// Page number the block was found on (1-indexed).
    pub page_number: u32,

    /// Most frequent font name among the block's characters, `None` when
    /// the block contains no characters.
    pub font_name: Option<String>,

    /// Mean font size of the block's characters, rounded to 2 decimals;
    /// 0.0 when the block contains no characters.
    pub font_size: f32,

    /// Bounding box of the source container.
    pub bbox: BBox,

    /// Width of the bounding box.
    pub width: f32,

    /// Height of the bounding box.
    pub height: f32,
}

/// Headers and footers recurring across the scanned page window.
///
/// Entries within each list carry no particular order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneReport {
    /// Text recurring in the header zone.
    pub headers: Vec<String>,

    /// Text recurring in the footer zone.
    pub footers: Vec<String>,
}

impl ZoneReport {
    /// Whether neither zone produced any recurring text.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.footers.is_empty()
    }
}
