//! Table detection output types.

use serde::Serialize;

use super::geometry::BBox;

/// A candidate table region with a detection confidence.
#[derive(Debug, Clone, Serialize)]
pub struct TableCandidate {
    /// Bounding box of the region. Grows to the union of absorbed
    /// candidates during the merge pass.
    pub bbox: BBox,

    /// Detection confidence in `[0, 1]`, rounded to 3 decimals. Fixed at
    /// detection time; merging never changes it.
    pub confidence: f32,
}

impl TableCandidate {
    /// Create a candidate region.
    pub fn new(bbox: BBox, confidence: f32) -> Self {
        Self { bbox, confidence }
    }
}

/// One row of the naive two-column cell mapping.
///
/// Produced by the whitespace splitter over raw region text; this is a
/// placeholder, not a faithful grid reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRecord {
    /// First whitespace-delimited cell of the row.
    pub column1: String,

    /// Second whitespace-delimited cell of the row.
    pub column2: String,
}
