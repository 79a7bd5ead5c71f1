//! Bounding-box geometry shared by all layout primitives.
//!
//! Coordinates follow the layout provider's convention: origin at the
//! bottom-left of the page, y increasing upward.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box `(x0, y0, x1, y1)`.
///
/// `(x0, y0)` is the bottom-left corner, `(x1, y1)` the top-right.
/// Serializes as a 4-tuple to match the provider interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32, f32)", into = "(f32, f32, f32, f32)")]
pub struct BBox {
    /// Left edge.
    pub x0: f32,
    /// Bottom edge.
    pub y0: f32,
    /// Right edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
}

impl BBox {
    /// Create a bounding box from its four edges.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Area of the box.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Top edge, the sort key for reading order.
    pub fn top(&self) -> f32 {
        self.y1
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y0
    }

    /// Whether `inner` lies within this box on all four edges.
    pub fn contains(&self, inner: &BBox) -> bool {
        inner.x0 >= self.x0 && inner.y0 >= self.y0 && inner.x1 <= self.x1 && inner.y1 <= self.y1
    }

    /// Whether the two boxes have a non-zero intersection.
    ///
    /// Boxes that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }

    /// Area of the intersection with `other`, zero when disjoint.
    pub fn intersection_area(&self, other: &BBox) -> f32 {
        let w = self.x1.min(other.x1) - self.x0.max(other.x0);
        let h = self.y1.min(other.y1) - self.y0.max(other.y0);
        if w > 0.0 && h > 0.0 {
            w * h
        } else {
            0.0
        }
    }

    /// The smallest box covering both `self` and `other`.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Whether all four edges match `other` within `tolerance`.
    pub fn approx_eq(&self, other: &BBox, tolerance: f32) -> bool {
        (self.x0 - other.x0).abs() <= tolerance
            && (self.y0 - other.y0).abs() <= tolerance
            && (self.x1 - other.x1).abs() <= tolerance
            && (self.y1 - other.y1).abs() <= tolerance
    }
}

impl From<(f32, f32, f32, f32)> for BBox {
    fn from((x0, y0, x1, y1): (f32, f32, f32, f32)) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl From<BBox> for (f32, f32, f32, f32) {
    fn from(b: BBox) -> Self {
        (b.x0, b.y0, b.x1, b.y1)
    }
}
