//! Table region detection and the naive cell splitter.
//!
//! A drawn rectangle big enough to hold a table is scored by how much it
//! contains: text blocks count double, rule lines single. The score maps
//! to a confidence through a logistic curve, low-confidence candidates
//! are dropped, and surviving regions that mostly cover one another are
//! merged under the higher-confidence one.

use std::cmp::Ordering;

use crate::model::{BBox, PageLayout, Primitive, TableCandidate, TableRecord};

use super::flatten;

/// Logistic steepness.
const LOGISTIC_K: f32 = 0.1;

/// Logistic midpoint: the contained-primitive score mapping to 0.5.
const LOGISTIC_X0: f32 = 30.0;

/// Fraction of a candidate's own area that must be covered by a merge
/// base before the candidate is absorbed.
const MERGE_OVERLAP: f32 = 0.5;

/// Configuration for table region detection.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Minimum rectangle area (square points) to consider.
    pub min_area: f32,

    /// Candidates at or below this confidence are dropped.
    pub confidence_threshold: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_area: 10_000.0,
            confidence_threshold: 0.7,
        }
    }
}

impl TableConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum rectangle area.
    pub fn with_min_area(mut self, area: f32) -> Self {
        self.min_area = area;
        self
    }

    /// Set the confidence threshold.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }
}

/// Detect table regions on a materialized page.
pub fn detect_regions(page: &PageLayout, config: &TableConfig) -> Vec<TableCandidate> {
    let mut rects: Vec<BBox> = Vec::new();
    let mut rule_lines: Vec<BBox> = Vec::new();
    for node in flatten::descendants(&page.primitives) {
        match node {
            Primitive::Rect { bbox } => rects.push(*bbox),
            Primitive::RuleLine { bbox } => rule_lines.push(*bbox),
            _ => {}
        }
    }
    let block_boxes: Vec<BBox> = flatten::top_level_containers(page)
        .map(|c| c.bbox())
        .collect();

    let mut candidates: Vec<TableCandidate> = Vec::new();
    for rect in rects {
        if rect.area() <= config.min_area {
            continue;
        }
        let contained_blocks = block_boxes.iter().filter(|b| rect.contains(b)).count();
        let contained_lines = rule_lines.iter().filter(|l| rect.contains(l)).count();
        let score = (2 * contained_blocks + contained_lines) as f32;
        let confidence = round3(logistic(score));
        log::debug!(
            "table candidate at {:?}: blocks={}, lines={}, score={}, confidence={}",
            rect,
            contained_blocks,
            contained_lines,
            score,
            confidence
        );
        if confidence > config.confidence_threshold {
            candidates.push(TableCandidate::new(rect, confidence));
        }
    }

    merge_overlapping(candidates)
}

/// Merge candidates that mostly cover one another.
///
/// A fold over the confidence-descending list: each candidate is either
/// absorbed by the first survivor covering more than half of the
/// candidate's own area (growing that survivor's bbox to the union and
/// leaving its confidence untouched), or kept as a survivor itself.
/// Idempotent: re-running on its own output changes nothing.
pub fn merge_overlapping(mut candidates: Vec<TableCandidate>) -> Vec<TableCandidate> {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let mut merged: Vec<TableCandidate> = Vec::new();
    for candidate in candidates {
        let own_area = candidate.bbox.area();
        let base = merged.iter_mut().find(|base| {
            own_area > 0.0 && candidate.bbox.intersection_area(&base.bbox) / own_area > MERGE_OVERLAP
        });
        match base {
            Some(base) => base.bbox = base.bbox.union(&candidate.bbox),
            None => merged.push(candidate),
        }
    }
    merged
}

fn logistic(score: f32) -> f32 {
    1.0 / (1.0 + (-LOGISTIC_K * (score - LOGISTIC_X0)).exp())
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Split raw region text into whitespace-delimited rows of cells.
///
/// Blank lines are dropped. Deliberately naive: no column inference, no
/// cell merging.
pub fn split_rows(raw_text: &str) -> Vec<Vec<String>> {
    raw_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Map split rows onto the generic two-column record shape, keeping only
/// rows with at least two cells.
pub fn two_column_records(rows: Vec<Vec<String>>) -> Vec<TableRecord> {
    rows.into_iter()
        .filter(|row| row.len() >= 2)
        .map(|mut row| {
            let column2 = row.swap_remove(1);
            let column1 = row.swap_remove(0);
            TableRecord { column1, column2 }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(prims: Vec<Primitive>) -> PageLayout {
        let mut page = PageLayout::new(1, 1, 612.0, 792.0);
        for p in prims {
            page.push(p);
        }
        page
    }

    fn text_block(bbox: BBox) -> Primitive {
        Primitive::container(
            bbox,
            vec![Primitive::character(bbox, "x", "Helvetica", 10.0)],
        )
    }

    /// A rectangle packed with enough content to clear the default
    /// threshold: 20 blocks and 4 lines give score 44.
    fn dense_table(origin_x: f32, origin_y: f32) -> Vec<Primitive> {
        let mut prims = vec![Primitive::rect(BBox::new(
            origin_x,
            origin_y,
            origin_x + 300.0,
            origin_y + 250.0,
        ))];
        for row in 0..5 {
            let y = origin_y + 10.0 + 40.0 * row as f32;
            for col in 0..4 {
                let x = origin_x + 10.0 + 70.0 * col as f32;
                prims.push(text_block(BBox::new(x, y, x + 50.0, y + 12.0)));
            }
            if row > 0 {
                prims.push(Primitive::rule_line(BBox::new(
                    origin_x + 5.0,
                    y - 5.0,
                    origin_x + 295.0,
                    y - 4.0,
                )));
            }
        }
        prims
    }

    #[test]
    fn test_dense_rectangle_detected() {
        let page = page_with(dense_table(100.0, 300.0));
        let tables = detect_regions(&page, &TableConfig::default());
        assert_eq!(tables.len(), 1);
        // score 44 -> 1/(1+e^(-1.4)) ≈ 0.802
        assert_eq!(tables[0].confidence, 0.802);
    }

    #[test]
    fn test_empty_rectangle_scores_near_zero() {
        let page = page_with(vec![Primitive::rect(BBox::new(0.0, 0.0, 200.0, 200.0))]);
        let tables = detect_regions(&page, &TableConfig::default());
        assert!(tables.is_empty());

        // score 0 -> 1/(1+e^3) ≈ 0.047; visible with the threshold lowered
        let lax = TableConfig::new().with_confidence_threshold(0.01);
        let tables = detect_regions(&page, &lax);
        assert_eq!(tables.len(), 1);
        assert!((tables[0].confidence - 0.047).abs() < 1e-6);
    }

    #[test]
    fn test_small_rectangle_ignored() {
        // 50 x 50 = 2500 < 10000
        let page = page_with(vec![Primitive::rect(BBox::new(0.0, 0.0, 50.0, 50.0))]);
        let lax = TableConfig::new().with_confidence_threshold(0.0);
        assert!(detect_regions(&page, &lax).is_empty());
    }

    #[test]
    fn test_confidence_rounded_to_three_decimals() {
        let c = round3(logistic(0.0));
        assert_eq!(c, 0.047);
    }

    #[test]
    fn test_merge_absorbs_contained_candidate() {
        let big = TableCandidate::new(BBox::new(0.0, 0.0, 400.0, 400.0), 0.9);
        let inner = TableCandidate::new(BBox::new(50.0, 50.0, 150.0, 150.0), 0.8);
        let merged = merge_overlapping(vec![inner, big]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].confidence, 0.9);
        assert_eq!(merged[0].bbox, BBox::new(0.0, 0.0, 400.0, 400.0));
    }

    #[test]
    fn test_merge_grows_base_bbox() {
        let base = TableCandidate::new(BBox::new(0.0, 0.0, 100.0, 100.0), 0.9);
        // 60% of this candidate lies inside the base
        let hanging = TableCandidate::new(BBox::new(40.0, 0.0, 140.0, 100.0), 0.8);
        let merged = merge_overlapping(vec![base, hanging]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].bbox, BBox::new(0.0, 0.0, 140.0, 100.0));
        assert_eq!(merged[0].confidence, 0.9);
    }

    #[test]
    fn test_merge_keeps_disjoint_candidates() {
        let a = TableCandidate::new(BBox::new(0.0, 0.0, 100.0, 100.0), 0.9);
        let b = TableCandidate::new(BBox::new(200.0, 200.0, 300.0, 300.0), 0.8);
        let merged = merge_overlapping(vec![a, b]);
        assert_eq!(merged.len(), 2);
        // Highest confidence first
        assert_eq!(merged[0].confidence, 0.9);
    }

    #[test]
    fn test_merge_idempotent() {
        let candidates = vec![
            TableCandidate::new(BBox::new(0.0, 0.0, 400.0, 400.0), 0.9),
            TableCandidate::new(BBox::new(350.0, 350.0, 500.0, 500.0), 0.85),
            TableCandidate::new(BBox::new(50.0, 50.0, 150.0, 150.0), 0.8),
        ];
        let once = merge_overlapping(candidates);
        let twice = merge_overlapping(once.clone());
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.bbox, b.bbox);
            assert_eq!(a.confidence, b.confidence);
        }
    }

    #[test]
    fn test_split_rows() {
        let rows = split_rows("Name Age\n\nAlice 30\nBob 25\n");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Name", "Age"]);
        assert_eq!(rows[2], vec!["Bob", "25"]);
    }

    #[test]
    fn test_two_column_records_drop_short_rows() {
        let rows = vec![
            vec!["Name".to_string(), "Age".to_string(), "City".to_string()],
            vec!["Alice".to_string()],
            vec!["Bob".to_string(), "25".to_string()],
        ];
        let records = two_column_records(rows);
        assert_eq!(
            records,
            vec![
                TableRecord {
                    column1: "Name".to_string(),
                    column2: "Age".to_string()
                },
                TableRecord {
                    column1: "Bob".to_string(),
                    column2: "25".to_string()
                },
            ]
        );
    }
}
