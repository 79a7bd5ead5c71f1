//! Text extraction from arbitrary page regions.

use crate::model::{BBox, PageLayout};

use super::flatten;
use super::order;

/// Text of every minimal text unit truly overlapping `region`, in
/// reading order, concatenated with no added separator.
///
/// Unlike whole-page extraction this works at the finest text
/// granularity, so a unit straddling the region boundary is included as
/// long as any part of it overlaps. Empty when nothing overlaps.
pub fn region_text(page: &PageLayout, region: BBox) -> String {
    let mut units: Vec<(f32, String)> = flatten::text_units(&page.primitives)
        .filter(|unit| unit.bbox().overlaps(&region))
        .filter_map(|unit| unit.text().map(|text| (unit.bbox().top(), text)))
        .collect();
    order::sort_reading_order(&mut units, |(top, _)| *top);
    units.into_iter().map(|(_, text)| text).collect()
}

/// Text of the top-level blocks lying entirely between two horizontal
/// lines, in reading order, joined by single newlines.
///
/// `upper_y` is the higher coordinate (e.g. below a top margin),
/// `lower_y` the lower one. Blocks crossing either line are excluded.
pub fn text_between(page: &PageLayout, upper_y: f32, lower_y: f32) -> String {
    let items: Vec<(f32, String)> = flatten::top_level_containers(page)
        .filter(|c| {
            let bbox = c.bbox();
            bbox.top() <= upper_y && bbox.bottom() >= lower_y
        })
        .filter_map(|c| c.text().map(|text| (c.bbox().top(), text)))
        .collect();
    order::linearize(items, "\n")
}
