//! Font profiling and text-block construction.
//!
//! Each top-level container becomes one [`TextBlock`] carrying the text
//! plus a representative font: the most frequent font name among the
//! nested characters and the arithmetic mean of their sizes.

use std::collections::HashMap;

use crate::model::{PageLayout, Primitive, TextBlock};

use super::flatten;
use super::order;

/// Representative font of a text container.
#[derive(Debug, Clone, PartialEq)]
pub struct FontProfile {
    /// Most frequent font name; ties go to the first one encountered in
    /// traversal order. `None` when the container has no characters.
    pub name: Option<String>,

    /// Mean font size rounded to 2 decimals; 0.0 without characters.
    pub size: f32,
}

impl FontProfile {
    fn empty() -> Self {
        Self {
            name: None,
            size: 0.0,
        }
    }
}

/// Aggregate the font profile of every character nested under `container`
/// (through intermediate line groupings).
pub fn profile(container: &Primitive) -> FontProfile {
    let roots = std::slice::from_ref(container);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    let mut size_sum = 0.0f32;
    let mut chars = 0usize;

    for node in flatten::descendants(roots) {
        if let Primitive::Character {
            font_name,
            font_size,
            ..
        } = node
        {
            let count = counts.entry(font_name.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(font_name.as_str());
            }
            *count += 1;
            size_sum += font_size;
            chars += 1;
        }
    }

    if chars == 0 {
        return FontProfile::empty();
    }

    // Strictly-greater comparison over first-encounter order breaks ties
    // toward the earliest name
    let mut mode: Option<(&str, usize)> = None;
    for name in &first_seen {
        let count = counts[name];
        if mode.map_or(true, |(_, best)| count > best) {
            mode = Some((name, count));
        }
    }

    let mean = size_sum / chars as f32;
    FontProfile {
        name: mode.map(|(name, _)| name.to_string()),
        size: (mean * 100.0).round() / 100.0,
    }
}

/// Build the page's text blocks in reading order.
///
/// One block per top-level container; containers whose text trims to
/// nothing still produce a block (the section walk relies on positional
/// completeness), with an empty text field.
pub fn collect_blocks(page: &PageLayout) -> Vec<TextBlock> {
    let mut blocks: Vec<TextBlock> = flatten::top_level_containers(page)
        .map(|container| {
            let font = profile(container);
            let bbox = container.bbox();
            TextBlock {
                text: container.text().unwrap_or_default().trim().to_string(),
                page_number: page.number,
                font_name: font.name,
                font_size: font.size,
                bbox,
                width: bbox.width(),
                height: bbox.height(),
            }
        })
        .collect();
    order::sort_reading_order(&mut blocks, |b| b.bbox.top());
    blocks
}
