//! Reading-order reconstruction.
//!
//! Reading order is top-to-bottom by descending top edge. No secondary
//! key: items sharing a top edge keep their relative input order (the
//! sort is stable), which for provider output means emission order.

use std::cmp::Ordering;

/// Stable-sort `items` into reading order by the given top-edge accessor.
pub fn sort_reading_order<T>(items: &mut [T], top_edge: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| {
        top_edge(b)
            .partial_cmp(&top_edge(a))
            .unwrap_or(Ordering::Equal)
    });
}

/// Order `(top_edge, text)` pairs top-to-bottom and join their trimmed
/// text with `separator`, skipping entries that trim to nothing.
///
/// Returns an empty string when nothing qualifies.
pub fn linearize(mut items: Vec<(f32, String)>, separator: &str) -> String {
    sort_reading_order(&mut items, |(top, _)| *top);
    items
        .iter()
        .map(|(_, text)| text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
