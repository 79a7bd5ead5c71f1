//! Layout heuristics: the algorithms deriving document structure from
//! per-page primitives.
//!
//! Pure functions over materialized pages live in the submodules; the
//! [`Analyzer`] ties them to a byte stream and a layout provider.

mod analyzer;
mod blocks;
mod flatten;
mod order;
mod region;
mod search;
mod section;
mod tables;
mod toc;
mod zones;

pub use analyzer::Analyzer;
pub use blocks::{collect_blocks, profile, FontProfile};
pub use flatten::{descendants, text_units, top_level_containers, Descendants, TextUnits};
pub use order::{linearize, sort_reading_order};
pub use region::{region_text, text_between};
pub use search::{search_pages, SearchConfig};
pub use section::{section_text, SectionConfig};
pub use tables::{
    detect_regions, merge_overlapping, split_rows, two_column_records, TableConfig,
};
pub use toc::{resolve_outline, PageIdentifierMap};
pub use zones::{ZoneConfig, ZoneScan};
