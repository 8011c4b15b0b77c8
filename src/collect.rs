//! Collectors that build keyed aggregates out of a stream of items.
//!
//! They back [`IteratorExt::grouping_by()`](crate::iter::IteratorExt::grouping_by)
//! and [`IteratorExt::to_map_merging()`](crate::iter::IteratorExt::to_map_merging),
//! but can be fed directly, or combined with adaptors, like any other collector.

mod grouping_by;
mod to_map_merging;

pub use grouping_by::*;
pub use to_map_merging::*;
