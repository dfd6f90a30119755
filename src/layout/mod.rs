//! Layout module orchestrator.
//!
//! Downstream code imports layout types from here while generation details
//! live in the private `items` module.

mod compaction;
mod items;

pub use compaction::CompactionMode;
pub use items::{
    BreakpointName, INNER_TILE, ItemId, Layout, LayoutItem, LayoutsByBreakpoint, OUTER_TILE,
    TilePattern, find_item, generate_inner_layout, generate_layout, generate_outer_layout,
    has_unique_ids,
};
