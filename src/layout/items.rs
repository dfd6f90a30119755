use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Label of a viewport-width tier such as `lg` or `xxs`.
pub type BreakpointName = String;

/// Identifier of a tile, unique within one layout.
pub type ItemId = String;

/// One positioned, sized tile in grid-cell units.
///
/// Serialized with the grid engine's wire names, so the id travels as `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutItem {
    #[serde(rename = "i")]
    pub id: ItemId,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl LayoutItem {
    pub fn new(id: impl Into<ItemId>, x: u16, y: u16, w: u16, h: u16) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }
}

/// Ordered tiles of a single grid at a single breakpoint.
pub type Layout = Vec<LayoutItem>;

/// Layout per breakpoint. Ordered so serialized snapshots are stable.
pub type LayoutsByBreakpoint = BTreeMap<BreakpointName, Layout>;

/// Shape used by the synthetic layout generators.
///
/// Even-indexed tiles sit at the origin, odd-indexed tiles at `(odd_x, odd_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePattern {
    pub w: u16,
    pub h: u16,
    pub odd_x: u16,
    pub odd_y: u16,
}

/// Container tiles of the outer grid.
pub const OUTER_TILE: TilePattern = TilePattern {
    w: 1,
    h: 1,
    odd_x: 1,
    odd_y: 1,
};

/// Tiles of each nested inner grid.
pub const INNER_TILE: TilePattern = TilePattern {
    w: 6,
    h: 2,
    odd_x: 6,
    odd_y: 1,
};

/// Generate `count` tiles with ids `"0"..` following `pattern`.
pub fn generate_layout(pattern: TilePattern, count: usize) -> Layout {
    (0..count)
        .map(|index| {
            let odd = index % 2 == 1;
            LayoutItem {
                id: index.to_string(),
                x: if odd { pattern.odd_x } else { 0 },
                y: if odd { pattern.odd_y } else { 0 },
                w: pattern.w,
                h: pattern.h,
            }
        })
        .collect()
}

pub fn generate_outer_layout(count: usize) -> Layout {
    generate_layout(OUTER_TILE, count)
}

pub fn generate_inner_layout(count: usize) -> Layout {
    generate_layout(INNER_TILE, count)
}

pub fn find_item<'a>(layout: &'a [LayoutItem], id: &str) -> Option<&'a LayoutItem> {
    layout.iter().find(|item| item.id == id)
}

pub fn has_unique_ids(layout: &[LayoutItem]) -> bool {
    let mut seen = HashSet::with_capacity(layout.len());
    layout.iter().all(|item| seen.insert(item.id.as_str()))
}
