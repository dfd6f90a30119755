//! Read-only views a host renders from a state snapshot.
//!
//! [`GridProps`] carries what the grid engine is configured with for the outer
//! grid and for each nested inner grid. [`ProjectionTracker`] remembers a
//! blake3 digest per view so the host only re-renders views whose content
//! changed since the last sync.

use std::collections::{BTreeMap, HashMap};

use blake3::Hash;
use serde::Serialize;

use crate::Result;
use crate::config::DemoConfig;
use crate::controller::DemoState;
use crate::layout::{BreakpointName, CompactionMode, LayoutItem, LayoutsByBreakpoint};

/// Engine configuration for one grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProps {
    pub cols: BTreeMap<BreakpointName, u16>,
    pub row_height: u16,
    pub layouts: LayoutsByBreakpoint,
    pub compact_type: CompactionMode,
    pub prevent_collision: bool,
    /// Animate moves only once the first render has committed.
    pub use_css_transforms: bool,
    pub measure_before_mount: bool,
    pub is_droppable: bool,
    pub is_bounded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropping_item: Option<LayoutItem>,
}

pub fn outer_grid_props(state: &DemoState, config: &DemoConfig) -> GridProps {
    GridProps {
        cols: config
            .breakpoint_names()
            .map(|name| (name.to_string(), config.outer.columns))
            .collect(),
        row_height: config.outer.row_height,
        layouts: state.outer_layouts.clone(),
        compact_type: state.compaction_mode,
        prevent_collision: state.compaction_mode.prevents_collision(),
        use_css_transforms: state.is_mounted,
        measure_before_mount: false,
        is_droppable: false,
        is_bounded: true,
        draggable_handle: Some(config.outer.draggable_handle.clone()),
        dropping_item: None,
    }
}

pub fn inner_grid_props(state: &DemoState, config: &DemoConfig) -> GridProps {
    GridProps {
        cols: config.columns_by_breakpoint.clone(),
        row_height: config.row_height,
        layouts: state.inner_layouts.clone(),
        compact_type: state.compaction_mode,
        prevent_collision: state.compaction_mode.prevents_collision(),
        use_css_transforms: state.is_mounted,
        measure_before_mount: false,
        is_droppable: true,
        is_bounded: true,
        draggable_handle: None,
        dropping_item: Some(config.dropping_item.clone()),
    }
}

/// Keys of the inner grids, one per outer container tile, counted from 1.
pub fn inner_grid_keys(config: &DemoConfig) -> Vec<String> {
    (1..=config.item_count).map(|key| key.to_string()).collect()
}

/// Label of every tile in the inner grids: its position in the default layout.
pub fn inner_tile_labels(state: &DemoState, config: &DemoConfig) -> Vec<String> {
    state
        .inner_layout(&config.default_breakpoint)
        .map(|layout| (0..layout.len()).map(|index| index.to_string()).collect())
        .unwrap_or_default()
}

pub fn status_lines(state: &DemoState, config: &DemoConfig) -> Vec<String> {
    let columns = config
        .columns_for(&state.current_breakpoint)
        .map(|columns| columns.to_string())
        .unwrap_or_else(|| "?".to_string());
    vec![
        format!(
            "Current Breakpoint: {} ({} columns)",
            state.current_breakpoint, columns
        ),
        format!("Compaction type: {}", state.compaction_mode.label()),
    ]
}

/// blake3 digest of the canonical JSON encoding of `value`.
pub fn fingerprint<T>(value: &T) -> Result<Hash>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    Ok(blake3::hash(&bytes))
}

/// Views a host renders separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKey {
    OuterGrid,
    InnerGrid,
    Status,
}

impl ProjectionKey {
    pub const ALL: [ProjectionKey; 3] = [Self::OuterGrid, Self::InnerGrid, Self::Status];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OuterGrid => "outer_grid",
            Self::InnerGrid => "inner_grid",
            Self::Status => "status",
        }
    }
}

/// Last rendered digest per view.
#[derive(Debug, Default)]
pub struct ProjectionTracker {
    digests: HashMap<ProjectionKey, Hash>,
}

impl ProjectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `key`; true when it differs from the last one.
    pub fn observe<T>(&mut self, key: ProjectionKey, value: &T) -> Result<bool>
    where
        T: Serialize + ?Sized,
    {
        let digest = fingerprint(value)?;
        let changed = self.digests.get(&key).map(|h| *h != digest).unwrap_or(true);
        if changed {
            self.digests.insert(key, digest);
        }
        Ok(changed)
    }

    /// Views whose content changed since the previous sync.
    pub fn sync(&mut self, state: &DemoState, config: &DemoConfig) -> Result<Vec<ProjectionKey>> {
        let mut dirty = Vec::new();
        for key in ProjectionKey::ALL {
            let changed = match key {
                ProjectionKey::OuterGrid => self.observe(key, &outer_grid_props(state, config))?,
                ProjectionKey::InnerGrid => self.observe(key, &inner_grid_props(state, config))?,
                ProjectionKey::Status => self.observe(key, &status_lines(state, config))?,
            };
            if changed {
                dirty.push(key);
            }
        }
        Ok(dirty)
    }

    pub fn digest(&self, key: ProjectionKey) -> Option<Hash> {
        self.digests.get(&key).copied()
    }

    pub fn reset(&mut self) {
        self.digests.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LayoutDemoController;
    use serde_json::json;

    #[test]
    fn outer_grid_uses_two_tall_columns() {
        let controller = LayoutDemoController::default();
        let props = outer_grid_props(controller.state(), controller.config());
        assert_eq!(props.cols.len(), 5);
        assert!(props.cols.values().all(|cols| *cols == 2));
        assert_eq!(props.row_height, 240);
        assert!(!props.is_droppable);
        assert!(props.is_bounded);
        assert_eq!(
            props.draggable_handle.as_deref(),
            Some(".container-draggable-handle")
        );
        assert_eq!(props.layouts, *controller.outer_layouts());
    }

    #[test]
    fn inner_grid_accepts_drops() {
        let controller = LayoutDemoController::default();
        let props = inner_grid_props(controller.state(), controller.config());
        assert_eq!(props.cols.get("lg"), Some(&12));
        assert_eq!(props.row_height, 30);
        assert!(props.is_droppable);
        assert_eq!(props.dropping_item, Some(LayoutItem::new("drop", 0, 0, 6, 2)));
        assert_eq!(props.layouts, *controller.inner_layouts());
    }

    #[test]
    fn flags_follow_compaction_and_mount() {
        let mut controller = LayoutDemoController::default();
        let props = inner_grid_props(controller.state(), controller.config());
        assert!(!props.prevent_collision);
        assert!(!props.use_css_transforms);

        controller.on_mounted();
        controller.cycle_compaction_mode();
        let props = outer_grid_props(controller.state(), controller.config());
        assert_eq!(props.compact_type, CompactionMode::None);
        assert!(props.prevent_collision);
        assert!(props.use_css_transforms);

        let json = serde_json::to_value(&props).unwrap();
        assert!(json["compactType"].is_null());
        assert_eq!(json["preventCollision"], json!(true));
        assert!(json.get("droppingItem").is_none());
    }

    #[test]
    fn status_lines_name_breakpoint_and_compaction() {
        let mut controller = LayoutDemoController::default();
        let lines = status_lines(controller.state(), controller.config());
        assert_eq!(lines[0], "Current Breakpoint: lg (12 columns)");
        assert_eq!(lines[1], "Compaction type: Vertical");

        controller.cycle_compaction_mode();
        let lines = status_lines(controller.state(), controller.config());
        assert_eq!(lines[1], "Compaction type: No Compaction");
    }

    #[test]
    fn grid_keys_and_tile_labels() {
        let controller = LayoutDemoController::default();
        assert_eq!(inner_grid_keys(controller.config()), vec!["1", "2", "3", "4"]);
        assert_eq!(
            inner_tile_labels(controller.state(), controller.config()),
            vec!["0", "1", "2", "3"]
        );
    }

    #[test]
    fn tracker_reports_only_changed_views() {
        let mut controller = LayoutDemoController::default();
        let mut tracker = ProjectionTracker::new();

        let first = tracker.sync(controller.state(), controller.config()).unwrap();
        assert_eq!(first, ProjectionKey::ALL.to_vec());
        assert!(tracker.sync(controller.state(), controller.config()).unwrap().is_empty());

        controller.on_breakpoint_change("sm").unwrap();
        let dirty = tracker.sync(controller.state(), controller.config()).unwrap();
        assert_eq!(dirty, vec![ProjectionKey::Status]);

        controller.on_mounted();
        let dirty = tracker.sync(controller.state(), controller.config()).unwrap();
        assert_eq!(dirty, vec![ProjectionKey::OuterGrid, ProjectionKey::InnerGrid]);

        assert!(tracker.digest(ProjectionKey::Status).is_some());
        tracker.reset();
        assert!(tracker.digest(ProjectionKey::Status).is_none());
    }
}
