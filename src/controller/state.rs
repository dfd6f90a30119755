use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::DemoConfig;
use crate::layout::{
    BreakpointName, CompactionMode, Layout, LayoutsByBreakpoint, generate_inner_layout,
    generate_outer_layout,
};
use crate::projection::fingerprint;

/// Everything the host needs to configure the outer and inner grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoState {
    pub current_breakpoint: BreakpointName,
    pub compaction_mode: CompactionMode,
    /// Flips to `true` once after the first render commit.
    pub is_mounted: bool,
    /// Shared by every nested grid.
    pub inner_layouts: LayoutsByBreakpoint,
    pub outer_layouts: LayoutsByBreakpoint,
}

impl DemoState {
    /// Deterministic starting state for `config`.
    pub fn initial(config: &DemoConfig) -> Self {
        let breakpoint = config.default_breakpoint.clone();
        Self {
            current_breakpoint: breakpoint.clone(),
            compaction_mode: CompactionMode::Vertical,
            is_mounted: false,
            inner_layouts: LayoutsByBreakpoint::from([(
                breakpoint.clone(),
                generate_inner_layout(config.item_count),
            )]),
            outer_layouts: LayoutsByBreakpoint::from([(
                breakpoint,
                generate_outer_layout(config.item_count),
            )]),
        }
    }

    pub fn inner_layout(&self, breakpoint: &str) -> Option<&Layout> {
        self.inner_layouts.get(breakpoint)
    }

    pub fn outer_layout(&self, breakpoint: &str) -> Option<&Layout> {
        self.outer_layouts.get(breakpoint)
    }

    /// blake3 digest of the canonical JSON form.
    pub fn fingerprint(&self) -> Result<blake3::Hash> {
        fingerprint(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutItem;

    #[test]
    fn initial_state_is_keyed_by_default_breakpoint() {
        let state = DemoState::initial(&DemoConfig::default());
        assert_eq!(state.current_breakpoint, "lg");
        assert_eq!(state.compaction_mode, CompactionMode::Vertical);
        assert!(!state.is_mounted);
        assert_eq!(state.inner_layouts.len(), 1);
        assert_eq!(state.outer_layouts.len(), 1);
        assert_eq!(
            state.inner_layout("lg").map(|layout| layout.len()),
            Some(4)
        );
        assert_eq!(
            state.outer_layout("lg").and_then(|layout| layout.get(1)),
            Some(&LayoutItem::new("1", 1, 1, 1, 1))
        );
    }

    #[test]
    fn fingerprint_tracks_content() {
        let config = DemoConfig::default();
        let a = DemoState::initial(&config);
        let mut b = DemoState::initial(&config);
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

        b.is_mounted = true;
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn serializes_compaction_as_engine_value() {
        let mut state = DemoState::initial(&DemoConfig::default());
        state.compaction_mode = CompactionMode::None;
        let json = serde_json::to_value(&state).unwrap();
        assert!(json["compaction_mode"].is_null());
        assert_eq!(json["inner_layouts"]["lg"][1]["i"], "1");
    }
}
