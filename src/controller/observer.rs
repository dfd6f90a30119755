use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::layout::{Layout, LayoutItem, LayoutsByBreakpoint};

/// Receives what the controller relays from the grid engine.
pub trait LayoutObserver: Send + Sync {
    fn on_layout_change(&self, layout: &[LayoutItem], all_layouts: &LayoutsByBreakpoint);

    fn on_drop(&self, _report: &DropReport) {}
}

impl<F> LayoutObserver for F
where
    F: Fn(&[LayoutItem], &LayoutsByBreakpoint) + Send + Sync,
{
    fn on_layout_change(&self, layout: &[LayoutItem], all_layouts: &LayoutsByBreakpoint) {
        self(layout, all_layouts)
    }
}

/// Parameters of a drop onto a grid.
///
/// `item` always serializes, as `null` when the drop target rejected the tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropReport {
    pub layout: Layout,
    pub item: Option<LayoutItem>,
    pub event: Value,
}

impl DropReport {
    pub fn new(layout: &[LayoutItem], item: Option<&LayoutItem>, event: Value) -> Self {
        Self {
            layout: layout.to_vec(),
            item: item.cloned(),
            event,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Text shown to the user for this drop.
    pub fn notification(&self) -> Result<String> {
        Ok(format!("Element parameters: {}", self.to_json()?))
    }
}
