use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters for the operations a controller has handled.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ControllerMetrics {
    transitions: u64,
    rejected_breakpoints: u64,
    layout_relays: u64,
    drops: u64,
}

impl ControllerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state transition that produced a new snapshot.
    pub fn record_transition(&mut self) {
        self.transitions = self.transitions.saturating_add(1);
    }

    pub fn record_rejected_breakpoint(&mut self) {
        self.rejected_breakpoints = self.rejected_breakpoints.saturating_add(1);
    }

    pub fn record_layout_relay(&mut self) {
        self.layout_relays = self.layout_relays.saturating_add(1);
    }

    pub fn record_drop(&mut self) {
        self.drops = self.drops.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            transitions: self.transitions,
            rejected_breakpoints: self.rejected_breakpoints,
            layout_relays: self.layout_relays,
            drops: self.drops,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub transitions: u64,
    pub rejected_breakpoints: u64,
    pub layout_relays: u64,
    pub drops: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target,
            "controller_metrics",
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("transitions".to_string(), json!(self.transitions));
        map.insert(
            "rejected_breakpoints".to_string(),
            json!(self.rejected_breakpoints),
        );
        map.insert("layout_relays".to_string(), json!(self.layout_relays));
        map.insert("drops".to_string(), json!(self.drops));
        map
    }
}
