use std::sync::Arc;

use serde_json::{Value, json};

use crate::config::DemoConfig;
use crate::error::{DemoError, Result};
use crate::layout::{CompactionMode, LayoutItem, LayoutsByBreakpoint, generate_inner_layout};
use crate::logging::{
    CONTROLLER_TARGET, LogLevel, Logger, METRICS_TARGET, event_with_fields, json_kv, json_str,
};
use crate::metrics::{ControllerMetrics, MetricSnapshot};

use super::observer::{DropReport, LayoutObserver};
use super::state::DemoState;

/// Owns the showcase state and applies the transitions the host triggers.
///
/// Every mutating call returns the snapshot it produced. Snapshots handed out
/// earlier never change: a transition swaps in a new `Arc` whenever the old
/// one is still shared.
pub struct LayoutDemoController {
    config: DemoConfig,
    state: Arc<DemoState>,
    observer: Option<Arc<dyn LayoutObserver>>,
    logger: Option<Logger>,
    metrics: ControllerMetrics,
}

impl Default for LayoutDemoController {
    fn default() -> Self {
        Self::from_valid_config(DemoConfig::default())
    }
}

impl LayoutDemoController {
    pub fn new(config: DemoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DemoConfig) -> Self {
        let state = Arc::new(DemoState::initial(&config));
        Self {
            config,
            state,
            observer: None,
            logger: None,
            metrics: ControllerMetrics::new(),
        }
    }

    pub fn with_observer<O>(self, observer: O) -> Self
    where
        O: LayoutObserver + 'static,
    {
        self.with_shared_observer(Arc::new(observer))
    }

    pub fn with_shared_observer(mut self, observer: Arc<dyn LayoutObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self.log(
            LogLevel::Info,
            "controller_initialized",
            [
                json_str("breakpoint", self.state.current_breakpoint.clone()),
                json_kv("items", json!(self.config.item_count)),
            ],
        );
        self
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<DemoState> {
        Arc::clone(&self.state)
    }

    pub fn current_breakpoint(&self) -> &str {
        &self.state.current_breakpoint
    }

    pub fn compaction_mode(&self) -> CompactionMode {
        self.state.compaction_mode
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted
    }

    pub fn inner_layouts(&self) -> &LayoutsByBreakpoint {
        &self.state.inner_layouts
    }

    pub fn outer_layouts(&self) -> &LayoutsByBreakpoint {
        &self.state.outer_layouts
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }

    /// First render committed. Later calls leave the state untouched.
    pub fn on_mounted(&mut self) -> Arc<DemoState> {
        if self.state.is_mounted {
            return self.snapshot();
        }
        let snapshot = self.commit(|state| state.is_mounted = true);
        self.log(LogLevel::Info, "mounted", std::iter::empty());
        snapshot
    }

    pub fn on_breakpoint_change(&mut self, breakpoint: &str) -> Result<Arc<DemoState>> {
        let Some(columns) = self.config.columns_for(breakpoint) else {
            self.metrics.record_rejected_breakpoint();
            self.log(
                LogLevel::Warn,
                "breakpoint_rejected",
                [json_str("breakpoint", breakpoint)],
            );
            return Err(DemoError::InvalidBreakpoint(breakpoint.to_string()));
        };

        let snapshot = self.commit(|state| state.current_breakpoint = breakpoint.to_string());
        self.log(
            LogLevel::Info,
            "breakpoint_changed",
            [
                json_str("breakpoint", breakpoint),
                json_kv("columns", json!(columns)),
            ],
        );
        Ok(snapshot)
    }

    pub fn cycle_compaction_mode(&mut self) -> Arc<DemoState> {
        let next = self.state.compaction_mode.next();
        let snapshot = self.commit(|state| state.compaction_mode = next);
        self.log(
            LogLevel::Info,
            "compaction_cycled",
            [json_kv("compact_type", json!(next.compact_type()))],
        );
        snapshot
    }

    /// Reset the inner layouts to a fresh generated layout at the default
    /// breakpoint; the engine rebuilds other breakpoints on demand.
    pub fn regenerate_inner_layout(&mut self) -> Arc<DemoState> {
        let breakpoint = self.config.default_breakpoint.clone();
        let layout = generate_inner_layout(self.config.item_count);
        let snapshot = self.commit(|state| {
            state.inner_layouts = LayoutsByBreakpoint::from([(breakpoint, layout)]);
        });
        self.log(LogLevel::Info, "inner_layout_regenerated", std::iter::empty());
        snapshot
    }

    /// Relay an engine layout change to the observer, if any.
    pub fn notify_layout_changed(
        &mut self,
        layout: &[LayoutItem],
        all_layouts: &LayoutsByBreakpoint,
    ) {
        let Some(observer) = self.observer.as_ref() else {
            return;
        };
        observer.on_layout_change(layout, all_layouts);
        self.metrics.record_layout_relay();
        self.log(
            LogLevel::Debug,
            "layout_relayed",
            [
                json_kv("items", json!(layout.len())),
                json_kv("breakpoints", json!(all_layouts.len())),
            ],
        );
    }

    /// Describe a drop. A missing `item` is reported, never rejected.
    pub fn on_item_dropped(
        &mut self,
        layout: &[LayoutItem],
        item: Option<&LayoutItem>,
        event: Value,
    ) -> DropReport {
        let report = DropReport::new(layout, item, event);
        self.metrics.record_drop();

        let item_id = report
            .item
            .as_ref()
            .map(|item| json!(item.id))
            .unwrap_or(Value::Null);
        let notification = report.notification().unwrap_or_default();
        self.log(
            LogLevel::Info,
            "item_dropped",
            [
                json_kv("item", item_id),
                json_str("notification", notification),
            ],
        );

        if let Some(observer) = self.observer.as_ref() {
            observer.on_drop(&report);
        }
        report
    }

    /// Write the current counters to the logger.
    pub fn emit_metrics(&self) {
        if let Some(logger) = self.logger.as_ref() {
            let event = self.metrics.snapshot().to_log_event(METRICS_TARGET);
            let _ = logger.log_event(event);
        }
    }

    fn commit(&mut self, apply: impl FnOnce(&mut DemoState)) -> Arc<DemoState> {
        apply(Arc::make_mut(&mut self.state));
        self.metrics.record_transition();
        self.snapshot()
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, CONTROLLER_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}
