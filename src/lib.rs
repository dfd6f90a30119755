//! State core of a nested, responsive grid showcase.
//!
//! An outer grid of container tiles hosts one inner grid per tile. The grid
//! engine and the width measurer live outside this crate; they drive
//! [`LayoutDemoController`] through its callbacks and render from the
//! immutable [`DemoState`] snapshots it publishes.

pub mod config;
pub mod controller;
pub mod error;
pub mod harness;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod projection;
pub mod width;

pub use config::{DemoConfig, OuterGridConfig};
pub use controller::{DemoState, DropReport, LayoutDemoController, LayoutObserver};
pub use error::{ConfigError, DemoError, Result};
pub use harness::driver::CliDriver;
pub use harness::{Harness, HarnessCommand, HarnessOutcome, command_for_key};
pub use layout::{
    BreakpointName, CompactionMode, Layout, LayoutItem, LayoutsByBreakpoint,
    generate_inner_layout, generate_outer_layout,
};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{ControllerMetrics, MetricSnapshot};
pub use projection::{GridProps, ProjectionKey, ProjectionTracker};
pub use width::display_width;
