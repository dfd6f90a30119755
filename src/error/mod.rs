//! Error module orchestrator.

mod types;

pub use types::{ConfigError, DemoError, Result};
