use thiserror::Error;

use crate::layout::BreakpointName;
use crate::logging::LoggingError;

/// Unified result type for the showcase crate.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors surfaced by the showcase controller and its harness.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("breakpoint `{0}` is not configured")]
    InvalidBreakpoint(BreakpointName),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("terminal backend error: {0}")]
    Terminal(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Problems found while loading or validating a `DemoConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no breakpoints configured")]
    EmptyBreakpoints,
    #[error("default breakpoint `{0}` has no column count")]
    UnknownDefaultBreakpoint(BreakpointName),
    #[error("breakpoint `{0}` has zero columns")]
    ZeroColumns(BreakpointName),
    #[error("row height must be non-zero")]
    ZeroRowHeight,
    #[error("generated layouts need at least one item")]
    ZeroItemCount,
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config file unreadable: {0}")]
    Io(#[from] std::io::Error),
}
