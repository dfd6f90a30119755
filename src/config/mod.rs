//! Construction-time configuration for the showcase controller.
//!
//! Values mirror the defaults the nested showcase ships with: five
//! breakpoints of twelve columns, 30-cell rows for the inner grids and a
//! two-column outer grid of tall container tiles. Configuration is fixed once
//! a controller is built; `validate` runs before any state is generated.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::{BreakpointName, LayoutItem};

pub const DEFAULT_BREAKPOINTS: [&str; 5] = ["lg", "md", "sm", "xs", "xxs"];
pub const DEFAULT_COLUMNS: u16 = 12;
pub const DEFAULT_ROW_HEIGHT: u16 = 30;
pub const DEFAULT_ITEM_COUNT: usize = 4;
pub const DEFAULT_DRAG_HANDLE: &str = ".container-draggable-handle";

/// Settings for the outer grid that hosts one inner grid per tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OuterGridConfig {
    /// Column count used at every breakpoint.
    pub columns: u16,
    pub row_height: u16,
    /// Selector of the element that starts a container drag.
    pub draggable_handle: String,
}

impl Default for OuterGridConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            row_height: 240,
            draggable_handle: DEFAULT_DRAG_HANDLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub columns_by_breakpoint: BTreeMap<BreakpointName, u16>,
    pub row_height: u16,
    pub default_breakpoint: BreakpointName,
    /// Tiles per generated layout.
    pub item_count: usize,
    /// Placeholder the inner grids show while something is dragged over them.
    pub dropping_item: LayoutItem,
    pub outer: OuterGridConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            columns_by_breakpoint: DEFAULT_BREAKPOINTS
                .iter()
                .map(|name| (name.to_string(), DEFAULT_COLUMNS))
                .collect(),
            row_height: DEFAULT_ROW_HEIGHT,
            default_breakpoint: DEFAULT_BREAKPOINTS[0].to_string(),
            item_count: DEFAULT_ITEM_COUNT,
            dropping_item: LayoutItem::new("drop", 0, 0, 6, 2),
            outer: OuterGridConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns_by_breakpoint.is_empty() {
            return Err(ConfigError::EmptyBreakpoints);
        }
        if let Some((name, _)) = self
            .columns_by_breakpoint
            .iter()
            .find(|(_, columns)| **columns == 0)
        {
            return Err(ConfigError::ZeroColumns(name.clone()));
        }
        if !self.has_breakpoint(&self.default_breakpoint) {
            return Err(ConfigError::UnknownDefaultBreakpoint(
                self.default_breakpoint.clone(),
            ));
        }
        if self.row_height == 0 || self.outer.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.outer.columns == 0 {
            return Err(ConfigError::ZeroColumns("outer".to_string()));
        }
        if self.item_count == 0 {
            return Err(ConfigError::ZeroItemCount);
        }
        Ok(())
    }

    pub fn has_breakpoint(&self, name: &str) -> bool {
        self.columns_by_breakpoint.contains_key(name)
    }

    pub fn columns_for(&self, name: &str) -> Option<u16> {
        self.columns_by_breakpoint.get(name).copied()
    }

    /// Configured breakpoint names in map order.
    pub fn breakpoint_names(&self) -> impl Iterator<Item = &str> {
        self.columns_by_breakpoint.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DemoConfig::default();
        config.validate().unwrap();
        assert_eq!(config.columns_for("lg"), Some(12));
        assert_eq!(config.columns_for("xxs"), Some(12));
        assert_eq!(config.row_height, 30);
        assert_eq!(config.default_breakpoint, "lg");
        assert_eq!(config.item_count, 4);
        assert_eq!(
            config.breakpoint_names().collect::<Vec<_>>(),
            vec!["lg", "md", "sm", "xs", "xxs"]
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = DemoConfig::from_json_str(r#"{"row_height": 48}"#).unwrap();
        assert_eq!(config.row_height, 48);
        assert_eq!(config.default_breakpoint, "lg");
        assert_eq!(config.outer.columns, 2);
        assert_eq!(config.outer.row_height, 240);
    }

    #[test]
    fn custom_breakpoints_require_matching_default() {
        let err = DemoConfig::from_json_str(
            r#"{"columns_by_breakpoint": {"wide": 16, "narrow": 4}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDefaultBreakpoint(name) if name == "lg"));

        let config = DemoConfig::from_json_str(
            r#"{"columns_by_breakpoint": {"wide": 16, "narrow": 4}, "default_breakpoint": "wide"}"#,
        )
        .unwrap();
        assert_eq!(config.columns_for("narrow"), Some(4));
    }

    #[test]
    fn rejects_degenerate_values() {
        let mut config = DemoConfig::default();
        config.columns_by_breakpoint.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBreakpoints)));

        let mut config = DemoConfig::default();
        config.columns_by_breakpoint.insert("sm".to_string(), 0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroColumns(name)) if name == "sm"));

        let mut config = DemoConfig::default();
        config.row_height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRowHeight)));

        let mut config = DemoConfig::default();
        config.item_count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroItemCount)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DemoConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("grid_showcase_missing_config.json");
        let err = DemoConfig::load(path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
