//! Serializable list configuration.
//!
//! Everything a host can set without writing code lives in [`ListConfig`]:
//! the grouping field, the alphabet, uncategorized placement, the fixed
//! heights, and the tuning forwarded to the windowed scroll surface. Row
//! height callbacks and render overrides are code-level and are set on the
//! list directly.
//!
//! # Example
//!
//! ```ignore
//! use alphalist::config::ListConfig;
//!
//! let config = ListConfig::from_toml_str(r#"
//!     group_field = "last_name"
//!     uncategorized = "top"
//!     item_height = 56.0
//!
//!     [window]
//!     window_size = 11
//! "#)?;
//! ```

use std::path::Path;

use alphalist_core::logging::targets;
use alphalist_core::ConfigError;
use serde::{Deserialize, Serialize};

use crate::layout::{LayoutMetrics, RowHeight, DEFAULT_ITEM_HEIGHT, DEFAULT_LIST_HEADER_HEIGHT};
use crate::model::{Alphabet, GroupBy, ListEntry, UncategorizedPlacement};

/// Tuning the list forwards to the windowed scroll surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Keep the current section header pinned while scrolling.
    pub sticky_section_headers: bool,
    /// Detach offscreen rows from the view tree.
    pub remove_clipped_subviews: bool,
    /// Rows materialized per render batch.
    pub max_to_render_per_batch: usize,
    /// Delay between render batches, in milliseconds.
    pub update_cells_batching_period_ms: u64,
    /// Rendered window, in viewport heights.
    pub window_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            sticky_section_headers: true,
            remove_clipped_subviews: true,
            max_to_render_per_batch: 10,
            update_cells_batching_period_ms: 50,
            window_size: 21,
        }
    }
}

/// Declarative list configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Entry field to group on. Absent means the display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_field: Option<String>,
    /// Letters that form buckets, in order. Absent means any alphabetic character.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    /// Where the uncategorized bucket goes.
    pub uncategorized: UncategorizedPlacement,
    /// Fixed row height.
    pub item_height: f32,
    /// Section header height.
    pub section_header_height: f32,
    /// Height of the content above the first section.
    pub list_header_height: f32,
    /// Scroll surface tuning.
    pub window: WindowConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            group_field: None,
            alphabet: None,
            uncategorized: UncategorizedPlacement::Bottom,
            item_height: DEFAULT_ITEM_HEIGHT,
            section_header_height: DEFAULT_ITEM_HEIGHT,
            list_header_height: DEFAULT_LIST_HEADER_HEIGHT,
            window: WindowConfig::default(),
        }
    }
}

impl ListConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file. The format follows the extension
    /// (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = parse(&content)?;
        tracing::debug!(target: targets::WIDGET, path = %path.display(), "loaded list configuration");
        Ok(config)
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::invalid_value("config", e.to_string()))
    }

    /// Checks that heights are usable and the alphabet contains only letters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_height("item_height", self.item_height)?;
        check_height("section_header_height", self.section_header_height)?;
        check_height("list_header_height", self.list_header_height)?;

        if let Some(alphabet) = &self.alphabet {
            let mut letters = alphabet.chars().filter(|c| !c.is_whitespace()).peekable();
            if letters.peek().is_none() {
                return Err(ConfigError::invalid_value("alphabet", "must contain at least one letter"));
            }
            if let Some(bad) = letters.find(|c| !c.is_alphabetic()) {
                return Err(ConfigError::invalid_value(
                    "alphabet",
                    format!("'{bad}' is not a letter"),
                ));
            }
        }

        if let Some(field) = &self.group_field {
            if field.trim().is_empty() {
                return Err(ConfigError::invalid_value("group_field", "must not be empty"));
            }
        }

        if self.window.window_size == 0 {
            return Err(ConfigError::invalid_value("window.window_size", "must be at least 1"));
        }
        if self.window.max_to_render_per_batch == 0 {
            return Err(ConfigError::invalid_value(
                "window.max_to_render_per_batch",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// The grouping source this configuration selects.
    pub fn group_by<T: ListEntry>(&self) -> GroupBy<T> {
        match &self.group_field {
            Some(field) => GroupBy::field(field.clone()),
            None => GroupBy::Value,
        }
    }

    /// The bucket alphabet this configuration selects.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
            .as_deref()
            .map(Alphabet::parse)
            .unwrap_or_default()
    }

    /// Fixed row height source.
    pub fn row_height(&self) -> RowHeight {
        RowHeight::Fixed(self.item_height)
    }

    /// Per-section and per-list heights.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::new(self.section_header_height, self.list_header_height)
    }
}

fn check_height(field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid_value(
            field,
            format!("must be a finite, non-negative number (got {value})"),
        ));
    }
    Ok(())
}
