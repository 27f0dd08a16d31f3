//! Strip configuration.
//!
//! [`StripConfig`] carries the sizes the binding reports to the render host
//! and the behaviour switches for scrolling after a transition. It can be
//! built in code or loaded from TOML:
//!
//! ```toml
//! strip_height = 96.0
//! header_width = 72.0
//! footer_width = 12.0
//! scroll_to_header_on_expand = false
//!
//! [item_size]
//! width = 72.0
//! height = 96.0
//! ```
//!
//! Missing keys fall back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use horizon_packstrip_core::logging::targets;

use crate::view::ScrollAlignment;

/// A width and height in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A size with zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Errors raised while loading a [`StripConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for a strip.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Sizes and behaviour of an expandable strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Height of the strip; headers and footers span all of it.
    pub strip_height: f32,
    /// Width of every section header.
    pub header_width: f32,
    /// Width of the footer shown after the expanded section's items.
    pub footer_width: f32,
    /// Leading and trailing inset of each section.
    pub section_inset: f32,
    /// Spacing between adjacent cells.
    pub line_spacing: f32,
    /// Scroll the expanded header to the leading edge once a header tap's
    /// batch update has finished.
    pub scroll_to_header_on_expand: bool,
    /// Where a newly selected item is scrolled to.
    pub selected_item_alignment: ScrollAlignment,
    /// Animate programmatic scrolls.
    pub animate_scrolling: bool,
    /// Size of each item cell.
    pub item_size: Size,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            strip_height: 80.0,
            header_width: 65.0,
            footer_width: 15.0,
            section_inset: 4.0,
            line_spacing: 4.0,
            scroll_to_header_on_expand: true,
            selected_item_alignment: ScrollAlignment::Center,
            animate_scrolling: true,
            item_size: Size::new(65.0, 80.0),
        }
    }
}

impl StripConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for negative or non-finite sizes.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the same errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded strip config");
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Checks that every size is finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("strip_height", self.strip_height),
            ("item_size.width", self.item_size.width),
            ("item_size.height", self.item_size.height),
            ("header_width", self.header_width),
            ("footer_width", self.footer_width),
            ("section_inset", self.section_inset),
            ("line_spacing", self.line_spacing),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite, non-negative size, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Sets the strip height using builder pattern.
    pub fn with_strip_height(mut self, height: f32) -> Self {
        self.strip_height = height;
        self
    }

    /// Sets the header width using builder pattern.
    pub fn with_header_width(mut self, width: f32) -> Self {
        self.header_width = width;
        self
    }

    /// Sets the footer width using builder pattern.
    pub fn with_footer_width(mut self, width: f32) -> Self {
        self.footer_width = width;
        self
    }

    /// Sets whether a header tap scrolls its section into place.
    pub fn with_scroll_to_header_on_expand(mut self, enabled: bool) -> Self {
        self.scroll_to_header_on_expand = enabled;
        self
    }

    /// Sets whether programmatic scrolls animate.
    pub fn with_animate_scrolling(mut self, animate: bool) -> Self {
        self.animate_scrolling = animate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = StripConfig::from_toml_str(
            r#"
            strip_height = 96.0
            scroll_to_header_on_expand = false
            selected_item_alignment = "nearest"

            [item_size]
            width = 72.0
            height = 96.0
            "#,
        )
        .unwrap();

        assert_eq!(config.strip_height, 96.0);
        assert_eq!(config.item_size, Size::new(72.0, 96.0));
        assert!(!config.scroll_to_header_on_expand);
        assert_eq!(config.selected_item_alignment, ScrollAlignment::Nearest);
        assert_eq!(config.header_width, 65.0);
        assert_eq!(config.footer_width, 15.0);
        assert!(config.animate_scrolling);
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let err = StripConfig::from_toml_str("footer_width = -1.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "footer_width",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = StripConfig::from_toml_str("strip_height = \"tall\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file_round_trip() {
        let config = StripConfig::default()
            .with_strip_height(120.0)
            .with_footer_width(20.0)
            .with_animate_scrolling(false);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();

        let loaded = StripConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = StripConfig::load("/definitely/not/here/strip.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
