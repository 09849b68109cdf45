//! Configuration types for Armillary rendering.
//!
//! This module provides configuration structures that control how nodes are
//! styled and exported. All types implement [`serde::Deserialize`] and are
//! loaded from TOML text.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and export settings.
//! - [`StyleConfig`] - Resolved [`Style`] values per node kind.
//! - [`ExportConfig`] - Document-level options of the SVG export.
//!
//! # Example
//!
//! ```
//! # use armillary::config::AppConfig;
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [style.members]
//!     attribute-icon-size = 0
//!
//!     [export]
//!     margin = 4.0
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.export().margin(), 4.0);
//! assert_eq!(config.style().members().attribute_icon_size(), 0.0);
//! ```

use serde::Deserialize;

use armillary_core::{color::Color, style::Style};

use crate::ArmillaryError;

/// Top-level configuration combining style and export settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, export: ExportConfig) -> Self {
        Self { style, export }
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Config`] when the text is not valid TOML,
    /// contains unknown keys, or holds values the renderer cannot use.
    pub fn from_toml_str(text: &str) -> Result<Self, ArmillaryError> {
        let config: Self = toml::from_str(text)
            .map_err(|err| ArmillaryError::Config(format!("Invalid configuration: {err}")))?;
        config.export.validate()?;
        Ok(config)
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Styles applied to each kind of node built by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Style of decorated boxes.
    activity: Style,

    /// Style of member areas.
    members: Style,

    /// Style of tab bars.
    tabs: Style,
}

impl StyleConfig {
    pub fn new(activity: Style, members: Style, tabs: Style) -> Self {
        Self {
            activity,
            members,
            tabs,
        }
    }

    pub fn activity(&self) -> &Style {
        &self.activity
    }

    pub fn members(&self) -> &Style {
        &self.members
    }

    pub fn tabs(&self) -> &Style {
        &self.tabs
    }
}

/// Document-level options of the SVG export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExportConfig {
    /// Space around the content on every side, in user units.
    margin: f32,

    /// Document background, as a color string. No background when unset.
    background_color: Option<String>,

    /// Free text embedded in a `<metadata>` element.
    metadata: Option<String>,

    /// Factor applied to the document's width and height.
    scale: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            background_color: None,
            metadata: None,
            scale: 1.0,
        }
    }
}

impl ExportConfig {
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, ArmillaryError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| ArmillaryError::Config(format!("Invalid background color in config: {err}")))
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Checks that every value is usable by the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Config`] for a non-positive scale, a
    /// negative margin or an unparseable background color.
    pub fn validate(&self) -> Result<(), ArmillaryError> {
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(ArmillaryError::Config(format!(
                "Export scale must be a positive number, got {}",
                self.scale
            )));
        }
        if !(self.margin >= 0.0 && self.margin.is_finite()) {
            return Err(ArmillaryError::Config(format!(
                "Export margin must not be negative, got {}",
                self.margin
            )));
        }
        self.background_color().map(|_| ())
    }
}
