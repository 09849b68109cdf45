//! Resolved style values.
//!
//! A [`Style`] is the immutable bag of scalar values a node reads once, at
//! construction time. Cascading and selector matching happen elsewhere; this
//! type only stores the outcome and applies defaults for unset keys.
//!
//! Styles deserialize from kebab-case keys:
//!
//! ```
//! # use armillary_core::style::{HorizontalAlignment, Style};
//! let style: Style = toml::from_str(r#"
//!     line-color = "navy"
//!     padding = [4, 8, 4, 8]
//!     round-corner = 12
//!     horizontal-alignment = "center"
//! "#).unwrap();
//!
//! assert_eq!(style.padding().left(), 8.0);
//! assert_eq!(style.horizontal_alignment(), HorizontalAlignment::Center);
//! assert!(style.background_color().is_transparent());
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::{
    color::Color,
    draw::{FontConfiguration, StrokeDefinition, StrokeStyle},
    geometry::Insets,
};

/// Default size of visibility icons in member areas.
const DEFAULT_ATTRIBUTE_ICON_SIZE: f32 = 10.0;

/// Default radius of circled characters, which sizes the icon lane.
const DEFAULT_CIRCLED_CHARACTER_RADIUS: f32 = 11.0;

/// Horizontal alignment of content inside its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for HorizontalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(format!(
                "invalid horizontal alignment `{s}`, valid values: left, center, right"
            )),
        }
    }
}

/// Insets as written in a style: one number for every side, or four numbers
/// clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
enum InsetsValue {
    Uniform(f32),
    Sides([f32; 4]),
}

impl From<InsetsValue> for Insets {
    fn from(value: InsetsValue) -> Self {
        match value {
            InsetsValue::Uniform(v) => Insets::uniform(v),
            InsetsValue::Sides([top, right, bottom, left]) => Insets::new(top, right, bottom, left),
        }
    }
}

/// Resolved, immutable style values for one node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Style {
    line_color: Option<String>,
    background_color: Option<String>,
    font_color: Option<String>,
    font_name: Option<String>,
    font_size: Option<f32>,
    padding: Option<InsetsValue>,
    margin: Option<InsetsValue>,
    round_corner: Option<f32>,
    shadowing: Option<f32>,
    line_thickness: Option<f32>,
    line_style: Option<String>,
    horizontal_alignment: Option<HorizontalAlignment>,
    minimum_width: Option<f32>,
    maximum_width: Option<f32>,
    attribute_icon_size: Option<f32>,
    circled_character_radius: Option<f32>,
}

impl Style {
    /// Creates a style with every key unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_color(mut self, color: &str) -> Self {
        self.line_color = Some(color.to_string());
        self
    }

    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    pub fn with_font_color(mut self, color: &str) -> Self {
        self.font_color = Some(color.to_string());
        self
    }

    pub fn with_font_name(mut self, name: &str) -> Self {
        self.font_name = Some(name.to_string());
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = Some(InsetsValue::Sides([
            padding.top(),
            padding.right(),
            padding.bottom(),
            padding.left(),
        ]));
        self
    }

    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = Some(InsetsValue::Sides([
            margin.top(),
            margin.right(),
            margin.bottom(),
            margin.left(),
        ]));
        self
    }

    pub fn with_round_corner(mut self, round_corner: f32) -> Self {
        self.round_corner = Some(round_corner);
        self
    }

    pub fn with_shadowing(mut self, shadowing: f32) -> Self {
        self.shadowing = Some(shadowing);
        self
    }

    pub fn with_line_thickness(mut self, thickness: f32) -> Self {
        self.line_thickness = Some(thickness);
        self
    }

    pub fn with_line_style(mut self, line_style: &str) -> Self {
        self.line_style = Some(line_style.to_string());
        self
    }

    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(alignment);
        self
    }

    pub fn with_minimum_width(mut self, width: f32) -> Self {
        self.minimum_width = Some(width);
        self
    }

    pub fn with_maximum_width(mut self, width: f32) -> Self {
        self.maximum_width = Some(width);
        self
    }

    pub fn with_attribute_icon_size(mut self, size: f32) -> Self {
        self.attribute_icon_size = Some(size);
        self
    }

    pub fn with_circled_character_radius(mut self, radius: f32) -> Self {
        self.circled_character_radius = Some(radius);
        self
    }

    /// Border color; transparent when unset.
    pub fn line_color(&self) -> Color {
        Color::resolve(self.line_color.as_deref())
    }

    /// Fill color; transparent when unset.
    pub fn background_color(&self) -> Color {
        Color::resolve(self.background_color.as_deref())
    }

    /// Font used for text content.
    ///
    /// Unlike the shape colors, an unset font color keeps the renderer default
    /// rather than becoming invisible.
    pub fn font(&self) -> FontConfiguration {
        let mut font = FontConfiguration::default();
        if let Some(name) = &self.font_name {
            font = font.with_family(name);
        }
        if let Some(size) = self.font_size {
            font = font.with_size(size);
        }
        if self.font_color.is_some() {
            font = font.with_color(Some(Color::resolve(self.font_color.as_deref())));
        }
        font
    }

    pub fn padding(&self) -> Insets {
        self.padding.map(Insets::from).unwrap_or_default()
    }

    /// Space reserved around the node for its siblings; not part of its own size.
    pub fn margin(&self) -> Insets {
        self.margin.map(Insets::from).unwrap_or_default()
    }

    pub fn round_corner(&self) -> f32 {
        self.round_corner.unwrap_or(0.0)
    }

    pub fn shadowing(&self) -> f32 {
        self.shadowing.unwrap_or(0.0)
    }

    /// Stroke used for borders and lines.
    pub fn stroke(&self) -> StrokeDefinition {
        let mut stroke = StrokeDefinition::new(self.line_thickness.unwrap_or(1.0));
        if let Some(line_style) = &self.line_style {
            let Ok(style) = StrokeStyle::from_str(line_style);
            stroke.set_style(style);
        }
        stroke
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment.unwrap_or_default()
    }

    pub fn minimum_width(&self) -> f32 {
        self.minimum_width.unwrap_or(0.0)
    }

    /// Width at which text wraps, if any.
    pub fn maximum_width(&self) -> Option<f32> {
        self.maximum_width.filter(|width| *width > 0.0)
    }

    /// Size of visibility icons; zero disables icons.
    pub fn attribute_icon_size(&self) -> f32 {
        self.attribute_icon_size
            .unwrap_or(DEFAULT_ATTRIBUTE_ICON_SIZE)
    }

    pub fn circled_character_radius(&self) -> f32 {
        self.circled_character_radius
            .unwrap_or(DEFAULT_CIRCLED_CHARACTER_RADIUS)
    }
}
