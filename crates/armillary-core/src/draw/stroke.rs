//! Line thickness and dash patterns.
//!
//! A [`StrokeDefinition`] carries no color. Lines take their color from the
//! [`DrawContext`](crate::draw::DrawContext) they are drawn with, so one stroke
//! read from a style serves every part of a node.

use std::str::FromStr;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
    /// 2px dot, 3px gap
    Dotted,
    /// 10px dash, 5px gap, 2px dot, 5px gap
    DashDot,
    /// Raw SVG dasharray such as `"10,5,2,3"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = std::convert::Infallible;

    /// Known names map to their patterns; anything else is kept as a raw
    /// dasharray.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let style = match name.trim() {
            "" | "solid" | "plain" => Self::Solid,
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            "dash-dot" | "dashdot" => Self::DashDot,
            pattern => Self::Custom(pattern.to_string()),
        };
        Ok(style)
    }
}

impl StrokeStyle {
    /// SVG `stroke-dasharray` value; solid lines have none.
    pub fn dasharray(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("2,3"),
            Self::DashDot => Some("10,5,2,5"),
            Self::Custom(pattern) => Some(pattern.as_str()),
        }
    }
}

/// Thickness and dash pattern of a line.
///
/// # Examples
///
/// ```
/// use armillary_core::draw::{StrokeDefinition, StrokeStyle};
///
/// let stroke = StrokeDefinition::new(1.5).with_style(StrokeStyle::Dashed);
/// assert_eq!(stroke.width(), 1.5);
/// assert_eq!(stroke.style().dasharray(), Some("5,5"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    width: f32,
    style: StrokeStyle,
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl StrokeDefinition {
    /// A solid stroke `width` units thick.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }
}

/// Sets the stroke attributes of an SVG element from a stroke and a color.
///
/// # Examples
///
/// ```
/// use armillary_core::{color::Color, draw::StrokeDefinition};
/// use svg::node::element::Line;
///
/// let stroke = StrokeDefinition::new(2.0);
/// let color = Color::new("navy").unwrap();
/// let line = armillary_core::apply_stroke!(Line::new().set("x2", 10), &stroke, &color);
/// assert!(line.to_string().contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr, $color:expr) => {{
        let element = $element
            .set("stroke", $color.to_svg_paint())
            .set("stroke-opacity", $color.alpha())
            .set("stroke-width", $stroke.width());
        match $stroke.style().dasharray() {
            Some(pattern) => element.set("stroke-dasharray", pattern),
            None => element,
        }
    }};
}
