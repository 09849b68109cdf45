//! Fonts and single-line text.
//!
//! - [`FontConfiguration`] - family, size, color and decorations of a font
//! - [`TextAtom`] - one line of text, the leaf of every layout

use crate::{
    color::Color,
    draw::{DrawContext, Drawable},
    geometry::{Bounds, Point, Size},
    metrics::TextMetrics,
};

/// Appearance of rendered text.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Family | `"sans-serif"` |
/// | Size | `14` |
/// | Color | `None` (renderer default, typically black) |
/// | Italic | `false` |
/// | Underline | `false` |
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::FontConfiguration;
/// let font = FontConfiguration::default().with_family("monospace").italic();
/// assert_eq!(font.family(), "monospace");
/// assert!(font.is_italic());
/// assert!(!font.is_underline());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfiguration {
    family: String,
    size: f32,
    color: Option<Color>,
    italic: bool,
    underline: bool,
}

impl FontConfiguration {
    pub fn new(family: &str, size: f32) -> Self {
        Self {
            family: family.to_string(),
            size,
            ..Self::default()
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    pub fn with_family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Returns the same font in italics.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Returns the same font with an underline.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

impl Default for FontConfiguration {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14.0,
            color: None,
            italic: false,
            underline: false,
        }
    }
}

/// A single line of text.
///
/// The atom's size is whatever the metrics report for its content; it adds no
/// padding of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAtom {
    content: String,
    font: FontConfiguration,
}

impl TextAtom {
    pub fn new(content: impl Into<String>, font: FontConfiguration) -> Self {
        Self {
            content: content.into(),
            font,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> &FontConfiguration {
        &self.font
    }
}

impl Drawable for TextAtom {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        metrics.measure_text(&self.content, &self.font)
    }

    fn draw(&self, ctx: &DrawContext) {
        if self.content.is_empty() {
            return;
        }
        let size = self.measure(ctx.metrics());
        ctx.draw_text(Point::default(), &self.content, &self.font, size);
    }

    fn inner_position(&self, query: &str, metrics: &dyn TextMetrics) -> Option<Bounds> {
        self.content
            .starts_with(query)
            .then(|| Point::default().to_bounds(self.measure(metrics)))
    }
}
