//! Text measurement collaborators.
//!
//! Every measurement in the engine goes through the [`TextMetrics`] trait.
//! Implementations must be deterministic and free of observable side effects:
//! measuring the same string with the same font twice yields the same size.
//!
//! - [`CosmicTextMetrics`] shapes text with real fonts through `cosmic-text`.
//! - [`MonospaceMetrics`] uses a fixed advance per character, which makes
//!   layouts reproducible without any installed fonts.

use std::sync::Mutex;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style as FontStyle};
use log::info;

use crate::{draw::FontConfiguration, geometry::Size};

/// Measures a single line of text rendered with a font configuration.
pub trait TextMetrics: std::fmt::Debug {
    /// Returns the size of `text` rendered with `font`.
    ///
    /// An empty string measures as [`Size::default`].
    fn measure_text(&self, text: &str, font: &FontConfiguration) -> Size;
}

/// Font measurement backed by `cosmic-text` shaping.
///
/// The [`FontSystem`] is expensive to build, so one instance is kept for the
/// lifetime of the metrics value and guarded by a mutex.
pub struct CosmicTextMetrics {
    font_system: Mutex<FontSystem>,
}

impl std::fmt::Debug for CosmicTextMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicTextMetrics").finish_non_exhaustive()
    }
}

impl Default for CosmicTextMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicTextMetrics {
    /// Create new metrics with a default FontSystem
    pub fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }
}

impl TextMetrics for CosmicTextMetrics {
    fn measure_text(&self, text: &str, font: &FontConfiguration) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Convert font size from points to pixels (roughly 1.33x multiplier for standard DPI)
        let font_size_px = font.size() * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(font.family()));
        if font.is_italic() {
            attrs = attrs.style(FontStyle::Italic);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let mut runs = 0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
            runs += 1;
        }

        if runs == 0 {
            // No shaping information, fall back to an average advance
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

/// Fixed-advance measurement.
///
/// Every character is `char_width` wide and every non-empty line is
/// `line_height` tall, regardless of the font.
///
/// # Examples
///
/// ```
/// # use armillary_core::metrics::{MonospaceMetrics, TextMetrics};
/// # use armillary_core::draw::FontConfiguration;
/// # use armillary_core::geometry::Size;
/// let metrics = MonospaceMetrics::new(5.0, 12.0);
/// let size = metrics.measure_text("abcd", &FontConfiguration::default());
/// assert_eq!(size, Size::new(20.0, 12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    char_width: f32,
    line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(7.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure_text(&self, text: &str, _font: &FontConfiguration) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        Size::new(text.chars().count() as f32 * self.char_width, self.line_height)
    }
}
