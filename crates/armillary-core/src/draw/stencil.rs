//! Stencils and stencil-constrained text wrapping.
//!
//! A [`Stencil`] maps a vertical offset to the horizontal interval text may
//! occupy at that height. [`wrap_paragraph`] breaks a paragraph greedily so
//! that each output line fits the stencil both at its top and at its bottom
//! edge.

use log::trace;

use crate::{
    draw::{BoxShape, FontConfiguration},
    geometry::{Insets, Size},
    metrics::TextMetrics,
};

/// Horizontal extent of the area available to text at a vertical offset.
///
/// Offsets and positions are in the coordinates of the wrapped text block.
pub trait Stencil: std::fmt::Debug {
    fn starting_x(&self, y: f32) -> f32;

    fn ending_x(&self, y: f32) -> f32;

    /// Width available at `y`, never negative.
    fn available_width(&self, y: f32) -> f32 {
        (self.ending_x(y) - self.starting_x(y)).max(0.0)
    }

    /// Interval usable by a line spanning `top..bottom`, the narrower of its
    /// two edges.
    fn line_interval(&self, top: f32, bottom: f32) -> (f32, f32) {
        (
            self.starting_x(top).max(self.starting_x(bottom)),
            self.ending_x(top).min(self.ending_x(bottom)),
        )
    }
}

/// The same width at every height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthStencil {
    width: f32,
}

impl FixedWidthStencil {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Stencil for FixedWidthStencil {
    fn starting_x(&self, _y: f32) -> f32 {
        0.0
    }

    fn ending_x(&self, _y: f32) -> f32 {
        self.width
    }
}

/// Both stencils at once: the later start and the earlier end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<A, B> {
    first: A,
    second: B,
}

impl<A: Stencil, B: Stencil> Intersection<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Stencil, B: Stencil> Stencil for Intersection<A, B> {
    fn starting_x(&self, y: f32) -> f32 {
        self.first.starting_x(y).max(self.second.starting_x(y))
    }

    fn ending_x(&self, y: f32) -> f32 {
        self.first.ending_x(y).min(self.second.ending_x(y))
    }
}

/// The padded interior of a box outline of a known outer size.
///
/// Text inside a box starts at the padding corner, so text offset `y` maps to
/// box height `y + padding.top` and text offset `x` to box `x + padding.left`.
/// Near rounded or pointed edges the start moves right of the padding corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStencil {
    shape: BoxShape,
    size: Size,
    round_corner: f32,
    padding: Insets,
}

impl BoxStencil {
    pub fn new(shape: BoxShape, size: Size, round_corner: f32, padding: Insets) -> Self {
        Self {
            shape,
            size,
            round_corner,
            padding,
        }
    }

    fn interior(&self, y: f32) -> (f32, f32) {
        self.shape
            .interior(self.size, self.round_corner, y + self.padding.top())
    }
}

impl Stencil for BoxStencil {
    fn starting_x(&self, y: f32) -> f32 {
        (self.interior(y).0 - self.padding.left()).max(0.0)
    }

    fn ending_x(&self, y: f32) -> f32 {
        self.interior(y).1 - self.padding.horizontal_sum()
    }
}

/// Breaks `paragraph` into lines that fit `stencil`, starting at offset `top`.
///
/// Words are separated by whitespace and never split; a word wider than the
/// available width is placed alone on its line. A paragraph without words
/// yields one empty line.
pub fn wrap_paragraph(
    paragraph: &str,
    font: &FontConfiguration,
    metrics: &dyn TextMetrics,
    stencil: &dyn Stencil,
    top: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut y = top;

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        let candidate_size = metrics.measure_text(&candidate, font);
        let (start, end) = stencil.line_interval(y, y + candidate_size.height());
        let limit = (end - start).max(0.0);

        if candidate_size.width() <= limit {
            current = candidate;
        } else {
            trace!(line = current.as_str(), y, limit; "Breaking line");
            y += metrics.measure_text(&current, font).height();
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::metrics::MonospaceMetrics;

    #[test]
    fn test_fixed_width_wrap() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let lines = wrap_paragraph(
            "the quick brown fox",
            &FontConfiguration::default(),
            &metrics,
            &FixedWidthStencil::new(10.0),
            0.0,
        );
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_long_word_kept_whole() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let lines = wrap_paragraph(
            "a extraordinarily b",
            &FontConfiguration::default(),
            &metrics,
            &FixedWidthStencil::new(5.0),
            0.0,
        );
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_empty_paragraph_yields_one_line() {
        let metrics = MonospaceMetrics::default();
        let lines = wrap_paragraph(
            "   ",
            &FontConfiguration::default(),
            &metrics,
            &FixedWidthStencil::new(5.0),
            0.0,
        );
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_box_stencil_subtracts_padding() {
        let stencil = BoxStencil::new(
            BoxShape::Plain,
            Size::new(100.0, 40.0),
            0.0,
            Insets::new(5.0, 8.0, 5.0, 12.0),
        );
        assert_approx_eq!(f32, stencil.starting_x(0.0), 0.0);
        assert_approx_eq!(f32, stencil.ending_x(0.0), 80.0);
        assert_approx_eq!(f32, stencil.available_width(10.0), 80.0);
    }

    #[test]
    fn test_box_stencil_start_follows_rounded_corner() {
        let stencil = BoxStencil::new(
            BoxShape::Plain,
            Size::new(60.0, 60.0),
            40.0,
            Insets::uniform(2.0),
        );
        // Box height 2 on a 20 radius corner: 20 - sqrt(400 - 324)
        assert_approx_eq!(f32, stencil.starting_x(0.0), 20.0 - 76f32.sqrt() - 2.0, epsilon = 1e-4);
        assert_approx_eq!(f32, stencil.starting_x(25.0), 0.0);
    }

    #[test]
    fn test_intersection_keeps_narrowest_interval() {
        let stencil = Intersection::new(
            BoxStencil::new(BoxShape::Plain, Size::new(100.0, 20.0), 0.0, Insets::default()),
            FixedWidthStencil::new(10.0),
        );
        assert_approx_eq!(f32, stencil.starting_x(5.0), 0.0);
        assert_approx_eq!(f32, stencil.ending_x(5.0), 10.0);

        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let lines = wrap_paragraph(
            "the quick brown fox",
            &FontConfiguration::default(),
            &metrics,
            &stencil,
            0.0,
        );
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_rounded_stencil_wraps_narrower_near_top() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let font = FontConfiguration::default();
        // Stadium 40 tall: a line at the very top is much narrower than one in the middle
        let stencil = BoxStencil::new(
            BoxShape::Continuous,
            Size::new(60.0, 40.0),
            0.0,
            Insets::default(),
        );
        assert!(stencil.available_width(0.0) < stencil.available_width(15.0));

        let lines = wrap_paragraph("aaaa bbbb cccc dddd eeee", &font, &metrics, &stencil, 0.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.starts_with(' '));
        }
    }
}
