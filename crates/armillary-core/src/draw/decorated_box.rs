//! Wrapped text inside a styled box.

use log::{debug, trace};

use crate::{
    color::Color,
    draw::{
        BoxShape, BoxStencil, DrawContext, Drawable, FixedWidthStencil, FontConfiguration,
        Intersection, Node, Stencil, StrokeDefinition, TextAtom, VerticalStack, split_lines,
        wrap_paragraph,
    },
    geometry::{Insets, Size, Translation},
    metrics::TextMetrics,
    style::{HorizontalAlignment, Style},
};

/// A block of text drawn inside a box outline.
///
/// Every visual parameter is read from a [`Style`] once, at construction.
///
/// The measured size is the text size plus padding, raised to the minimum
/// width, plus the shape's [shield](BoxShape::shield).
///
/// When the style sets a maximum width, construction takes two steps: the
/// text is first wrapped at that width to size the box, then each paragraph
/// is wrapped again against a [`BoxStencil`] of the resulting outline, still
/// bounded by the maximum width, so rounded and pointed shapes get shorter
/// lines where they are narrow. Left-aligned lines start where the outline
/// allows at their height. The box keeps the width of that outline.
#[derive(Debug)]
pub struct DecoratedBox {
    shape: BoxShape,
    text: VerticalStack,
    /// Per-line horizontal offsets from the stencil; empty without one.
    indents: Vec<f32>,
    padding: Insets,
    margin: Insets,
    round_corner: f32,
    shadow: f32,
    stroke: StrokeDefinition,
    line_color: Color,
    background: Color,
    minimum_width: f32,
    /// Width of the outline the stencil was built for, kept after re-wrapping.
    stencil_width: f32,
    alignment: HorizontalAlignment,
}

/// Re-wrapping can change the box height, which moves the lower corners.
const MAX_STENCIL_PASSES: usize = 4;

impl DecoratedBox {
    pub fn new(label: &str, shape: BoxShape, style: &Style, metrics: &dyn TextMetrics) -> Self {
        let font = style.font();
        let alignment = style.horizontal_alignment();
        let paragraphs = split_lines(label);

        let lines: Vec<String> = match style.maximum_width() {
            Some(width) => wrap_all(&paragraphs, &font, metrics, &FixedWidthStencil::new(width))
                .into_iter()
                .map(|(line, _)| line)
                .collect(),
            None => paragraphs.iter().map(|line| line.to_string()).collect(),
        };

        let mut instance = Self {
            shape,
            text: text_stack(lines, &font, alignment),
            indents: Vec::new(),
            padding: style.padding(),
            margin: style.margin(),
            round_corner: style.round_corner(),
            shadow: style.shadowing(),
            stroke: style.stroke(),
            line_color: style.line_color(),
            background: style.background_color(),
            minimum_width: style.minimum_width(),
            stencil_width: 0.0,
            alignment,
        };

        if let Some(maximum_width) = style.maximum_width() {
            let mut outline = instance.measure(metrics);
            instance.stencil_width = outline.width() - shape.shield();
            for pass in 1..=MAX_STENCIL_PASSES {
                let stencil = Intersection::new(
                    BoxStencil::new(shape, outline, instance.round_corner, instance.padding),
                    FixedWidthStencil::new(maximum_width),
                );
                let (lines, indents): (Vec<String>, Vec<f32>) =
                    wrap_all(&paragraphs, &font, metrics, &stencil).into_iter().unzip();
                instance.text = text_stack(lines, &font, alignment);
                instance.indents = indents;

                let wrapped = instance.measure(metrics);
                if wrapped == outline {
                    break;
                }
                trace!(pass, height = wrapped.height(); "Outline changed, wrapping again");
                outline = wrapped;
            }
        }

        debug!(
            shape:?,
            lines = instance.text.len(),
            size:? = instance.measure(metrics);
            "Built decorated box"
        );
        instance
    }

    pub fn shape(&self) -> BoxShape {
        self.shape
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Space the box asks its siblings to keep free; not part of its size.
    pub fn margin(&self) -> Insets {
        self.margin
    }

    /// The wrapped text lines, top to bottom.
    pub fn lines(&self) -> Vec<&str> {
        self.text
            .children()
            .iter()
            .filter_map(|child| match child {
                Node::Atom(atom) => Some(atom.content()),
                _ => None,
            })
            .collect()
    }

    fn text_offset(&self, size: Size, text_size: Size) -> Translation {
        match self.alignment {
            HorizontalAlignment::Left => Translation::new(self.padding.left(), self.padding.top()),
            HorizontalAlignment::Right => Translation::new(
                size.width() - text_size.width() - self.padding.right(),
                self.padding.bottom(),
            ),
            HorizontalAlignment::Center => Translation::new(
                (size.width() - text_size.width()) / 2.0,
                self.padding.bottom(),
            ),
        }
    }
}

impl Drawable for DecoratedBox {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        let inner = self
            .text
            .measure(metrics)
            .add_padding(self.padding)
            .at_least(self.minimum_width.max(self.stencil_width), 0.0);
        inner.delta(self.shape.shield(), 0.0)
    }

    fn draw(&self, ctx: &DrawContext) {
        let metrics = ctx.metrics();
        let size = self.measure(metrics);
        let text_size = self.text.measure(metrics);

        let ctx = ctx
            .with_color(self.line_color)
            .with_background(self.background)
            .with_stroke(self.stroke.clone());
        self.shape.draw(&ctx, size, self.round_corner, self.shadow);

        let offset = self.text_offset(size, text_size);
        if self.alignment != HorizontalAlignment::Left || self.indents.is_empty() {
            self.text.draw(&ctx.with_translation(offset));
            return;
        }

        let mut y = 0.0;
        for (line, indent) in self.text.children().iter().zip(&self.indents) {
            line.draw(&ctx.with_translation(offset.compose(Translation::new(*indent, y))));
            y += line.measure(metrics).height();
        }
    }
}

/// Wraps every paragraph below the previous one and pairs each line with the
/// stencil's start over the line's height.
fn wrap_all(
    paragraphs: &[&str],
    font: &FontConfiguration,
    metrics: &dyn TextMetrics,
    stencil: &dyn Stencil,
) -> Vec<(String, f32)> {
    let mut lines = Vec::new();
    let mut top = 0.0;
    for paragraph in paragraphs {
        for line in wrap_paragraph(paragraph, font, metrics, stencil, top) {
            let height = metrics.measure_text(&line, font).height();
            let (indent, _) = stencil.line_interval(top, top + height);
            top += height;
            lines.push((line, indent));
        }
    }
    lines
}

fn text_stack(lines: Vec<String>, font: &FontConfiguration, alignment: HorizontalAlignment) -> VerticalStack {
    lines
        .into_iter()
        .fold(VerticalStack::new().with_alignment(alignment), |stack, line| {
            stack.with_child(TextAtom::new(line, font.clone()))
        })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        draw::{DrawCommand, RecordingSurface, ShapePrimitive},
        geometry::Point,
        metrics::MonospaceMetrics,
    };

    fn metrics() -> MonospaceMetrics {
        MonospaceMetrics::new(5.0, 10.0)
    }

    fn padded() -> Style {
        Style::new().with_padding(Insets::new(2.0, 4.0, 6.0, 8.0))
    }

    #[test]
    fn test_measure_adds_padding() {
        let metrics = metrics();
        let decorated = DecoratedBox::new("abcd", BoxShape::Plain, &padded(), &metrics);
        assert_eq!(decorated.measure(&metrics), Size::new(32.0, 18.0));
    }

    #[test]
    fn test_minimum_width_floor() {
        let metrics = metrics();
        let style = padded().with_minimum_width(100.0);
        let decorated = DecoratedBox::new("abcd", BoxShape::Plain, &style, &metrics);
        assert_approx_eq!(f32, decorated.measure(&metrics).width(), 100.0);
    }

    #[test]
    fn test_shield_added_after_floor() {
        let metrics = metrics();
        let style = padded().with_minimum_width(100.0);
        let decorated = DecoratedBox::new("abcd", BoxShape::Input, &style, &metrics);
        assert_approx_eq!(f32, decorated.measure(&metrics).width(), 110.0);
    }

    #[test]
    fn test_left_alignment_uses_top_padding() {
        let metrics = metrics();
        let decorated = DecoratedBox::new("abcd", BoxShape::Plain, &padded(), &metrics);
        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));

        assert_eq!(surface.texts()[0].0, Point::new(8.0, 2.0));
    }

    #[test]
    fn test_right_alignment_uses_bottom_padding() {
        let metrics = metrics();
        let style = padded()
            .with_minimum_width(100.0)
            .with_horizontal_alignment(HorizontalAlignment::Right);
        let decorated = DecoratedBox::new("abcd", BoxShape::Plain, &style, &metrics);
        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));

        let (origin, _) = surface.texts()[0].clone();
        assert_approx_eq!(f32, origin.x() + 20.0, 100.0 - 4.0);
        assert_approx_eq!(f32, origin.y(), 6.0);
    }

    #[test]
    fn test_center_alignment() {
        let metrics = metrics();
        let style = padded()
            .with_minimum_width(100.0)
            .with_horizontal_alignment(HorizontalAlignment::Center);
        let decorated = DecoratedBox::new("abcd", BoxShape::Plain, &style, &metrics);
        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));

        assert_eq!(surface.texts()[0].0, Point::new(40.0, 6.0));
    }

    #[test]
    fn test_shape_drawn_first_with_transparent_defaults() {
        let metrics = metrics();
        let decorated =
            DecoratedBox::new("abcd", BoxShape::Plain, &padded().with_round_corner(10.0), &metrics);
        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));

        match &surface.commands()[0] {
            DrawCommand::Shape {
                shape: ShapePrimitive::Rect {
                    size,
                    corner_radius,
                    ..
                },
                paint,
                ..
            } => {
                assert_eq!(*size, Size::new(32.0, 18.0));
                assert_approx_eq!(f32, *corner_radius, 5.0);
                assert!(paint.line_color.is_transparent());
                assert!(paint.fill.is_transparent());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_paragraphs_split_on_escaped_newline() {
        let metrics = metrics();
        let decorated = DecoratedBox::new(r"first\nsecond", BoxShape::Plain, &Style::new(), &metrics);
        assert_eq!(decorated.lines(), vec!["first", "second"]);
        assert_eq!(decorated.measure(&metrics), Size::new(30.0, 20.0));
    }

    #[test]
    fn test_maximum_width_wraps() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let style = Style::new()
            .with_padding(Insets::uniform(2.0))
            .with_maximum_width(10.0);
        let decorated =
            DecoratedBox::new("the quick brown fox", BoxShape::Plain, &style, &metrics);

        assert_eq!(decorated.lines(), vec!["the quick", "brown fox"]);
        assert_eq!(decorated.measure(&metrics), Size::new(13.0, 24.0));
    }

    #[test]
    fn test_minimum_width_does_not_lift_maximum_width() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let style = Style::new()
            .with_maximum_width(10.0)
            .with_minimum_width(100.0);
        let decorated =
            DecoratedBox::new("the quick brown fox", BoxShape::Plain, &style, &metrics);

        assert_eq!(decorated.lines(), vec!["the quick", "brown fox"]);
        assert_approx_eq!(f32, decorated.measure(&metrics).width(), 100.0);
    }

    #[test]
    fn test_stencil_rewrap_keeps_text_inside_box() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let style = Style::new()
            .with_padding(Insets::uniform(2.0))
            .with_round_corner(16.0)
            .with_maximum_width(14.0);
        let decorated = DecoratedBox::new(
            "aaa bbb ccc ddd eee fff",
            BoxShape::Plain,
            &style,
            &metrics,
        );
        assert_eq!(decorated.lines(), vec!["aaa bbb", "ccc ddd eee", "fff"]);

        let size = decorated.measure(&metrics);
        assert_eq!(size, Size::new(15.0, 34.0));

        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));
        for (origin, text) in surface.texts() {
            let right = origin.x() + text.len() as f32;
            for y in [origin.y(), origin.y() + 10.0] {
                let (left_edge, right_edge) = BoxShape::Plain.interior(size, 16.0, y);
                assert!(origin.x() >= left_edge - 1e-3, "{text} starts outside at {y}");
                assert!(right <= right_edge + 1e-3, "{text} ends outside at {y}");
            }
            assert!(origin.y() + 10.0 <= size.height());
        }
    }

    #[test]
    fn test_narrowed_line_follows_rounded_corner() {
        let metrics = MonospaceMetrics::new(1.0, 10.0);
        let style = Style::new()
            .with_padding(Insets::uniform(2.0))
            .with_round_corner(40.0)
            .with_maximum_width(30.0);
        let decorated = DecoratedBox::new(
            "aaa bbb ccc ddd eee fff ggg hhh iii jjj kkk lll mmm nnn ooo ppp",
            BoxShape::Plain,
            &style,
            &metrics,
        );

        let size = decorated.measure(&metrics);
        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));
        let (origin, _) = surface.texts()[0].clone();
        let (left_edge, _) = BoxShape::Plain.interior(size, 40.0, origin.y());

        assert_approx_eq!(f32, origin.y(), 2.0);
        assert!(left_edge > 2.0);
        assert!(origin.x() >= left_edge - 1e-3);
    }

    #[test]
    fn test_shadow_is_not_part_of_size() {
        let metrics = metrics();
        let style = Style::new().with_shadowing(4.0);
        let decorated = DecoratedBox::new("ab", BoxShape::Plain, &style, &metrics);
        assert_eq!(decorated.measure(&metrics), Size::new(10.0, 10.0));

        let surface = RecordingSurface::new();
        decorated.draw(&DrawContext::new(&surface, &metrics));
        match &surface.commands()[0] {
            DrawCommand::Shape {
                shape: ShapePrimitive::Rect { size, shadow, .. },
                ..
            } => {
                assert_eq!(*size, Size::new(10.0, 10.0));
                assert_approx_eq!(f32, *shadow, 4.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_margin_is_not_part_of_size() {
        let metrics = metrics();
        let style = Style::new().with_margin(Insets::uniform(20.0));
        let decorated = DecoratedBox::new("ab", BoxShape::Plain, &style, &metrics);
        assert_eq!(decorated.margin(), Insets::uniform(20.0));
        assert_eq!(decorated.measure(&metrics), Size::new(10.0, 10.0));
    }

    proptest! {
        #[test]
        fn prop_box_floor(
            text in "[a-z]{1,20}",
            min_width in 0u16..300,
            left in 0u8..20,
            right in 0u8..20,
        ) {
            let metrics = metrics();
            let style = Style::new()
                .with_padding(Insets::new(0.0, right as f32, 0.0, left as f32))
                .with_minimum_width(min_width as f32);
            let decorated = DecoratedBox::new(&text, BoxShape::Output, &style, &metrics);

            let size = decorated.measure(&metrics);
            let text_width = text.len() as f32 * 5.0;
            prop_assert!(size.width() >= min_width as f32);
            prop_assert!(size.width() >= text_width + left as f32 + right as f32);
            prop_assert!(size.width() >= decorated.shape().shield());
            prop_assert_eq!(decorated.measure(&metrics), size);
        }
    }
}
