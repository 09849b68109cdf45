//! The immutable drawing context.

use log::trace;

use crate::{
    color::Color,
    draw::{FontConfiguration, Paint, ShapePrimitive, StrokeDefinition, Surface},
    geometry::{Point, Size, Translation},
    metrics::TextMetrics,
};

/// State threaded through the draw pass.
///
/// A context is a value: every `with_*` method returns a new context and
/// leaves the receiver untouched, so a parent can hand differently
/// translated copies to each child without restoring anything afterwards.
///
/// All drawing calls take coordinates relative to the context origin; the
/// accumulated translation is applied before the call reaches the
/// [`Surface`].
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::{DrawContext, RecordingSurface};
/// # use armillary_core::geometry::{Point, Translation};
/// # use armillary_core::metrics::MonospaceMetrics;
/// let metrics = MonospaceMetrics::default();
/// let surface = RecordingSurface::new();
/// let root = DrawContext::new(&surface, &metrics);
///
/// let child = root.with_translation(Translation::new(10.0, 5.0));
/// child.draw_line(Point::default(), Point::new(0.0, 20.0));
///
/// assert_eq!(surface.lines(), vec![(Point::new(10.0, 5.0), Point::new(10.0, 25.0))]);
/// assert_eq!(root.translation(), Translation::identity());
/// ```
#[derive(Debug, Clone)]
pub struct DrawContext<'a> {
    surface: &'a dyn Surface,
    metrics: &'a dyn TextMetrics,
    translation: Translation,
    line_color: Color,
    background: Color,
    stroke: StrokeDefinition,
}

impl<'a> DrawContext<'a> {
    /// Creates a root context with black lines, no fill and a 1px stroke.
    pub fn new(surface: &'a dyn Surface, metrics: &'a dyn TextMetrics) -> Self {
        Self {
            surface,
            metrics,
            translation: Translation::identity(),
            line_color: Color::default(),
            background: Color::transparent(),
            stroke: StrokeDefinition::default(),
        }
    }

    pub fn metrics(&self) -> &'a dyn TextMetrics {
        self.metrics
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn with_color(&self, color: Color) -> Self {
        Self {
            line_color: color,
            ..self.clone()
        }
    }

    pub fn with_background(&self, background: Color) -> Self {
        Self {
            background,
            ..self.clone()
        }
    }

    pub fn with_stroke(&self, stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            ..self.clone()
        }
    }

    /// Moves the origin by `translation`, on top of the current one.
    pub fn with_translation(&self, translation: Translation) -> Self {
        Self {
            translation: self.translation.compose(translation),
            ..self.clone()
        }
    }

    /// Draws a shape with its top-left corner at `origin`.
    pub fn draw_shape(&self, origin: Point, shape: &ShapePrimitive) {
        self.surface
            .shape(origin.translate(self.translation), shape, &self.paint());
    }

    pub fn draw_line(&self, from: Point, to: Point) {
        self.surface.line(
            from.translate(self.translation),
            to.translate(self.translation),
            &self.paint(),
        );
    }

    pub fn draw_text(&self, origin: Point, text: &str, font: &FontConfiguration, size: Size) {
        self.surface
            .text(origin.translate(self.translation), text, font, size);
    }

    /// Draws whatever `f` draws inside a hyperlink region.
    ///
    /// The region is always closed, so links nest the way the calls nest.
    pub fn with_link<F>(&self, url: &str, f: F)
    where
        F: FnOnce(&DrawContext<'a>),
    {
        trace!(url; "Opening link region");
        self.surface.begin_link(url);
        f(self);
        self.surface.end_link();
    }

    fn paint(&self) -> Paint {
        Paint {
            line_color: self.line_color,
            fill: self.background,
            stroke: self.stroke.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        draw::{DrawCommand, RecordingSurface},
        metrics::MonospaceMetrics,
    };

    #[test]
    fn test_translations_accumulate() {
        let metrics = MonospaceMetrics::default();
        let surface = RecordingSurface::new();
        let ctx = DrawContext::new(&surface, &metrics)
            .with_translation(Translation::new(1.0, 2.0))
            .with_translation(Translation::new(3.0, 4.0));

        assert_eq!(ctx.translation(), Translation::new(4.0, 6.0));
    }

    #[test]
    fn test_with_methods_do_not_mutate_receiver() {
        let metrics = MonospaceMetrics::default();
        let surface = RecordingSurface::new();
        let ctx = DrawContext::new(&surface, &metrics);
        let red = Color::new("red").unwrap();

        let colored = ctx.with_color(red).with_background(red);
        assert_eq!(colored.line_color(), red);
        assert_eq!(colored.background(), red);
        assert_eq!(ctx.line_color(), Color::default());
        assert!(ctx.background().is_transparent());
    }

    #[test]
    fn test_shape_carries_paint() {
        let metrics = MonospaceMetrics::default();
        let surface = RecordingSurface::new();
        let blue = Color::new("blue").unwrap();
        let ctx = DrawContext::new(&surface, &metrics)
            .with_background(blue)
            .with_stroke(StrokeDefinition::new(2.5));

        let shape = ShapePrimitive::Ellipse {
            size: Size::new(4.0, 4.0),
        };
        ctx.draw_shape(Point::new(1.0, 1.0), &shape);

        match &surface.commands()[0] {
            DrawCommand::Shape { origin, paint, .. } => {
                assert_eq!(*origin, Point::new(1.0, 1.0));
                assert_eq!(paint.fill, blue);
                assert_eq!(paint.stroke.width(), 2.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_links_nest_and_close() {
        let metrics = MonospaceMetrics::default();
        let surface = RecordingSurface::new();
        let ctx = DrawContext::new(&surface, &metrics);

        ctx.with_link("outer", |ctx| {
            ctx.with_link("inner", |ctx| {
                ctx.draw_line(Point::default(), Point::new(1.0, 0.0));
            });
        });

        let commands = surface.commands();
        assert_eq!(
            commands[0],
            DrawCommand::BeginLink {
                url: "outer".to_string()
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::BeginLink {
                url: "inner".to_string()
            }
        );
        assert_eq!(commands[3], DrawCommand::EndLink);
        assert_eq!(commands[4], DrawCommand::EndLink);
    }
}
