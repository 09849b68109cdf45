//! Drawing surfaces.
//!
//! A [`Surface`] receives primitive drawing calls in absolute coordinates. The
//! [`DrawContext`](crate::draw::DrawContext) resolves translations and paint
//! before anything reaches the surface, so implementations only have to record
//! or encode what they are given.
//!
//! Surfaces take `&self`: drawing borrows the surface immutably through every
//! nested context, so implementations collect output behind interior
//! mutability.

use std::cell::RefCell;

use crate::{
    color::Color,
    draw::{FontConfiguration, StrokeDefinition},
    geometry::{Point, Size},
};

/// Geometry of a filled and stroked shape, relative to its top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePrimitive {
    /// An axis-aligned rectangle, optionally with rounded corners and a
    /// drop shadow offset by `shadow` in both directions.
    Rect {
        size: Size,
        corner_radius: f32,
        shadow: f32,
    },
    /// A closed polygon.
    Polygon { points: Vec<Point>, shadow: f32 },
    /// An ellipse inscribed in `size`.
    Ellipse { size: Size },
}

/// Colors and stroke applied to a primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub line_color: Color,
    pub fill: Color,
    pub stroke: StrokeDefinition,
}

/// Receiver of resolved drawing calls.
pub trait Surface: std::fmt::Debug {
    fn shape(&self, origin: Point, shape: &ShapePrimitive, paint: &Paint);

    fn line(&self, from: Point, to: Point, paint: &Paint);

    /// Draws `text` whose measured extent is `size`, top-left at `origin`.
    fn text(&self, origin: Point, text: &str, font: &FontConfiguration, size: Size);

    /// Opens a hyperlink region; every call is matched by [`Surface::end_link`].
    fn begin_link(&self, url: &str);

    fn end_link(&self);
}

/// A call recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Shape {
        origin: Point,
        shape: ShapePrimitive,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Text {
        origin: Point,
        text: String,
        font: FontConfiguration,
        size: Size,
    },
    BeginLink {
        url: String,
    },
    EndLink,
}

/// Surface that records every call in order.
///
/// Used for headless inspection of a drawing, mostly in tests.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::{DrawContext, Drawable, FontConfiguration, RecordingSurface, TextAtom};
/// # use armillary_core::metrics::MonospaceMetrics;
/// let metrics = MonospaceMetrics::default();
/// let surface = RecordingSurface::new();
/// TextAtom::new("hello", FontConfiguration::default())
///     .draw(&DrawContext::new(&surface, &metrics));
///
/// assert_eq!(surface.texts().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: RefCell<Vec<DrawCommand>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded call.
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.borrow().clone()
    }

    /// Returns the origin and content of every recorded text call.
    pub fn texts(&self) -> Vec<(Point, String)> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { origin, text, .. } => Some((*origin, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// Returns the endpoints of every recorded line call.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, command: DrawCommand) {
        self.commands.borrow_mut().push(command);
    }
}

impl Surface for RecordingSurface {
    fn shape(&self, origin: Point, shape: &ShapePrimitive, paint: &Paint) {
        self.record(DrawCommand::Shape {
            origin,
            shape: shape.clone(),
            paint: paint.clone(),
        });
    }

    fn line(&self, from: Point, to: Point, paint: &Paint) {
        self.record(DrawCommand::Line {
            from,
            to,
            paint: paint.clone(),
        });
    }

    fn text(&self, origin: Point, text: &str, font: &FontConfiguration, size: Size) {
        self.record(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font: font.clone(),
            size,
        });
    }

    fn begin_link(&self, url: &str) {
        self.record(DrawCommand::BeginLink {
            url: url.to_string(),
        });
    }

    fn end_link(&self) {
        self.record(DrawCommand::EndLink);
    }
}
