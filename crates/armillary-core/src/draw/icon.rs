//! Visibility icons drawn in the leading lane of a member area.

use crate::{
    color::Color,
    draw::{DrawContext, Drawable, ShapePrimitive, StrokeDefinition, Visibility},
    geometry::{Point, Size},
    metrics::TextMetrics,
};

/// Border and fill colors of an icon.
fn palette(visibility: Visibility) -> (&'static str, &'static str) {
    match visibility {
        Visibility::Public => ("#038048", "#84BE84"),
        Visibility::Private => ("#C82930", "#F24D5C"),
        Visibility::Protected => ("#B38D22", "#FFFF44"),
        Visibility::PackagePrivate => ("#1963A0", "#4177AF"),
    }
}

/// Icon for one member's visibility.
///
/// Methods get a filled icon and fields an outlined one. A member without a
/// marker gets an invisible 1x1 placeholder so every row of the lane has an
/// icon slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityIcon {
    visibility: Option<Visibility>,
    size: f32,
    is_method: bool,
}

impl VisibilityIcon {
    pub fn new(visibility: Option<Visibility>, size: f32, is_method: bool) -> Self {
        Self {
            visibility,
            size,
            is_method,
        }
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    fn outline(&self, visibility: Visibility) -> ShapePrimitive {
        let s = self.size;
        match visibility {
            Visibility::Public => ShapePrimitive::Ellipse {
                size: Size::new(s, s),
            },
            Visibility::Private => ShapePrimitive::Rect {
                size: Size::new(s, s),
                corner_radius: 0.0,
                shadow: 0.0,
            },
            Visibility::Protected => ShapePrimitive::Polygon {
                points: vec![
                    Point::new(s / 2.0, 0.0),
                    Point::new(s, s / 2.0),
                    Point::new(s / 2.0, s),
                    Point::new(0.0, s / 2.0),
                ],
                shadow: 0.0,
            },
            Visibility::PackagePrivate => ShapePrimitive::Polygon {
                points: vec![
                    Point::new(s / 2.0, 0.0),
                    Point::new(s, s),
                    Point::new(0.0, s),
                ],
                shadow: 0.0,
            },
        }
    }
}

impl Drawable for VisibilityIcon {
    fn measure(&self, _metrics: &dyn TextMetrics) -> Size {
        match self.visibility {
            Some(_) => Size::new(self.size + 1.0, self.size + 1.0),
            None => Size::new(1.0, 1.0),
        }
    }

    fn draw(&self, ctx: &DrawContext) {
        let Some(visibility) = self.visibility else {
            return;
        };

        let (border, fill) = palette(visibility);
        let fill = if self.is_method {
            Color::resolve(Some(fill))
        } else {
            Color::transparent()
        };
        let ctx = ctx
            .with_color(Color::resolve(Some(border)))
            .with_background(fill)
            .with_stroke(StrokeDefinition::new(1.0));
        ctx.draw_shape(Point::new(0.5, 0.5), &self.outline(visibility));
    }
}
