//! Outlines of decorated boxes.

use crate::{
    draw::{DrawContext, ShapePrimitive},
    geometry::{Point, Size},
};

/// Extra width reserved by shapes with a pointed or notched side.
const SHIELD: f32 = 10.0;

/// Distance of the inner bars of a [`BoxShape::Procedure`] from its sides.
const PROCEDURE_BAR: f32 = 4.0;

/// Outline drawn around the content of a [`DecoratedBox`](crate::draw::DecoratedBox).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxShape {
    /// Rectangle with optionally rounded corners.
    #[default]
    Plain,
    /// Rectangle with a notch cut into its right side.
    Input,
    /// Rectangle whose right side comes to a point.
    Output,
    /// Rectangle with an inner vertical bar along each side.
    Procedure,
    /// Stadium with fully rounded ends.
    Continuous,
}

impl BoxShape {
    /// Width added to the box beyond its padded content.
    pub fn shield(self) -> f32 {
        match self {
            Self::Input | Self::Output => SHIELD,
            Self::Plain | Self::Procedure | Self::Continuous => 0.0,
        }
    }

    /// Horizontal interior `(left, right)` of the outline at height `y`,
    /// in box coordinates.
    pub fn interior(self, size: Size, round_corner: f32, y: f32) -> (f32, f32) {
        let width = size.width();
        let height = size.height();
        match self {
            Self::Plain => {
                let inset = corner_inset(round_corner / 2.0, y, height);
                (inset, width - inset)
            }
            Self::Continuous => {
                let inset = corner_inset(height / 2.0, y, height);
                (inset, width - inset)
            }
            Self::Input | Self::Output => (0.0, width - SHIELD),
            Self::Procedure => (PROCEDURE_BAR, width - PROCEDURE_BAR),
        }
    }

    /// Draws the outline filling `size` with the context's colors and stroke.
    pub fn draw(self, ctx: &DrawContext, size: Size, round_corner: f32, shadow: f32) {
        let width = size.width();
        let height = size.height();
        match self {
            Self::Plain => ctx.draw_shape(
                Point::default(),
                &ShapePrimitive::Rect {
                    size,
                    corner_radius: round_corner / 2.0,
                    shadow,
                },
            ),
            Self::Continuous => ctx.draw_shape(
                Point::default(),
                &ShapePrimitive::Rect {
                    size,
                    corner_radius: height / 2.0,
                    shadow,
                },
            ),
            Self::Procedure => {
                ctx.draw_shape(
                    Point::default(),
                    &ShapePrimitive::Rect {
                        size,
                        corner_radius: 0.0,
                        shadow,
                    },
                );
                ctx.draw_line(Point::new(PROCEDURE_BAR, 0.0), Point::new(PROCEDURE_BAR, height));
                ctx.draw_line(
                    Point::new(width - PROCEDURE_BAR, 0.0),
                    Point::new(width - PROCEDURE_BAR, height),
                );
            }
            Self::Input => {
                let points = vec![
                    Point::new(0.0, 0.0),
                    Point::new(width, 0.0),
                    Point::new(width - SHIELD, height / 2.0),
                    Point::new(width, height),
                    Point::new(0.0, height),
                ];
                ctx.draw_shape(Point::default(), &ShapePrimitive::Polygon { points, shadow });
            }
            Self::Output => {
                let points = vec![
                    Point::new(0.0, 0.0),
                    Point::new(width - SHIELD, 0.0),
                    Point::new(width, height / 2.0),
                    Point::new(width - SHIELD, height),
                    Point::new(0.0, height),
                ];
                ctx.draw_shape(Point::default(), &ShapePrimitive::Polygon { points, shadow });
            }
        }
    }
}

/// Horizontal inset of a corner arc of `radius` at height `y` of a shape
/// `height` tall.
fn corner_inset(radius: f32, y: f32, height: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let y = y.clamp(0.0, height);
    let dy = if y < radius {
        radius - y
    } else if y > height - radius {
        y - (height - radius)
    } else {
        return 0.0;
    };
    let dy = dy.min(radius);
    radius - (radius * radius - dy * dy).sqrt()
}
