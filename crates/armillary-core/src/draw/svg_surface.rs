//! SVG element-tree surface.

use std::cell::RefCell;

use log::debug;
use svg::{
    Node,
    node::element::{self as svg_element, Element},
};

use crate::{
    apply_stroke,
    draw::{FontConfiguration, Paint, ShapePrimitive, Surface},
    geometry::{Point, Size},
};

/// Fill opacity of drop shadows.
const SHADOW_OPACITY: f32 = 0.25;

/// Surface that builds an SVG element tree with the `svg` crate.
///
/// Output accumulates in a root `<g>` element. Link regions open nested `<a>`
/// frames that are folded into their parent when closed.
#[derive(Debug)]
pub struct SvgSurface {
    frames: RefCell<Vec<Element>>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            frames: RefCell::new(vec![Element::new("g")]),
        }
    }

    /// Consumes the surface and returns the root group.
    ///
    /// Link regions left open are closed first.
    pub fn into_element(self) -> Element {
        let mut frames = self.frames.into_inner();
        let mut root = frames.remove(0);
        let mut open = frames.into_iter().rev();
        if let Some(mut innermost) = open.next() {
            for mut frame in open {
                frame.append(innermost);
                innermost = frame;
            }
            root.append(innermost);
        }
        root
    }

    fn append<T>(&self, node: T)
    where
        T: Into<Box<dyn Node>>,
    {
        let mut frames = self.frames.borrow_mut();
        if let Some(top) = frames.last_mut() {
            top.append(node);
        }
    }

    fn shadow_of(shape: &ShapePrimitive, origin: Point) -> Option<Box<dyn Node>> {
        match shape {
            ShapePrimitive::Rect {
                size,
                corner_radius,
                shadow,
            } if *shadow > 0.0 => Some(Box::new(
                rectangle(origin.add_point(Point::new(*shadow, *shadow)), *size, *corner_radius)
                    .set("fill", "black")
                    .set("fill-opacity", SHADOW_OPACITY),
            )),
            ShapePrimitive::Polygon { points, shadow } if *shadow > 0.0 => Some(Box::new(
                polygon(origin.add_point(Point::new(*shadow, *shadow)), points)
                    .set("fill", "black")
                    .set("fill-opacity", SHADOW_OPACITY),
            )),
            _ => None,
        }
    }
}

impl Surface for SvgSurface {
    fn shape(&self, origin: Point, shape: &ShapePrimitive, paint: &Paint) {
        if let Some(shadow) = Self::shadow_of(shape, origin) {
            self.append(shadow);
        }

        let fill = paint.fill.to_svg_paint();
        let fill_opacity = paint.fill.alpha();
        match shape {
            ShapePrimitive::Rect {
                size,
                corner_radius,
                ..
            } => {
                let rect = rectangle(origin, *size, *corner_radius)
                    .set("fill", fill)
                    .set("fill-opacity", fill_opacity);
                self.append(apply_stroke!(rect, &paint.stroke, &paint.line_color));
            }
            ShapePrimitive::Polygon { points, .. } => {
                let polygon = polygon(origin, points)
                    .set("fill", fill)
                    .set("fill-opacity", fill_opacity);
                self.append(apply_stroke!(polygon, &paint.stroke, &paint.line_color));
            }
            ShapePrimitive::Ellipse { size } => {
                let ellipse = svg_element::Ellipse::new()
                    .set("cx", origin.x() + size.width() / 2.0)
                    .set("cy", origin.y() + size.height() / 2.0)
                    .set("rx", size.width() / 2.0)
                    .set("ry", size.height() / 2.0)
                    .set("fill", fill)
                    .set("fill-opacity", fill_opacity);
                self.append(apply_stroke!(ellipse, &paint.stroke, &paint.line_color));
            }
        }
    }

    fn line(&self, from: Point, to: Point, paint: &Paint) {
        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        self.append(apply_stroke!(line, &paint.stroke, &paint.line_color));
    }

    fn text(&self, origin: Point, text: &str, font: &FontConfiguration, size: Size) {
        let mut element = svg_element::Text::new(text)
            .set("x", origin.x())
            .set("y", origin.y() + size.height() / 2.0)
            .set("text-anchor", "start")
            .set("dominant-baseline", "central")
            .set("font-family", font.family())
            .set("font-size", font.size());

        if let Some(color) = font.color() {
            element = element
                .set("fill", color.to_svg_paint())
                .set("fill-opacity", color.alpha());
        }
        if font.is_italic() {
            element = element.set("font-style", "italic");
        }
        if font.is_underline() {
            element = element.set("text-decoration", "underline");
        }
        self.append(element);
    }

    fn begin_link(&self, url: &str) {
        let mut anchor = Element::new("a");
        anchor.assign("href", url);
        self.frames.borrow_mut().push(anchor);
    }

    fn end_link(&self) {
        let mut frames = self.frames.borrow_mut();
        if frames.len() < 2 {
            debug!("Ignoring unmatched link close");
            return;
        }
        if let Some(anchor) = frames.pop() {
            if let Some(parent) = frames.last_mut() {
                parent.append(anchor);
            }
        }
    }
}

fn rectangle(origin: Point, size: Size, corner_radius: f32) -> svg_element::Rectangle {
    let mut rect = svg_element::Rectangle::new()
        .set("x", origin.x())
        .set("y", origin.y())
        .set("width", size.width())
        .set("height", size.height());
    if corner_radius > 0.0 {
        rect = rect.set("rx", corner_radius).set("ry", corner_radius);
    }
    rect
}

fn polygon(origin: Point, points: &[Point]) -> svg_element::Polygon {
    let points = points
        .iter()
        .map(|point| format!("{},{}", origin.x() + point.x(), origin.y() + point.y()))
        .collect::<Vec<_>>()
        .join(" ");
    svg_element::Polygon::new().set("points", points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        draw::{DrawContext, StrokeDefinition},
        metrics::MonospaceMetrics,
    };

    fn paint() -> Paint {
        Paint {
            line_color: Color::default(),
            fill: Color::transparent(),
            stroke: StrokeDefinition::default(),
        }
    }

    #[test]
    fn test_rect_with_shadow_emits_two_elements() {
        let surface = SvgSurface::new();
        let shape = ShapePrimitive::Rect {
            size: Size::new(20.0, 10.0),
            corner_radius: 4.0,
            shadow: 3.0,
        };
        surface.shape(Point::default(), &shape, &paint());

        let root = surface.into_element();
        assert_eq!(root.get_children().len(), 2);
        let rendered = root.to_string();
        assert!(rendered.contains("rx=\"4\""));
        assert!(rendered.contains("fill=\"none\""));
    }

    #[test]
    fn test_text_decorations() {
        let surface = SvgSurface::new();
        let font = FontConfiguration::default().italic().underline();
        surface.text(Point::new(1.0, 2.0), "abstract()", &font, Size::new(10.0, 8.0));

        let rendered = surface.into_element().to_string();
        assert!(rendered.contains("font-style=\"italic\""));
        assert!(rendered.contains("text-decoration=\"underline\""));
        assert!(rendered.contains("abstract()"));
    }

    #[test]
    fn test_links_wrap_their_content() {
        let metrics = MonospaceMetrics::default();
        let surface = SvgSurface::new();
        let ctx = DrawContext::new(&surface, &metrics);

        ctx.with_link("https://example.com/doc", |ctx| {
            ctx.draw_line(Point::default(), Point::new(5.0, 0.0));
        });

        let rendered = surface.into_element().to_string();
        let anchor = rendered.find("<a href=\"https://example.com/doc\"").unwrap();
        let line = rendered.find("<line").unwrap();
        assert!(anchor < line);
        assert!(rendered.contains("</a>"));
    }

    #[test]
    fn test_unclosed_links_are_folded_into_root() {
        let surface = SvgSurface::new();
        surface.begin_link("a");
        surface.begin_link("b");
        surface.line(Point::default(), Point::new(1.0, 1.0), &paint());

        let rendered = surface.into_element().to_string();
        assert_eq!(rendered.matches("</a>").count(), 2);
    }

    #[test]
    fn test_unmatched_close_is_ignored() {
        let surface = SvgSurface::new();
        surface.end_link();
        surface.line(Point::default(), Point::new(1.0, 1.0), &paint());
        assert_eq!(surface.into_element().get_children().len(), 1);
    }
}
