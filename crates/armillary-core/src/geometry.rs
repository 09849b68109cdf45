//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the geometric types used throughout Armillary for
//! measuring nodes and placing them on a drawing surface.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions, with stacking rules
//! - [`Translation`] - A `(dx, dy)` offset applied to drawing contexts
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//!
//! # Coordinate System
//!
//! Armillary uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Every node draws relative to its own top-left corner at `(0, 0)`; parents
//! place children by translating the drawing context.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use armillary_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise sum.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn translate(self, translation: Translation) -> Self {
        self.add_point(translation.to_point())
    }

    /// The rectangle of `size` whose top-left corner is this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new(self, size)
    }
}

/// Represents the dimensions of an element with width and height.
///
/// Two combination rules exist for composite nodes: stacking
/// ([`Size::merge_vertical`]) and side-by-side layout
/// ([`Size::merge_horizontal`]).
///
/// # Examples
///
/// ```
/// # use armillary_core::geometry::Size;
/// let first = Size::new(40.0, 10.0);
/// let second = Size::new(25.0, 12.0);
///
/// let stacked = first.merge_vertical(second);
/// assert_eq!(stacked, Size::new(40.0, 22.0));
///
/// let side_by_side = first.merge_horizontal(second);
/// assert_eq!(side_by_side, Size::new(65.0, 12.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn delta(self, dx: f32, dy: f32) -> Self {
        Self {
            width: self.width + dx,
            height: self.height + dy,
        }
    }

    /// Raises each side to its floor; never shrinks.
    pub fn at_least(self, min_width: f32, min_height: f32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }

    pub fn add_padding(self, insets: Insets) -> Self {
        self.delta(insets.horizontal_sum(), insets.vertical_sum())
    }

    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Side by side: widths add, the taller height wins.
    pub fn merge_horizontal(self, other: Size) -> Self {
        Self {
            width: self.width + other.width,
            height: self.height.max(other.height),
        }
    }

    /// Stacked: heights add, the wider width wins.
    pub fn merge_vertical(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }
}

/// An offset applied to a drawing context.
///
/// Translations compose by addition and [`Translation::identity`] is the
/// neutral element, so any sequence of nested placements collapses into a
/// single offset.
///
/// # Examples
///
/// ```
/// # use armillary_core::geometry::Translation;
/// let header = Translation::vertical(12.0);
/// let indent = Translation::horizontal(4.0);
///
/// let combined = header.compose(indent);
/// assert_eq!(combined, Translation::new(4.0, 12.0));
/// assert_eq!(combined.compose(Translation::identity()), combined);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation {
    dx: f32,
    dy: f32,
}

impl Translation {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// The translation that moves nothing.
    pub fn identity() -> Self {
        Self::default()
    }

    /// A purely horizontal translation.
    pub fn horizontal(dx: f32) -> Self {
        Self { dx, dy: 0.0 }
    }

    /// A purely vertical translation.
    pub fn vertical(dy: f32) -> Self {
        Self { dx: 0.0, dy }
    }

    pub fn dx(self) -> f32 {
        self.dx
    }

    pub fn dy(self) -> f32 {
        self.dy
    }

    /// Applies `other` after `self`.
    pub fn compose(self, other: Translation) -> Self {
        Self {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }

    /// Returns the translation as the point it moves the origin to.
    pub fn to_point(self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

impl From<Point> for Translation {
    fn from(point: Point) -> Self {
        Self::new(point.x(), point.y())
    }
}

/// Axis-aligned rectangle, stored by its corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Top-left corner.
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn translate(self, translation: Translation) -> Self {
        Self::new(self.min_point().translate(translation), self.to_size())
    }

    /// Returns true if `other` lies entirely inside these bounds, edges included.
    pub fn contains(self, other: Bounds) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}

/// Per-side spacing, used for padding and margins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Sides are given clockwise from the top.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Left plus right.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}
