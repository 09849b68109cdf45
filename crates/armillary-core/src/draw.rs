//! Drawable nodes and the drawing pipeline.
//!
//! Layout happens in two passes over a tree of [`Drawable`] values:
//!
//! 1. **Measure** ([`Drawable::measure`]): a pure, bottom-up computation of
//!    each node's [`Size`] from its content and the [`TextMetrics`] in use.
//! 2. **Draw** ([`Drawable::draw`]): a top-down fold in which every node draws
//!    itself at the origin of the [`DrawContext`] it receives and hands
//!    translated copies of that context to its children.
//!
//! # Node variants
//!
//! - [`TextAtom`] - a single line of text
//! - [`VerticalStack`] - children stacked top to bottom
//! - [`DecoratedBox`] - wrapped text inside a styled box shape
//! - [`MemberArea`] - member lines with visibility icons and connector ports
//! - [`TabBar`] - a row or column of tab labels
//!
//! [`Node`] is the closed sum of these variants. The [`Drawable`] trait itself
//! stays open so that arbitrary blocks can be embedded in a member area.

mod box_shape;
mod context;
mod decorated_box;
mod icon;
mod member;
mod member_area;
mod placement;
mod ports;
mod stack;
mod stencil;
mod stroke;
mod surface;
mod svg_surface;
mod tab_bar;
mod text;

pub use box_shape::BoxShape;
pub use context::DrawContext;
pub use decorated_box::DecoratedBox;
pub use icon::VisibilityIcon;
pub use member::{Member, MemberEntry, Visibility, split_lines};
pub use member_area::MemberArea;
pub use placement::{LayoutGroup, PlacementStrategy};
pub use ports::{PortGeometry, Ports, elect, sort_short_names};
pub use stack::VerticalStack;
pub use stencil::{BoxStencil, FixedWidthStencil, Intersection, Stencil, wrap_paragraph};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use surface::{DrawCommand, Paint, RecordingSurface, ShapePrimitive, Surface};
pub use svg_surface::SvgSurface;
pub use tab_bar::{TabBar, TabOrientation};
pub use text::{FontConfiguration, TextAtom};

use crate::{
    geometry::{Bounds, Size},
    metrics::TextMetrics,
};

/// A node that can be measured and drawn.
///
/// Implementations must uphold two contracts:
///
/// - `measure` is a pure function of the node's content and `metrics`;
///   repeated calls return identical sizes.
/// - `draw` covers exactly the size reported by `measure` for the context's
///   metrics, with the node's top-left corner at the context origin. The
///   one exception is a drop shadow, which is offset past the bottom-right
///   corner by the style's `shadowing` and is not part of the size.
pub trait Drawable: std::fmt::Debug {
    /// Computes the size this node occupies.
    fn measure(&self, metrics: &dyn TextMetrics) -> Size;

    /// Draws this node with its top-left corner at the context origin.
    fn draw(&self, ctx: &DrawContext);

    /// Locates the sub-region whose text starts with `query`, in node
    /// coordinates.
    ///
    /// Returns `None` when nothing matches or the node does not support
    /// lookups.
    fn inner_position(&self, _query: &str, _metrics: &dyn TextMetrics) -> Option<Bounds> {
        None
    }
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        (**self).measure(metrics)
    }

    fn draw(&self, ctx: &DrawContext) {
        (**self).draw(ctx)
    }

    fn inner_position(&self, query: &str, metrics: &dyn TextMetrics) -> Option<Bounds> {
        (**self).inner_position(query, metrics)
    }
}

/// Closed set of built-in node variants.
#[derive(Debug)]
pub enum Node {
    Atom(TextAtom),
    Stack(VerticalStack),
    Decorated(DecoratedBox),
    Members(MemberArea),
    Tabs(TabBar),
}

impl Node {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Self::Atom(atom) => atom,
            Self::Stack(stack) => stack,
            Self::Decorated(decorated) => decorated,
            Self::Members(members) => members,
            Self::Tabs(tabs) => tabs,
        }
    }
}

impl Drawable for Node {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        self.as_drawable().measure(metrics)
    }

    fn draw(&self, ctx: &DrawContext) {
        self.as_drawable().draw(ctx)
    }

    fn inner_position(&self, query: &str, metrics: &dyn TextMetrics) -> Option<Bounds> {
        self.as_drawable().inner_position(query, metrics)
    }
}

impl From<TextAtom> for Node {
    fn from(atom: TextAtom) -> Self {
        Self::Atom(atom)
    }
}

impl From<VerticalStack> for Node {
    fn from(stack: VerticalStack) -> Self {
        Self::Stack(stack)
    }
}

impl From<DecoratedBox> for Node {
    fn from(decorated: DecoratedBox) -> Self {
        Self::Decorated(decorated)
    }
}

impl From<MemberArea> for Node {
    fn from(members: MemberArea) -> Self {
        Self::Members(members)
    }
}

impl From<TabBar> for Node {
    fn from(tabs: TabBar) -> Self {
        Self::Tabs(tabs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMetrics;

    #[test]
    fn test_node_delegates_measure() {
        let metrics = MonospaceMetrics::new(5.0, 10.0);
        let atom = TextAtom::new("abc", FontConfiguration::default());
        let expected = atom.measure(&metrics);

        let node = Node::from(atom);
        assert_eq!(node.measure(&metrics), expected);
    }

    #[test]
    fn test_boxed_drawable_delegates() {
        let metrics = MonospaceMetrics::new(5.0, 10.0);
        let boxed: Box<dyn Drawable> =
            Box::new(TextAtom::new("name", FontConfiguration::default()));

        assert_eq!(boxed.measure(&metrics), Size::new(20.0, 10.0));
        assert!(boxed.inner_position("na", &metrics).is_some());
    }
}
