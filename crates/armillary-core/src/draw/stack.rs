//! Vertical stacking of nodes.

use crate::{
    draw::{DrawContext, Drawable, LayoutGroup, Node, PlacementStrategy},
    geometry::{Bounds, Size},
    metrics::TextMetrics,
    style::HorizontalAlignment,
};

/// Children stacked top to bottom.
///
/// The stack is as wide as its widest child and as tall as the sum of its
/// children. Each child is aligned horizontally inside that width.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::{Drawable, FontConfiguration, TextAtom, VerticalStack};
/// # use armillary_core::geometry::Size;
/// # use armillary_core::metrics::MonospaceMetrics;
/// let font = FontConfiguration::default();
/// let stack = VerticalStack::new()
///     .with_child(TextAtom::new("first line", font.clone()))
///     .with_child(TextAtom::new("second", font));
///
/// let metrics = MonospaceMetrics::new(5.0, 10.0);
/// assert_eq!(stack.measure(&metrics), Size::new(50.0, 20.0));
/// ```
#[derive(Debug, Default)]
pub struct VerticalStack {
    children: Vec<Node>,
    alignment: HorizontalAlignment,
}

impl VerticalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn group(&self) -> LayoutGroup<'_> {
        let mut group = LayoutGroup::new(PlacementStrategy::from(self.alignment));
        for child in &self.children {
            group.add(child);
        }
        group
    }
}

impl Drawable for VerticalStack {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        self.children
            .iter()
            .map(|child| child.measure(metrics))
            .fold(Size::default(), Size::merge_vertical)
    }

    fn draw(&self, ctx: &DrawContext) {
        let size = self.measure(ctx.metrics());
        self.group().draw(ctx, size.width(), size.height());
    }

    fn inner_position(&self, query: &str, metrics: &dyn TextMetrics) -> Option<Bounds> {
        let size = self.measure(metrics);
        self.group()
            .inner_position(query, size.width(), size.height(), metrics)
    }
}
