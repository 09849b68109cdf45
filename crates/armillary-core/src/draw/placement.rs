//! Placement strategies for sibling groups.
//!
//! A [`PlacementStrategy`] is a stateless function from the sizes of a list of
//! siblings and the size of their group to one top-left position per sibling.
//! [`LayoutGroup`] pairs a strategy with the siblings themselves so the same
//! placement drives drawing and inner-position lookups.

use crate::{
    draw::{DrawContext, Drawable},
    geometry::{Bounds, Point, Size, Translation},
    metrics::TextMetrics,
    style::HorizontalAlignment,
};

/// How siblings are positioned inside their group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementStrategy {
    /// Rows aligned to the left edge.
    Left,
    /// Rows centered horizontally.
    Center,
    /// Rows aligned to the right edge.
    Right,
    /// Siblings come in `(icon, text)` pairs. Each icon sits in a leading
    /// lane of width `lane`, vertically centered on its text, and the text is
    /// aligned inside the remaining width. An icon taller than its row is
    /// kept inside the group.
    Visibility {
        lane: f32,
        alignment: HorizontalAlignment,
    },
}

impl From<HorizontalAlignment> for PlacementStrategy {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => Self::Left,
            HorizontalAlignment::Center => Self::Center,
            HorizontalAlignment::Right => Self::Right,
        }
    }
}

impl PlacementStrategy {
    /// Returns the top-left position of every sibling.
    ///
    /// For the alignment strategies, leftover height is spread evenly over
    /// `n + 1` gaps, so a group exactly as tall as its content places the
    /// rows edge to edge.
    pub fn place(&self, sizes: &[Size], width: f32, height: f32) -> Vec<Point> {
        match *self {
            Self::Left | Self::Center | Self::Right => {
                let used: f32 = sizes.iter().map(|size| size.height()).sum();
                let space = (height - used) / (sizes.len() as f32 + 1.0);
                let mut y = space;
                sizes
                    .iter()
                    .map(|size| {
                        let x = align_x(self.alignment(), width, size.width());
                        let position = Point::new(x, y);
                        y += size.height() + space;
                        position
                    })
                    .collect()
            }
            Self::Visibility { lane, alignment } => {
                let mut positions = Vec::with_capacity(sizes.len());
                let mut y = 0.0;
                for pair in sizes.chunks(2) {
                    let icon = pair[0];
                    let Some(text) = pair.get(1) else {
                        positions.push(Point::new(0.0, y));
                        break;
                    };
                    let icon_y = (y + (text.height() - icon.height()) / 2.0)
                        .min(height - icon.height())
                        .max(0.0);
                    positions.push(Point::new(0.0, icon_y));
                    positions.push(Point::new(
                        lane + align_x(alignment, width - lane, text.width()),
                        y,
                    ));
                    y += text.height();
                }
                positions
            }
        }
    }

    fn alignment(&self) -> HorizontalAlignment {
        match self {
            Self::Left => HorizontalAlignment::Left,
            Self::Center => HorizontalAlignment::Center,
            Self::Right => HorizontalAlignment::Right,
            Self::Visibility { alignment, .. } => *alignment,
        }
    }
}

fn align_x(alignment: HorizontalAlignment, available: f32, width: f32) -> f32 {
    match alignment {
        HorizontalAlignment::Left => 0.0,
        HorizontalAlignment::Center => (available - width) / 2.0,
        HorizontalAlignment::Right => available - width,
    }
}

/// Siblings placed by a shared strategy.
#[derive(Debug)]
pub struct LayoutGroup<'a> {
    strategy: PlacementStrategy,
    children: Vec<&'a dyn Drawable>,
}

impl<'a> LayoutGroup<'a> {
    pub fn new(strategy: PlacementStrategy) -> Self {
        Self {
            strategy,
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: &'a dyn Drawable) {
        self.children.push(child);
    }

    /// Returns each child's bounds inside a `width` x `height` group.
    pub fn placements(&self, width: f32, height: f32, metrics: &dyn TextMetrics) -> Vec<Bounds> {
        let sizes: Vec<Size> = self
            .children
            .iter()
            .map(|child| child.measure(metrics))
            .collect();
        self.strategy
            .place(&sizes, width, height)
            .into_iter()
            .zip(sizes)
            .map(|(position, size)| position.to_bounds(size))
            .collect()
    }

    /// Draws every child at its placed position.
    pub fn draw(&self, ctx: &DrawContext, width: f32, height: f32) {
        let placements = self.placements(width, height, ctx.metrics());
        for (child, bounds) in self.children.iter().zip(placements) {
            child.draw(&ctx.with_translation(Translation::from(bounds.min_point())));
        }
    }

    /// Finds the first child answering `query` and returns its answer in
    /// group coordinates.
    pub fn inner_position(
        &self,
        query: &str,
        width: f32,
        height: f32,
        metrics: &dyn TextMetrics,
    ) -> Option<Bounds> {
        let placements = self.placements(width, height, metrics);
        self.children
            .iter()
            .zip(placements)
            .find_map(|(child, bounds)| {
                child
                    .inner_position(query, metrics)
                    .map(|inner| inner.translate(Translation::from(bounds.min_point())))
            })
    }
}
