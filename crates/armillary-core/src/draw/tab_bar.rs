//! Tab strips.

use crate::{
    draw::{DrawContext, Drawable, FontConfiguration, TextAtom},
    geometry::{Point, Size, Translation},
    metrics::TextMetrics,
};

/// Gap before a label.
const MARGIN_BEFORE: f32 = 2.0;
/// Gap after a label.
const MARGIN_AFTER: f32 = 3.0;
/// Gap between two tabs.
const MARGIN_BETWEEN: f32 = 10.0;

const TAB_EXTRA: f32 = MARGIN_BEFORE + MARGIN_AFTER + MARGIN_BETWEEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A row or column of tab labels joined by outline strokes.
///
/// Each horizontal tab is drawn open at the bottom with a short baseline
/// segment leading to the next tab. Vertical tabs are the same shape turned
/// on its side, open to the right.
#[derive(Debug)]
pub struct TabBar {
    tabs: Vec<TextAtom>,
    orientation: TabOrientation,
}

impl TabBar {
    pub fn new<I, S>(labels: I, font: FontConfiguration, orientation: TabOrientation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tabs: labels
                .into_iter()
                .map(|label| TextAtom::new(label, font.clone()))
                .collect(),
            orientation,
        }
    }

    pub fn orientation(&self) -> TabOrientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Label widths in tab order.
    pub fn tab_widths(&self, metrics: &dyn TextMetrics) -> Vec<f32> {
        self.tabs
            .iter()
            .map(|tab| tab.measure(metrics).width())
            .collect()
    }

    fn draw_horizontal(&self, ctx: &DrawContext) {
        let mut x = 0.0;
        for tab in &self.tabs {
            let label = tab.measure(ctx.metrics());
            let (w, h) = (label.width(), label.height());
            let right = x + w + MARGIN_BEFORE + MARGIN_AFTER;

            tab.draw(&ctx.with_translation(Translation::horizontal(x + MARGIN_BEFORE)));
            ctx.draw_line(Point::new(x, 0.0), Point::new(x, h));
            ctx.draw_line(Point::new(x, 0.0), Point::new(right, 0.0));
            ctx.draw_line(Point::new(right, 0.0), Point::new(right, h));
            ctx.draw_line(Point::new(right, h), Point::new(right + MARGIN_BETWEEN, h));

            x += w + TAB_EXTRA;
        }
    }

    fn draw_vertical(&self, ctx: &DrawContext) {
        let width = self.measure(ctx.metrics()).width();
        let mut y = 0.0;
        for tab in &self.tabs {
            let h = tab.measure(ctx.metrics()).height();
            let bottom = y + h + MARGIN_BEFORE + MARGIN_AFTER;

            tab.draw(&ctx.with_translation(Translation::vertical(y + MARGIN_BEFORE)));
            ctx.draw_line(Point::new(0.0, y), Point::new(width, y));
            ctx.draw_line(Point::new(0.0, y), Point::new(0.0, bottom));
            ctx.draw_line(Point::new(0.0, bottom), Point::new(width, bottom));
            ctx.draw_line(Point::new(width, bottom), Point::new(width, bottom + MARGIN_BETWEEN));

            y += h + TAB_EXTRA;
        }
    }
}

impl Drawable for TabBar {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        let labels = self.tabs.iter().map(|tab| tab.measure(metrics));
        match self.orientation {
            TabOrientation::Horizontal => labels.fold(Size::default(), |acc, label| {
                Size::new(
                    acc.width() + label.width() + TAB_EXTRA,
                    acc.height().max(label.height()),
                )
            }),
            TabOrientation::Vertical => labels.fold(Size::default(), |acc, label| {
                Size::new(
                    acc.width().max(label.width()),
                    acc.height() + label.height() + TAB_EXTRA,
                )
            }),
        }
    }

    fn draw(&self, ctx: &DrawContext) {
        match self.orientation {
            TabOrientation::Horizontal => self.draw_horizontal(ctx),
            TabOrientation::Vertical => self.draw_vertical(ctx),
        }
    }
}
