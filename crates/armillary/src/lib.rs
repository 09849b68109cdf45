//! Armillary - configured rendering of diagram elements to SVG.
//!
//! Builds decorated boxes, member areas and tab bars from styles loaded out
//! of TOML configuration, and exports any drawable tree as an SVG document.
//! The layout engine itself lives in `armillary-core` and is re-exported
//! here.

pub mod config;

mod error;
mod export;

pub use armillary_core::{color, draw, geometry, metrics, style};

pub use error::ArmillaryError;

use log::{debug, info};

use armillary_core::{
    draw::{
        BoxShape, DecoratedBox, DrawContext, Drawable, MemberArea, MemberEntry, SvgSurface,
        TabBar, TabOrientation,
    },
    metrics::{CosmicTextMetrics, TextMetrics},
};

use config::AppConfig;

/// Builds nodes with configured styles and renders them to SVG.
///
/// Every node is measured with the renderer's [`TextMetrics`]. The default is
/// [`CosmicTextMetrics`]; use [`Renderer::with_metrics`] for deterministic
/// output.
///
/// # Examples
///
/// ```
/// use armillary::{Renderer, config::AppConfig, draw::BoxShape, metrics::MonospaceMetrics};
///
/// let renderer = Renderer::new(AppConfig::default())
///     .with_metrics(Box::new(MonospaceMetrics::default()));
///
/// let node = renderer.decorated_box("Start", BoxShape::Continuous);
/// let svg = renderer.render_svg(&node).unwrap();
/// assert!(svg.contains("Start"));
/// ```
#[derive(Debug)]
pub struct Renderer {
    config: AppConfig,
    metrics: Box<dyn TextMetrics>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            metrics: Box::new(CosmicTextMetrics::new()),
        }
    }

    /// Replaces the text metrics used for measuring.
    pub fn with_metrics(mut self, metrics: Box<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    /// Builds a box around `label` with the activity style.
    pub fn decorated_box(&self, label: &str, shape: BoxShape) -> DecoratedBox {
        DecoratedBox::new(
            label,
            shape,
            self.config.style().activity(),
            self.metrics(),
        )
    }

    /// Builds a member area with the members style.
    ///
    /// # Errors
    ///
    /// Returns `ArmillaryError::Layout` when the entries violate the member
    /// area's contract.
    pub fn member_area<I>(&self, entries: I) -> Result<MemberArea, ArmillaryError>
    where
        I: IntoIterator<Item = MemberEntry>,
    {
        let area = MemberArea::new(entries.into_iter().collect(), self.config.style().members())?;
        Ok(area)
    }

    /// Builds a tab bar with the tabs style's font.
    pub fn tab_bar<I, S>(&self, labels: I, orientation: TabOrientation) -> TabBar
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TabBar::new(labels, self.config.style().tabs().font(), orientation)
    }

    /// Render a drawable tree to an SVG string.
    ///
    /// The root is measured once, drawn at the origin into an
    /// [`SvgSurface`] and wrapped into a document sized from the measured
    /// size and the export configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArmillaryError` when the export configuration is unusable.
    pub fn render_svg(&self, root: &dyn Drawable) -> Result<String, ArmillaryError> {
        let metrics = self.metrics();
        let size = root.measure(metrics);
        info!(width = size.width(), height = size.height(); "Rendering SVG");

        let surface = SvgSurface::new();
        root.draw(&DrawContext::new(&surface, metrics));
        debug!("Drawing finished");

        let doc = export::document(surface.into_element(), size, self.config.export())?;

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }
}
