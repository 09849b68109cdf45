//! SVG document assembly.

use log::debug;
use svg::{
    Document, Node,
    node::{
        Text,
        element::{Element, Rectangle},
    },
};

use armillary_core::{color::Color, geometry::Size};

use crate::{ArmillaryError, config::ExportConfig};

/// Wraps drawn content into a complete SVG document.
///
/// The content is shifted by the configured margin. The view box covers the
/// content plus the margin on every side, while the document's width and
/// height are scaled by the configured factor.
pub fn document(
    content: Element,
    content_size: Size,
    config: &ExportConfig,
) -> Result<Document, ArmillaryError> {
    config
        .validate()
        .map_err(|err| ArmillaryError::Export(format!("Cannot export: {err}")))?;

    let scale = config.scale();
    let margin = config.margin();
    let svg_size = content_size.delta(2.0 * margin, 2.0 * margin);
    debug!(width = svg_size.width(), height = svg_size.height(), scale; "Document size");

    let mut doc = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", svg_size.width(), svg_size.height()),
        )
        .set("width", svg_size.width() * scale)
        .set("height", svg_size.height() * scale);

    if let Some(metadata) = config.metadata() {
        let mut element = Element::new("metadata");
        element.append(Text::new(metadata));
        doc = doc.add(element);
    }

    if let Some(background) = config.background_color()? {
        doc = doc.add(background_rect(background, svg_size));
    }

    let mut group = Element::new("g");
    group.assign("transform", format!("translate({margin}, {margin})"));
    group.append(content);

    Ok(doc.add(group))
}

fn background_rect(color: Color, size: Size) -> Rectangle {
    Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size.width())
        .set("height", size.height())
        .set("fill", &color)
}
