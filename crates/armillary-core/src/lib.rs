//! Armillary Core Types and Definitions
//!
//! This crate provides the layout and composition engine behind Armillary
//! diagram elements. Sizes are computed bottom-up, content is positioned
//! top-down. It includes:
//!
//! - **Geometry**: Sizes, points, translations and bounds ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Style**: Resolved, immutable style values ([`style::Style`])
//! - **Metrics**: Text measurement collaborators ([`metrics`] module)
//! - **Draw**: Drawable nodes, the drawing context and surfaces ([`draw`] module)
//! - **Errors**: Layout contract violations ([`error::LayoutError`])

pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod style;
