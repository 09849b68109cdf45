//! Error types for Armillary operations.
//!
//! This module provides the main error type [`ArmillaryError`] which wraps
//! the error conditions that can occur while configuring, building and
//! exporting nodes.

use thiserror::Error;

use armillary_core::error::LayoutError;

/// The main error type for Armillary operations.
#[derive(Debug, Error)]
pub enum ArmillaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(String),
}
