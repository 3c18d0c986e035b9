//! Extraction seam - the boundary to the AI vision service.
//!
//! This crate does not talk to any vision provider itself. Callers supply a
//! [`FieldExtractor`] and the batch driver turns images into narratives.

pub mod batch;
pub mod traits;

pub use batch::{narrate_images, ExtractionOutcome};
pub use traits::FieldExtractor;

use thiserror::Error;

/// Errors a vision provider can report for one image.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("extraction service unavailable: {0}")]
    Unavailable(String),
    #[error("extraction service rejected the image: {0}")]
    Rejected(String),
    #[error("extraction service returned malformed fields: {0}")]
    Malformed(String),
}

/// One uploaded image.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    /// e.g. "image/jpeg"
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}
