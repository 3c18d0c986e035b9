use async_trait::async_trait;

use super::{ExtractionError, ImagePayload};
use crate::narrative::StructuredFields;

/// A vision provider that reads KTP fields from an image.
///
/// Retries, timeouts and rate limiting are the implementor's concern.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    async fn extract(&self, image: &ImagePayload) -> Result<StructuredFields, ExtractionError>;

    /// Provider name for logging, e.g. "gemini-vision".
    fn provider_name(&self) -> &str;
}
