//! Batch driver: extract every image concurrently, narrate each result, and
//! keep results in upload order.

use futures::future::join_all;

use super::{ExtractionError, FieldExtractor, ImagePayload};
use crate::narrative::compose;

/// Narrative for one image, or the reason extraction failed.
pub type ExtractionOutcome = Result<String, ExtractionError>;

/// Run extraction for all images at once and compose a narrative for each
/// success. `outcomes[i]` always belongs to `images[i]`.
pub async fn narrate_images(
    extractor: &dyn FieldExtractor,
    images: &[ImagePayload],
) -> Vec<ExtractionOutcome> {
    log::info!(
        "Extracting {} document(s) with {}",
        images.len(),
        extractor.provider_name()
    );

    let pending = images.iter().enumerate().map(|(index, image)| async move {
        match extractor.extract(image).await {
            Ok(fields) => Ok(compose(&fields)),
            Err(err) => {
                log::warn!("Extraction failed for document {}: {}", index, err);
                Err(err)
            }
        }
    });

    join_all(pending).await
}
