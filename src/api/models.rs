use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::narrative::{NarrativeReport, StructuredFields};

/// Batch of extracted documents to narrate.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NarrativeBatchRequest {
    pub documents: Vec<StructuredFields>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NarrativeBatchResponse {
    /// One entry per document, in request order
    pub narratives: Vec<NarrativeReport>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
