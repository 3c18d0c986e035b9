use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::composer::compose;
use super::diagnostics::diagnose;
use super::models::StructuredFields;

/// Narrative for one document plus the field findings behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NarrativeReport {
    /// Position of the document in the request
    pub index: usize,
    pub narrative: String,
    /// False when the document had no NIK and the narrative is the
    /// incomplete-data message
    pub complete: bool,
    pub warnings: Vec<String>,
}

/// Compose and diagnose every record, keeping request order.
pub fn report_batch(records: &[StructuredFields]) -> Vec<NarrativeReport> {
    records
        .iter()
        .enumerate()
        .map(|(index, fields)| {
            let findings = diagnose(fields);
            if !findings.is_empty() {
                log::warn!(
                    "Document {} has {} field finding(s): {}",
                    index,
                    findings.len(),
                    findings.to_lines().join("; ")
                );
            }

            NarrativeReport {
                index,
                narrative: compose(fields),
                complete: fields.has_national_id(),
                warnings: findings.to_lines(),
            }
        })
        .collect()
}
