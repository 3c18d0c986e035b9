//! Narrative module - turns extracted KTP fields into an Indonesian
//! comparisi sentence.
//!
//! - `number` - terbilang, integers to words
//! - `date` - `DD-MM-YYYY` to a spelled-out date
//! - `title_case` - word-initial capitalisation
//! - `classify` - gender, marital status, salutation and honorific rules
//! - `composer` - final sentence assembly
//! - `diagnostics` - non-blocking field checks
//! - `report` - narrative plus findings per document

pub mod classify;
pub mod composer;
pub mod date;
pub mod diagnostics;
pub mod models;
pub mod number;
pub mod report;
pub mod title_case;

pub use classify::{Gender, MaritalStatus, Salutation};
pub use composer::{compose, EMPHASIS_MARKER, INCOMPLETE_DATA_MESSAGE};
pub use date::spell_date;
pub use diagnostics::{diagnose, ValidationError, ValidationErrors};
pub use models::StructuredFields;
pub use number::spell_number;
pub use report::{report_batch, NarrativeReport};
pub use title_case::title_case;

/// Format an already-extracted batch, one narrative per record, in order.
pub fn narrate_batch(records: &[StructuredFields]) -> Vec<String> {
    records.iter().map(compose).collect()
}
