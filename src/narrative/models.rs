use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields read from one KTP by the extraction service.
///
/// Every field is free text and may be missing, empty or oddly cased.
/// A non-empty `national_id` marks a recognised document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredFields {
    /// NIK (Nomor Induk Kependudukan)
    pub national_id: String,
    /// Name without any titles
    pub full_name: String,
    /// Long form of the titles before the name, e.g. "Haji Doktor"
    pub honorifics_prefix_expanded: String,
    /// Long form of the titles after the name, e.g. "Sarjana Hukum"
    pub honorifics_suffix_expanded: String,
    pub birth_place: String,
    /// `DD-MM-YYYY`
    pub birth_date: String,
    /// "LAKI-LAKI" or "PEREMPUAN"
    pub gender: String,
    pub address: String,
    pub rt: String,
    pub rw: String,
    /// Kelurahan/Desa
    pub village: String,
    /// Kecamatan
    pub district: String,
    /// Kota/Kabupaten
    pub city: String,
    /// BELUM KAWIN, KAWIN, CERAI HIDUP or CERAI MATI
    pub marital_status: String,
    pub occupation: String,
    pub citizenship: String,
}

impl StructuredFields {
    pub fn has_national_id(&self) -> bool {
        !self.national_id.trim().is_empty()
    }
}
