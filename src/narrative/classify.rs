//! Classification of free-text KTP fields.
//!
//! Extraction output is loosely cased and sometimes abbreviated, so gender and
//! honorific matching is substring based. All matching rules live here.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HAJI: Regex = Regex::new(r"(?i)haji").unwrap();
}

const HAJJAH: &str = "Hajjah";

/// Jenis kelamin as printed on the KTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// "LAKI-LAKI" (any case, any surrounding text) is male, "PEREMPUAN" is
    /// female. "LAKI" is checked first.
    pub fn classify(value: &str) -> Self {
        let upper = value.to_uppercase();
        if upper.contains("LAKI") {
            Self::Male
        } else if upper.contains("PEREMPUAN") {
            Self::Female
        } else {
            Self::Unknown
        }
    }
}

/// Status perkawinan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    BelumKawin,
    Kawin,
    CeraiHidup,
    CeraiMati,
    Unknown,
}

impl MaritalStatus {
    pub fn classify(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "BELUM KAWIN" => Self::BelumKawin,
            "KAWIN" => Self::Kawin,
            "CERAI HIDUP" => Self::CeraiHidup,
            "CERAI MATI" => Self::CeraiMati,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Salutation {
    Tuan,
    Nona,
    Nyonya,
}

impl Salutation {
    /// Men are always "Tuan". Unmarried women are "Nona"; every other woman,
    /// and anyone whose gender is unreadable but is not male, is "Nyonya".
    pub fn select(gender: Gender, marital_status: MaritalStatus) -> Self {
        match (gender, marital_status) {
            (Gender::Male, _) => Self::Tuan,
            (_, MaritalStatus::BelumKawin) => Self::Nona,
            _ => Self::Nyonya,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tuan => "Tuan",
            Self::Nona => "Nona",
            Self::Nyonya => "Nyonya",
        }
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw "PEREMPUAN" substring test, independent of [`Gender::classify`].
pub fn is_perempuan(gender: &str) -> bool {
    gender.to_uppercase().contains("PEREMPUAN")
}

/// Trim the expanded prefix honorific and, when the raw gender contains
/// "PEREMPUAN", turn every "haji" into "Hajjah". Casing is left to the caller.
pub fn normalize_prefix_honorific(prefix: &str, gender: &str) -> String {
    let trimmed = prefix.trim();
    if is_perempuan(gender) && HAJI.is_match(trimmed) {
        HAJI.replace_all(trimmed, HAJJAH).into_owned()
    } else {
        trimmed.to_string()
    }
}
