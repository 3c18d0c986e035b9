//! Non-blocking checks on extracted KTP fields.
//!
//! The narrative is always produced; these findings only tell the operator
//! which parts of the sentence deserve a second look against the physical
//! card.

use std::fmt;

use super::classify::{Gender, MaritalStatus};
use super::date::DateParts;
use super::models::StructuredFields;

const NIK_LENGTH: usize = 16;

/// One finding on one field, with an Indonesian message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed the check
    pub field: String,
    /// Human-readable message in Indonesian
    pub message: String,
    /// Suggestion for how to fix the data
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} kosong", label)).with_suggestion(format!(
            "Periksa kembali {} pada KTP",
            label.to_lowercase()
        ))
    }

    pub fn invalid_nik(field: &str) -> Self {
        Self::new(field, "NIK harus terdiri dari 16 digit angka")
            .with_suggestion("Bandingkan NIK dengan KTP, contoh: 3171234567890123")
    }

    pub fn invalid_date_format(field: &str, value: &str) -> Self {
        Self::new(field, format!("Format tanggal '{}' tidak valid", value))
            .with_suggestion("Gunakan format DD-MM-YYYY (contoh: 17-08-1945)")
    }

    pub fn unknown_value(field: &str, label: &str, value: &str) -> Self {
        Self::new(field, format!("{} '{}' tidak dikenali", label, value))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of findings with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// One line per finding, as shown in API responses.
    pub fn to_lines(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Numbered summary suitable for an MCP text item.
    pub fn to_mcp_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Periksa data: {} catatan ditemukan\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }
}

pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

pub fn validate_nik(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "NIK"));
        return;
    }

    if trimmed.len() != NIK_LENGTH || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        errors.add(ValidationError::invalid_nik(field));
    }
}

pub fn validate_birth_date(value: &str, field: &str, errors: &mut ValidationErrors) {
    if DateParts::parse(value).is_none() {
        errors.add(ValidationError::invalid_date_format(field, value.trim()));
    }
}

pub fn validate_gender(value: &str, field: &str, errors: &mut ValidationErrors) {
    if Gender::classify(value) == Gender::Unknown {
        errors.add(
            ValidationError::unknown_value(field, "Jenis kelamin", value.trim())
                .with_suggestion("Nilai yang dikenali: LAKI-LAKI atau PEREMPUAN"),
        );
    }
}

pub fn validate_marital_status(value: &str, field: &str, errors: &mut ValidationErrors) {
    if MaritalStatus::classify(value) == MaritalStatus::Unknown {
        errors.add(
            ValidationError::unknown_value(field, "Status perkawinan", value.trim())
                .with_suggestion(
                    "Nilai yang dikenali: BELUM KAWIN, KAWIN, CERAI HIDUP, CERAI MATI",
                ),
        );
    }
}

/// Run every field check on one record.
pub fn diagnose(fields: &StructuredFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    validate_nik(&fields.national_id, "nationalId", &mut errors);
    validate_required(&fields.full_name, "fullName", "Nama", &mut errors);
    validate_birth_date(&fields.birth_date, "birthDate", &mut errors);
    validate_gender(&fields.gender, "gender", &mut errors);
    validate_marital_status(&fields.marital_status, "maritalStatus", &mut errors);

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean() -> StructuredFields {
        StructuredFields {
            national_id: "3171234567890123".into(),
            full_name: "Budi".into(),
            birth_date: "01-01-1990".into(),
            gender: "LAKI-LAKI".into(),
            marital_status: "KAWIN".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_record_has_no_findings() {
        assert!(diagnose(&clean()).is_empty());
    }

    #[test]
    fn test_short_nik() {
        let mut errors = ValidationErrors::new();
        validate_nik("317123456789012", "nationalId", &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors.to_mcp_message().contains("16 digit"));
    }

    #[test]
    fn test_every_field_reported() {
        let errors = diagnose(&StructuredFields {
            birth_date: "kemarin".into(),
            gender: "?".into(),
            ..Default::default()
        });
        assert_eq!(errors.len(), 5);

        let msg = errors.to_mcp_message();
        assert!(msg.contains("5 catatan"));
        assert!(msg.contains("NIK kosong"));
        assert!(msg.contains("Format tanggal 'kemarin' tidak valid"));
        assert!(msg.contains("Jenis kelamin '?' tidak dikenali"));
    }

    #[test]
    fn test_display_includes_suggestion() {
        let error = ValidationError::invalid_nik("nationalId");
        let line = error.to_string();
        assert!(line.starts_with("[nationalId] NIK harus"));
        assert!(line.contains("Bandingkan NIK"));
    }
}
