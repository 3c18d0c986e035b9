//! Spelled-out Indonesian dates for `DD-MM-YYYY` input.

use super::number::spell_number;

pub const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Years from 2000 on are read as "tahun dua ribu ...".
const TAHUN_PREFIX_FROM: u32 = 2000;

/// Numeric components of a `DD-MM-YYYY` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl DateParts {
    /// Parse `DD-MM-YYYY`. Returns `None` when the shape is wrong, a component
    /// is not numeric, or the month is outside 1..=12.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('-');
        let day = parts.next()?.trim().parse::<u32>().ok()?;
        let month = parts.next()?.trim().parse::<u32>().ok()?;
        let year = parts.next()?.trim().parse::<u32>().ok()?;
        if parts.next().is_some() || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { day, month, year })
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[(self.month as usize).saturating_sub(1).min(MONTHS.len() - 1)]
    }
}

/// Spell a `DD-MM-YYYY` date, e.g. "17-08-1945" becomes
/// "tujuh belas Agustus seribu sembilan ratus empat puluh lima".
///
/// Returns an empty string when the date cannot be parsed.
pub fn spell_date(value: &str) -> String {
    let Some(date) = DateParts::parse(value) else {
        return String::new();
    };

    let year = spell_number(u64::from(date.year));
    let year_phrase = if date.year >= TAHUN_PREFIX_FROM {
        format!("tahun {}", year)
    } else {
        year
    };

    format!(
        "{} {} {}",
        spell_number(u64::from(date.day)),
        date.month_name(),
        year_phrase
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_2000_has_no_tahun() {
        assert_eq!(
            spell_date("17-08-1945"),
            "tujuh belas Agustus seribu sembilan ratus empat puluh lima"
        );
    }

    #[test]
    fn test_from_2000_has_tahun() {
        assert_eq!(spell_date("01-01-2000"), "satu Januari tahun dua ribu");
        assert_eq!(
            spell_date("31-12-2024"),
            "tiga puluh satu Desember tahun dua ribu dua puluh empat"
        );
    }

    #[test]
    fn test_unpadded_components() {
        assert_eq!(spell_date("5-3-1990"), spell_date("05-03-1990"));
    }

    #[test]
    fn test_invalid_dates_are_empty() {
        assert_eq!(spell_date("not-a-date"), "");
        assert_eq!(spell_date(""), "");
        assert_eq!(spell_date("17/08/1945"), "");
        assert_eq!(spell_date("17-08"), "");
        assert_eq!(spell_date("17-08-1945-01"), "");
        assert_eq!(spell_date("17-13-1945"), "");
        assert_eq!(spell_date("17-00-1945"), "");
    }

    #[test]
    fn test_parse_parts() {
        let parts = DateParts::parse(" 09-11-1987 ").unwrap();
        assert_eq!(parts, DateParts { day: 9, month: 11, year: 1987 });
        assert_eq!(parts.month_name(), "November");
    }
}
