//! Assembly of the comparisi sentence for one KTP.

use super::classify::{normalize_prefix_honorific, Gender, MaritalStatus, Salutation};
use super::date::spell_date;
use super::models::StructuredFields;
use super::title_case::title_case;

/// Returned instead of a narrative when the document carries no NIK.
pub const INCOMPLETE_DATA_MESSAGE: &str =
    "Data tidak lengkap: NIK tidak ditemukan, dokumen tidak dikenali sebagai KTP yang valid.";

/// Wraps the salutation and name block.
pub const EMPHASIS_MARKER: &str = "**";

const WNI: &str = "WNI";
const WNI_LONG: &str = "Warga Negara Indonesia";
const RT_RW_WIDTH: usize = 3;

/// Render one record as an Indonesian comparisi sentence.
///
/// Never fails: missing identity yields [`INCOMPLETE_DATA_MESSAGE`], other
/// anomalies only degrade the affected phrase.
pub fn compose(fields: &StructuredFields) -> String {
    if !fields.has_national_id() {
        return INCOMPLETE_DATA_MESSAGE.to_string();
    }

    let salutation = Salutation::select(
        Gender::classify(&fields.gender),
        MaritalStatus::classify(&fields.marital_status),
    );

    format!(
        "{em}{salutation} {name}{em}, lahir di {place}, pada tanggal {date} ({date_words}), {occupation}, {address}, pemegang Kartu Tanda Penduduk dengan Nomor Induk Kependudukan {nik}, {citizenship}.",
        em = EMPHASIS_MARKER,
        salutation = salutation,
        name = name_block(fields),
        place = title_case(fields.birth_place.trim()),
        date = fields.birth_date.trim(),
        date_words = spell_date(&fields.birth_date),
        occupation = title_case(fields.occupation.trim()),
        address = address_clause(fields),
        nik = fields.national_id.trim(),
        citizenship = normalize_citizenship(&fields.citizenship),
    )
}

/// `[Prefix ]NAME[, Suffix]`, with empty honorific segments left out.
pub fn name_block(fields: &StructuredFields) -> String {
    let mut block = String::new();

    let prefix = normalize_prefix_honorific(&fields.honorifics_prefix_expanded, &fields.gender);
    if !prefix.is_empty() {
        block.push_str(&title_case(&prefix));
        block.push(' ');
    }

    block.push_str(&fields.full_name.trim().to_uppercase());

    let suffix = fields.honorifics_suffix_expanded.trim();
    if !suffix.is_empty() {
        block.push_str(", ");
        block.push_str(&title_case(suffix));
    }

    block
}

pub fn address_clause(fields: &StructuredFields) -> String {
    format!(
        "bertempat tinggal di {}, {}, Rukun Tetangga {}, Rukun Warga {}, Kelurahan {}, Kecamatan {}",
        fields.city.trim(),
        fields.address.trim(),
        pad_rt_rw(&fields.rt),
        pad_rt_rw(&fields.rw),
        title_case(fields.village.trim()),
        title_case(fields.district.trim()),
    )
}

/// Left-pad an RT/RW number with zeros to three characters.
pub fn pad_rt_rw(value: &str) -> String {
    format!("{:0>width$}", value.trim(), width = RT_RW_WIDTH)
}

/// Expand "WNI" (any case, surrounding whitespace ignored); anything else is
/// returned as given.
pub fn normalize_citizenship(value: &str) -> String {
    if value.trim().to_uppercase() == WNI {
        WNI_LONG.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StructuredFields {
        StructuredFields {
            national_id: "3171012345670001".into(),
            full_name: "budi santoso".into(),
            honorifics_prefix_expanded: "haji".into(),
            honorifics_suffix_expanded: "sarjana hukum".into(),
            birth_place: "JAKARTA".into(),
            birth_date: "17-08-1975".into(),
            gender: "LAKI-LAKI".into(),
            address: "Jalan Melati Nomor 5".into(),
            rt: "5".into(),
            rw: "12".into(),
            village: "CAKUNG BARAT".into(),
            district: "CAKUNG".into(),
            city: "Kota Administrasi Jakarta Timur".into(),
            marital_status: "KAWIN".into(),
            occupation: "KARYAWAN SWASTA".into(),
            citizenship: "WNI".into(),
        }
    }

    #[test]
    fn test_full_sentence() {
        assert_eq!(
            compose(&sample()),
            "**Tuan Haji BUDI SANTOSO, Sarjana Hukum**, lahir di Jakarta, pada tanggal 17-08-1975 \
             (tujuh belas Agustus seribu sembilan ratus tujuh puluh lima), Karyawan Swasta, \
             bertempat tinggal di Kota Administrasi Jakarta Timur, Jalan Melati Nomor 5, \
             Rukun Tetangga 005, Rukun Warga 012, Kelurahan Cakung Barat, Kecamatan Cakung, \
             pemegang Kartu Tanda Penduduk dengan Nomor Induk Kependudukan 3171012345670001, \
             Warga Negara Indonesia."
        );
    }

    #[test]
    fn test_missing_nik_returns_sentinel() {
        let fields = StructuredFields {
            national_id: String::new(),
            ..sample()
        };
        assert_eq!(compose(&fields), INCOMPLETE_DATA_MESSAGE);
        assert_eq!(compose(&StructuredFields::default()), INCOMPLETE_DATA_MESSAGE);
    }

    #[test]
    fn test_empty_honorifics_are_omitted() {
        let fields = StructuredFields {
            honorifics_prefix_expanded: "  ".into(),
            honorifics_suffix_expanded: String::new(),
            ..sample()
        };
        assert!(compose(&fields).starts_with("**Tuan BUDI SANTOSO**, lahir di"));
    }

    #[test]
    fn test_hajjah_for_women() {
        let fields = StructuredFields {
            full_name: "siti aminah".into(),
            gender: "perempuan".into(),
            marital_status: "CERAI MATI".into(),
            ..sample()
        };
        assert!(compose(&fields).starts_with("**Nyonya Hajjah SITI AMINAH, Sarjana Hukum**,"));
    }

    #[test]
    fn test_hajjah_when_gender_mentions_both() {
        let fields = StructuredFields {
            full_name: "siti".into(),
            gender: "LAKI-LAKI/PEREMPUAN".into(),
            honorifics_suffix_expanded: String::new(),
            ..sample()
        };
        assert!(compose(&fields).starts_with("**Tuan Hajjah SITI**, lahir di"));
    }

    #[test]
    fn test_nona_for_unmarried_women() {
        let fields = StructuredFields {
            honorifics_prefix_expanded: String::new(),
            full_name: "rina".into(),
            gender: "PEREMPUAN".into(),
            marital_status: "belum kawin".into(),
            ..sample()
        };
        assert!(compose(&fields).starts_with("**Nona RINA, Sarjana Hukum**,"));
    }

    #[test]
    fn test_unparseable_date_keeps_parenthetical() {
        let fields = StructuredFields {
            birth_date: "17 Agustus 1975".into(),
            ..sample()
        };
        assert!(compose(&fields).contains("pada tanggal 17 Agustus 1975 (), Karyawan Swasta"));
    }

    #[test]
    fn test_pad_rt_rw() {
        assert_eq!(pad_rt_rw("5"), "005");
        assert_eq!(pad_rt_rw("12"), "012");
        assert_eq!(pad_rt_rw("007"), "007");
        assert_eq!(pad_rt_rw("1234"), "1234");
        assert_eq!(pad_rt_rw(""), "000");
    }

    #[test]
    fn test_citizenship() {
        assert_eq!(normalize_citizenship(" wni "), "Warga Negara Indonesia");
        assert_eq!(normalize_citizenship("WNA"), "WNA");
        assert_eq!(normalize_citizenship(""), "");
    }

    #[test]
    fn test_idempotent() {
        let fields = sample();
        assert_eq!(compose(&fields), compose(&fields));
    }
}
