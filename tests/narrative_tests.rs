use ktp_narasi_server::narrative::{
    compose, narrate_batch, spell_date, spell_number, title_case, StructuredFields,
    INCOMPLETE_DATA_MESSAGE,
};

fn wanita() -> StructuredFields {
    StructuredFields {
        national_id: "3175024107850003".into(),
        full_name: "Siti Nurhaliza".into(),
        honorifics_prefix_expanded: "Haji".into(),
        honorifics_suffix_expanded: "sarjana ekonomi".into(),
        birth_place: "bandung".into(),
        birth_date: "01-07-2001".into(),
        gender: "PEREMPUAN".into(),
        address: "Jalan Raya Bekasi Kilometer 18".into(),
        rt: "3".into(),
        rw: "7".into(),
        village: "pulo gebang".into(),
        district: "cakung".into(),
        city: "Jakarta Timur".into(),
        marital_status: "KAWIN".into(),
        occupation: "mengurus rumah tangga".into(),
        citizenship: "wni".into(),
    }
}

#[test]
fn test_number_words() {
    assert_eq!(spell_number(0), "nol");
    assert_eq!(spell_number(15), "lima belas");
    assert_eq!(spell_number(100), "seratus");
    assert_eq!(spell_number(1000), "seribu");
    assert_eq!(spell_number(2024), "dua ribu dua puluh empat");
}

#[test]
fn test_date_words() {
    assert_eq!(
        spell_date("17-08-1945"),
        "tujuh belas Agustus seribu sembilan ratus empat puluh lima"
    );
    assert_eq!(spell_date("01-01-2000"), "satu Januari tahun dua ribu");
    assert_eq!(spell_date("not-a-date"), "");
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("sarjana hukum"), "Sarjana Hukum");
    assert_eq!(title_case(""), "");
}

#[test]
fn test_full_female_narrative() {
    assert_eq!(
        compose(&wanita()),
        "**Nyonya Hajjah SITI NURHALIZA, Sarjana Ekonomi**, lahir di Bandung, \
         pada tanggal 01-07-2001 (satu Juli tahun dua ribu satu), Mengurus Rumah Tangga, \
         bertempat tinggal di Jakarta Timur, Jalan Raya Bekasi Kilometer 18, \
         Rukun Tetangga 003, Rukun Warga 007, Kelurahan Pulo Gebang, Kecamatan Cakung, \
         pemegang Kartu Tanda Penduduk dengan Nomor Induk Kependudukan 3175024107850003, \
         Warga Negara Indonesia."
    );
}

#[test]
fn test_laki_wins_over_marital_status() {
    for gender in ["LAKI-LAKI", "laki-laki", "Laki Laki"] {
        for status in ["BELUM KAWIN", "KAWIN", "CERAI HIDUP", ""] {
            let fields = StructuredFields {
                gender: gender.into(),
                marital_status: status.into(),
                honorifics_prefix_expanded: String::new(),
                ..wanita()
            };
            assert!(
                compose(&fields).starts_with("**Tuan SITI NURHALIZA"),
                "{gender} / {status}"
            );
        }
    }
}

#[test]
fn test_female_salutations() {
    let nona = StructuredFields {
        marital_status: "Belum Kawin".into(),
        ..wanita()
    };
    assert!(compose(&nona).starts_with("**Nona "));

    for status in ["CERAI HIDUP", "CERAI MATI", "tidak terbaca"] {
        let nyonya = StructuredFields {
            marital_status: status.into(),
            ..wanita()
        };
        assert!(compose(&nyonya).starts_with("**Nyonya "), "{status}");
    }
}

#[test]
fn test_haji_kept_for_men() {
    let fields = StructuredFields {
        gender: "LAKI-LAKI".into(),
        full_name: "Ahmad".into(),
        ..wanita()
    };
    assert!(compose(&fields).starts_with("**Tuan Haji AHMAD, Sarjana Ekonomi**"));
}

#[test]
fn test_hajjah_follows_perempuan_even_with_laki() {
    let fields = StructuredFields {
        gender: "laki-laki/perempuan".into(),
        honorifics_prefix_expanded: "haji".into(),
        full_name: "Siti".into(),
        ..wanita()
    };
    assert!(compose(&fields).starts_with("**Tuan Hajjah SITI, Sarjana Ekonomi**"));
}

#[test]
fn test_missing_nik_ignores_everything_else() {
    let fields = StructuredFields {
        national_id: String::new(),
        ..wanita()
    };
    assert_eq!(compose(&fields), INCOMPLETE_DATA_MESSAGE);
}

#[test]
fn test_foreign_citizenship_passes_through() {
    let fields = StructuredFields {
        citizenship: "WNA".into(),
        ..wanita()
    };
    assert!(compose(&fields).ends_with(", WNA."));
}

#[test]
fn test_batch_keeps_order_and_is_idempotent() {
    let records = vec![
        wanita(),
        StructuredFields::default(),
        StructuredFields {
            gender: "LAKI-LAKI".into(),
            ..wanita()
        },
    ];

    let first = narrate_batch(&records);
    let second = narrate_batch(&records);

    assert_eq!(first, second);
    assert!(first[0].starts_with("**Nyonya "));
    assert_eq!(first[1], INCOMPLETE_DATA_MESSAGE);
    assert!(first[2].starts_with("**Tuan "));
}
