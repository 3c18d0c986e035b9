//! Terbilang: spelling out non-negative integers in Indonesian.
//!
//! Numbers are decomposed from the largest magnitude band down to the 0–99
//! remainder, each band spelled recursively and joined with single spaces.

const UNITS: [&str; 10] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

const TEENS: [&str; 10] = [
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "delapan belas",
    "sembilan belas",
];

/// Bands above ribu, largest first. Counts are always spelled in full
/// ("satu juta"), only ribu and ratus have the short "se-" form.
const LARGE_BANDS: [(u64, &str); 3] = [
    (1_000_000_000_000, "triliun"),
    (1_000_000_000, "miliar"),
    (1_000_000, "juta"),
];

/// Spell a non-negative integer in Indonesian words.
///
/// ```
/// use ktp_narasi_server::narrative::spell_number;
///
/// assert_eq!(spell_number(2024), "dua ribu dua puluh empat");
/// ```
pub fn spell_number(n: u64) -> String {
    if n == 0 {
        return "nol".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;

    for (size, word) in LARGE_BANDS {
        if rest >= size {
            parts.push(format!("{} {}", spell_number(rest / size), word));
            rest %= size;
        }
    }

    if rest >= 1000 {
        let thousands = rest / 1000;
        if thousands == 1 {
            parts.push("seribu".to_string());
        } else {
            parts.push(format!("{} ribu", spell_number(thousands)));
        }
        rest %= 1000;
    }

    if rest >= 100 {
        let hundreds = rest / 100;
        if hundreds == 1 {
            parts.push("seratus".to_string());
        } else {
            parts.push(format!("{} ratus", UNITS[hundreds as usize]));
        }
        rest %= 100;
    }

    if rest > 0 {
        parts.push(spell_below_hundred(rest as usize));
    }

    parts.join(" ").trim().to_string()
}

fn spell_below_hundred(n: usize) -> String {
    match n {
        0 => String::new(),
        1..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ => {
            let tens = format!("{} puluh", UNITS[n / 10]);
            if n % 10 == 0 {
                tens
            } else {
                format!("{} {}", tens, UNITS[n % 10])
            }
        }
    }
}
