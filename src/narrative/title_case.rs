use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WORD_START: Regex = Regex::new(r"\b\w").unwrap();
}

/// Lower-case the input, then upper-case the first character of every word.
///
/// A word starts at any word character that follows a non-word character or
/// the start of the string, so "s.h., m.kn." becomes "S.H., M.Kn.".
pub fn title_case(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let lowered = value.to_lowercase();
    WORD_START
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}
