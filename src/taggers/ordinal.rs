//! Ordinal tagger: 1–2 digit values with a gender marker suffix.
//!
//! `"1ος"` → `ordinal { integer: "πρώτος" morphosyntactic_features: "masc" }`
//! `"2η"` → `ordinal { integer: "δεύτερη" morphosyntactic_features: "fem" }`
//! `"3."` → masculine by default.
//!
//! In non-deterministic mode a bare 1–2 digit token additionally yields all
//! three gender readings as alternatives.

use crate::numeral::{Gender, form};
use crate::token::TokenSet;

use super::TagContext;

/// Gender marker suffixes accepted on the written token, accented and
/// unaccented. A trailing period with no marker defaults to masculine.
const MASCULINE_MARKERS: &[&str] = &["ος", "ός"];
const FEMININE_MARKERS: &[&str] = &["η", "ή", "α", "ά"];
const NEUTER_MARKERS: &[&str] = &["ο", "ό"];

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    if cx.lexicon.numbers().is_none() {
        return Vec::new();
    }

    let digit_len = token.bytes().take_while(u8::is_ascii_digit).count();
    if !(1..=2).contains(&digit_len) {
        return Vec::new();
    }
    let (digits, marker) = token.split_at(digit_len);

    let genders: &[Gender] = if MASCULINE_MARKERS.contains(&marker) || marker == "." {
        &[Gender::Masculine]
    } else if FEMININE_MARKERS.contains(&marker) {
        &[Gender::Feminine]
    } else if NEUTER_MARKERS.contains(&marker) {
        &[Gender::Neuter]
    } else if marker.is_empty() && !cx.deterministic {
        &Gender::ALL
    } else {
        return Vec::new();
    };

    genders
        .iter()
        .filter_map(|&gender| {
            let word = form(digits, gender)?;
            Some(
                TokenSet::new("ordinal")
                    .with("integer", word)
                    .with("morphosyntactic_features", gender.tag()),
            )
        })
        .collect()
}
