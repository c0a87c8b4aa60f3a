//! Telephone verbalizer: συν prefixes a country code.
//!
//! `telephone { country_code: "τριάντα" number_part: "..." }` → `συν
//! τριάντα ...`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let number = set.text("number_part")?;
    match set.text("country_code") {
        Some(code) => Some(format!("συν {code} {number}")),
        None => Some(number.to_string()),
    }
}
