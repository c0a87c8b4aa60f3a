//! Fraction verbalizer: προς joins numerator and denominator, και attaches
//! a leading whole part.
//!
//! `fraction { numerator: "τρία" denominator: "τέσσερα" }` → `τρία προς
//! τέσσερα`. A pre-resolved fraction with an empty denominator emits the
//! numerator alone.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let numerator = set.text("numerator")?;
    let denominator = set.text("denominator")?;

    let body = if denominator.is_empty() {
        numerator.to_string()
    } else {
        format!("{numerator} προς {denominator}")
    };
    match set.text("integer_part") {
        Some(integer) => Some(format!("{integer} και {body}")),
        None => Some(body),
    }
}
