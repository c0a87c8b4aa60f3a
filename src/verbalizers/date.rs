//! Date verbalizer: day month year, space-joined.
//!
//! `date { day: "δεκαπέντε" month: "Μαρτίου" year: "..." }` → `δεκαπέντε
//! Μαρτίου ...`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let day = set.text("day")?;
    let month = set.text("month")?;
    let mut out = format!("{day} {month}");
    if let Some(year) = set.text("year") {
        out.push(' ');
        out.push_str(year);
    }
    Some(out)
}
