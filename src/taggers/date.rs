//! Date tagger: numeric DD/MM[/YYYY] dates and textual "15 Μαρτίου 2024".
//!
//! `"15/3/2024"` → `date { day: "δεκαπέντε" month: "Μαρτίου" year: "δύο
//! χιλιάδες είκοσι τέσσερα" }`
//!
//! Days are cardinals with a single leading zero stripped; months map
//! straight to their genitive names, bypassing cardinal composition; years
//! are 2- or 4-digit cardinals.

use crate::numeral;
use crate::token::TokenSet;

use super::{TagContext, strip_leading_zero};

const SEPARATORS: [char; 3] = ['/', '-', '.'];

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };
    let Some(months) = cx.lexicon.months() else {
        return Vec::new();
    };

    if token.contains(' ') {
        return tag_textual(token, months, cx);
    }

    let parts: Vec<&str> = token.split(SEPARATORS).collect();
    if !(2..=3).contains(&parts.len()) {
        return Vec::new();
    }

    let Some(day) = compose_small(parts[0], cx) else {
        return Vec::new();
    };
    let Some(month) = month_name(parts[1], months) else {
        return Vec::new();
    };

    let mut set = TokenSet::new("date").with("day", day).with("month", month);
    if let Some(year_str) = parts.get(2) {
        if year_str.len() != 2 && year_str.len() != 4 {
            return Vec::new();
        }
        let Some(year) = numeral::compose(year_str, tables) else {
            return Vec::new();
        };
        set.push("year", year);
    }
    vec![set]
}

/// "15 Μαρτίου" / "15 Μαρτίου 2024": the month arrives already spelled.
fn tag_textual(token: &str, months: &[String], cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };
    let parts: Vec<&str> = token.split(' ').collect();
    if !(2..=3).contains(&parts.len()) {
        return Vec::new();
    }

    let Some(day) = compose_small(parts[0], cx) else {
        return Vec::new();
    };
    if !months.iter().any(|m| m == parts[1]) {
        return Vec::new();
    }

    let mut set = TokenSet::new("date")
        .with("day", day)
        .with("month", parts[1]);
    if let Some(year_str) = parts.get(2) {
        if year_str.len() != 2 && year_str.len() != 4 {
            return Vec::new();
        }
        let Some(year) = numeral::compose(year_str, tables) else {
            return Vec::new();
        };
        set.push("year", year);
    }
    vec![set]
}

/// A 1–2 digit field, leading zero stripped, cardinal-composed.
fn compose_small(digits: &str, cx: &TagContext<'_>) -> Option<String> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    numeral::compose(strip_leading_zero(digits), cx.lexicon.numbers()?)
}

/// A 1–2 digit month number → genitive month name.
fn month_name(digits: &str, months: &[String]) -> Option<String> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = strip_leading_zero(digits).parse().ok()?;
    if !(1..=12).contains(&n) {
        return None;
    }
    Some(months[n - 1].clone())
}
