//! Decimal tagger: comma-separated decimals, fractional part read digit by
//! digit.
//!
//! `"3,14"` → `decimal { integer_part: "τρία" fractional_part: "ένα τέσσερα" }`
//! `",5"` → `decimal { integer_part: "μηδέν" fractional_part: "πέντε" }`
//! `"3,5 εκατομμύρια"` → adds `quantity: "εκατομμύρια"`.
//!
//! Greek writes decimals with a comma. A period is tolerated as separator,
//! but a token that parses as a punctuation-grouped cardinal (`1.234`)
//! belongs to the cardinal grammar and is rejected here, so grouped and
//! plain spellings of the same integer stay identical downstream.

use crate::lexicon::NumberTables;
use crate::numeral;
use crate::token::TokenSet;

use super::TagContext;

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };

    // Optional trailing scale-word quantity ("3,5 εκατομμύρια").
    let (body, quantity) = match token.split_once(' ') {
        Some((body, rest)) if is_quantity(rest, tables) => (body, Some(rest)),
        Some(_) => return Vec::new(),
        None => (token, None),
    };

    let Some((integer_str, fraction_str)) = split_decimal(body) else {
        return Vec::new();
    };
    if fraction_str.is_empty() || !fraction_str.bytes().all(|b| b.is_ascii_digit()) {
        return Vec::new();
    }

    let integer_words = if integer_str.is_empty() {
        tables.zero.clone()
    } else {
        let Some(digits) = numeral::strip_grouping(integer_str) else {
            return Vec::new();
        };
        match numeral::compose(&digits, tables) {
            Some(words) => words,
            None => return Vec::new(),
        }
    };
    let Some(fraction_words) = numeral::read_digits(fraction_str, tables) else {
        return Vec::new();
    };

    let mut set = TokenSet::new("decimal")
        .with("integer_part", integer_words)
        .with("fractional_part", fraction_words);
    if let Some(q) = quantity {
        set.push("quantity", q);
    }
    vec![set]
}

/// Split at the decimal separator. Comma binds first; a period splits only
/// when the token is not a valid grouped cardinal.
fn split_decimal(body: &str) -> Option<(&str, &str)> {
    if let Some(split) = body.split_once(',') {
        return Some(split);
    }
    if body.contains('.') && numeral::strip_grouping(body).is_none() {
        return body.split_once('.');
    }
    None
}

fn is_quantity(word: &str, tables: &NumberTables) -> bool {
    tables.scales.iter().any(|s| s.many == word)
}
