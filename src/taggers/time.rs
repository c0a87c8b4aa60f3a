//! Time tagger: 24-hour clock times with optional π.μ./μ.μ. suffix.
//!
//! `"14:30"` → `time { hours: "δεκατέσσερα" minutes: "τριάντα" }`
//! `"9:05"` → `time { hours: "εννέα" minutes: "πέντε" }`
//! `"14:30:45"` → adds `seconds: "σαράντα πέντε"`
//! `"3.15 μ.μ."` → period separator accepted when a suffix disambiguates.
//!
//! Without a suffix only `:` separates fields; a bare `3.15` reads as a
//! decimal. Minutes `"00"` render the zero word, never an empty field.

use crate::numeral;
use crate::token::TokenSet;

use super::{TagContext, strip_leading_zero};

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };

    let (body, suffix) = match token.split_once(' ') {
        Some((body, rest)) => {
            let Some(spoken) = suffix_spoken(rest, cx) else {
                return Vec::new();
            };
            (body, Some(spoken))
        }
        None => (token, None),
    };

    let separator = if body.contains(':') {
        ':'
    } else if suffix.is_some() && body.contains('.') {
        '.'
    } else {
        return Vec::new();
    };

    let parts: Vec<&str> = body.split(separator).collect();
    if !(2..=3).contains(&parts.len()) {
        return Vec::new();
    }

    let Some(hours) = field(parts[0], 1, 23, tables) else {
        return Vec::new();
    };
    let Some(minutes) = field(parts[1], 2, 59, tables) else {
        return Vec::new();
    };

    let mut set = TokenSet::new("time")
        .with("hours", hours)
        .with("minutes", minutes);
    if let Some(seconds_str) = parts.get(2) {
        let Some(seconds) = field(seconds_str, 2, 59, tables) else {
            return Vec::new();
        };
        set.push("seconds", seconds);
    }
    if let Some(spoken) = suffix {
        set.push("suffix", spoken);
    }
    vec![set]
}

/// Compose one clock field: `min_width`..=2 digits, value capped, single
/// leading zero stripped so "05" reads πέντε and "00" reads μηδέν.
fn field(
    digits: &str,
    min_width: usize,
    max_value: u8,
    tables: &crate::lexicon::NumberTables,
) -> Option<String> {
    if digits.len() < min_width || digits.len() > 2 {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u8 = digits.parse().ok()?;
    if value > max_value {
        return None;
    }
    numeral::compose(strip_leading_zero(digits), tables)
}

fn suffix_spoken(written: &str, cx: &TagContext<'_>) -> Option<String> {
    cx.lexicon
        .time_suffixes()
        .iter()
        .find_map(|(key, spoken)| (key == written).then(|| spoken.clone()))
}
