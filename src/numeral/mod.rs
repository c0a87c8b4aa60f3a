//! The numeral core: cardinal composition and ordinal formation.
//!
//! Everything else in the crate spells numbers by delegating here. The
//! composer turns a digit string into spoken Greek with scale words and
//! elision; the former derives gendered ordinal words from the same
//! decomposition.

pub mod cardinal;
pub mod ordinal;

pub use cardinal::{MAX_DIGITS, compose, strip_grouping};
pub use ordinal::{Gender, form};

use crate::lexicon::NumberTables;

/// Read a digit run one digit at a time, each as its own word. Used for
/// telephone numbers and decimal fractional parts, where positional
/// grouping must NOT apply ("05" is μηδέν πέντε, never πέντε).
pub fn read_digits(digits: &str, tables: &NumberTables) -> Option<String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let words: Vec<&str> = digits
        .bytes()
        .map(|b| tables.digit_or_zero(b - b'0'))
        .collect();
    Some(words.join(" "))
}

/// Collapse runs of spaces and trim the ends. The composer's word joins
/// never double a space, but scale words arrive from data files and the
/// contract is a single-spaced sequence regardless.
pub(crate) fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;
    for c in text.chars() {
        if c == ' ' {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
