//! Classification grammars (taggers), one per semiotic class.
//!
//! A tagger inspects one written token and, when the token matches its
//! class, emits one or more [`TokenSet`] alternatives — the structured
//! intermediate form consumed by the verbalizers. No match is an empty
//! result, never an error: the dispatcher falls through to the next class
//! in [`PRIORITY`] order and ultimately to verbatim output.
//!
//! In deterministic mode every tagger returns at most one alternative and
//! the first matching class wins. In non-deterministic mode taggers may
//! return several alternatives (e.g. all three genders of an unmarked
//! ordinal) and the dispatcher keeps every match from every class.

pub mod cardinal;
pub mod date;
pub mod decimal;
pub mod electronic;
pub mod fraction;
pub mod measure;
pub mod money;
pub mod ordinal;
pub mod telephone;
pub mod time;
pub mod whitelist;

use crate::lexicon::Lexicon;
use crate::token::TokenSet;

/// Shared classification context: the word tables plus the mode flags.
#[derive(Debug, Clone, Copy)]
pub struct TagContext<'a> {
    /// Immutable word data.
    pub lexicon: &'a Lexicon,
    /// Single transduction per tagger when true; alternatives when false.
    pub deterministic: bool,
    /// Lowercase tokens before whitelist lookup.
    pub lower_case_input: bool,
}

/// A classification grammar entry point.
pub type TagFn = for<'a> fn(&str, &TagContext<'a>) -> Vec<TokenSet>;

/// Fixed precedence order across classes. Ambiguous tokens (a token matched
/// by several grammars) resolve to the first entry here in deterministic
/// mode; the order is part of the crate contract.
pub const PRIORITY: &[(&str, TagFn)] = &[
    ("whitelist", whitelist::tag),
    ("time", time::tag),
    ("date", date::tag),
    ("money", money::tag),
    ("measure", measure::tag),
    ("fraction", fraction::tag),
    ("telephone", telephone::tag),
    ("decimal", decimal::tag),
    ("electronic", electronic::tag),
    ("ordinal", ordinal::tag),
    ("cardinal", cardinal::tag),
];

/// Strip a single leading zero from a 2-digit field ("05" → "5", "00" →
/// "0"). Day, month, hour, minute and second fields read this way before
/// cardinal composition.
pub(crate) fn strip_leading_zero(digits: &str) -> &str {
    if digits.len() >= 2 && digits.starts_with('0') {
        &digits[1..]
    } else {
        digits
    }
}
