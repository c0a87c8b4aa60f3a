//! Fraction tagger: numerator/denominator pairs and mixed numbers.
//!
//! `"3/4"` → `fraction { numerator: "τρία" denominator: "τέσσερα" }`
//! `"2 1/2"` → adds `integer_part: "δύο"` in front.
//!
//! Special-fraction spellings (μισό, τέταρτο) exist as lexicon data but are
//! not consulted here; the default grammar always composes both sides as
//! cardinals. See DESIGN.md.

use crate::numeral;
use crate::token::TokenSet;

use super::TagContext;

const SEPARATORS: [char; 2] = ['/', '⁄'];

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };

    // Mixed number: "2 1/2".
    let (integer_str, fraction_str) = match token.split_once(' ') {
        Some((i, f)) => (Some(i), f),
        None => (None, token),
    };
    let Some((numerator_str, denominator_str)) = fraction_str.split_once(SEPARATORS) else {
        return Vec::new();
    };

    let integer_words = match integer_str {
        Some(digits) => match numeral::compose(digits, tables) {
            Some(words) => Some(words),
            None => return Vec::new(),
        },
        None => None,
    };
    let Some(numerator) = numeral::compose(numerator_str, tables) else {
        return Vec::new();
    };
    let Some(denominator) = numeral::compose(denominator_str, tables) else {
        return Vec::new();
    };

    let mut set = TokenSet::new("fraction");
    if let Some(words) = integer_words {
        set.push("integer_part", words);
    }
    set.push("numerator", numerator);
    set.push("denominator", denominator);
    vec![set]
}
