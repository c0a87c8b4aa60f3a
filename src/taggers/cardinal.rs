//! Cardinal tagger: plain or punctuation-grouped integers, optionally
//! signed.
//!
//! `"123"` → `cardinal { integer: "εκατόν είκοσι τρία" }`
//! `"-5"` → `cardinal { negative: "true" integer: "πέντε" }`
//! `"1.234"` → `cardinal { integer: "χίλια διακόσια τριάντα τέσσερα" }`

use crate::numeral;
use crate::token::TokenSet;

use super::TagContext;

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };

    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let Some(digits) = numeral::strip_grouping(body) else {
        return Vec::new();
    };
    let Some(words) = numeral::compose(&digits, tables) else {
        return Vec::new();
    };

    let mut set = TokenSet::new("cardinal");
    if negative {
        set.push("negative", "true");
    }
    set.push("integer", words);
    vec![set]
}
