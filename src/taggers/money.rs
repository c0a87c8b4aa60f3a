//! Money tagger: currency amounts with the symbol on either side.
//!
//! `"€50"` → `money { currency: "ευρώ" integer_part: "πενήντα" }`
//! `"€10,50"` → adds `fractional_part: "πενήντα" currency_minor: "λεπτά"`
//! `"10,50€"` → amount-first field order; the verbalizer restores the
//! canonical spoken order.
//!
//! Cents are exactly two digits, leading zero stripped, composed as a
//! cardinal — not read digit by digit the way decimal fractions are.

use crate::lexicon::CurrencyEntry;
use crate::numeral;
use crate::token::TokenSet;

use super::{TagContext, strip_leading_zero};

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };

    for currency in cx.lexicon.currencies() {
        let (amount_str, symbol_first) = if let Some(rest) = token.strip_prefix(&currency.symbol) {
            (rest, true)
        } else if let Some(rest) = token.strip_suffix(&currency.symbol) {
            (rest, false)
        } else {
            continue;
        };

        let (integer_str, cents_str) = match amount_str.split_once([',', '.']) {
            Some((i, c)) => (i, Some(c)),
            None => (amount_str, None),
        };

        let Some(integer) = numeral::compose(integer_str, tables) else {
            return Vec::new();
        };
        let cents = match cents_str {
            Some(c) => {
                if c.len() != 2 || !c.bytes().all(|b| b.is_ascii_digit()) {
                    return Vec::new();
                }
                let Some(minor) = currency.minor.as_deref() else {
                    return Vec::new();
                };
                let Some(words) = numeral::compose(strip_leading_zero(c), tables) else {
                    return Vec::new();
                };
                Some((words, minor))
            }
            None => None,
        };

        return vec![build(currency, &integer, cents, symbol_first)];
    }
    Vec::new()
}

fn build(
    currency: &CurrencyEntry,
    integer: &str,
    cents: Option<(String, &str)>,
    symbol_first: bool,
) -> TokenSet {
    let mut set = TokenSet::new("money");
    if symbol_first {
        set.push("currency", currency.major.as_str());
        set.push("integer_part", integer);
        if let Some((words, minor)) = cents {
            set.push("fractional_part", words);
            set.push("currency_minor", minor);
        }
    } else {
        set.push("integer_part", integer);
        if let Some((words, minor)) = cents {
            set.push("fractional_part", words);
            set.push("currency", currency.major.as_str());
            set.push("currency_minor", minor);
        } else {
            set.push("currency", currency.major.as_str());
        }
    }
    set
}
