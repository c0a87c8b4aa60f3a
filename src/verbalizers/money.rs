//! Money verbalizer: canonical spoken order is amount, currency, then
//! cents joined with και — regardless of whether the symbol was written
//! before or after the amount.
//!
//! `money { currency: "ευρώ" integer_part: "δέκα" fractional_part:
//! "πενήντα" currency_minor: "λεπτά" }` → `δέκα ευρώ και πενήντα λεπτά`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let integer = set.text("integer_part")?;
    let currency = set.text("currency")?;

    let mut out = format!("{integer} {currency}");
    if let (Some(fraction), Some(minor)) =
        (set.text("fractional_part"), set.text("currency_minor"))
    {
        out = format!("{out} και {fraction} {minor}");
    }
    Some(out)
}
