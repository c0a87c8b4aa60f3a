//! Cardinal verbalizer: `cardinal { negative: "true" integer: "πέντε" }` →
//! `μείον πέντε`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let integer = set.text("integer")?;
    if set.text("negative") == Some("true") {
        Some(format!("μείον {integer}"))
    } else {
        Some(integer.to_string())
    }
}
