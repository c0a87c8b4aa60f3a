//! Ordinal verbalizer: the formed word passes through; the gender feature
//! was only ever routing information.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    set.text("integer").map(str::to_string)
}
