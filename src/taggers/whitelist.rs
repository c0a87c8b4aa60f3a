//! Whitelist tagger: verbatim replacements from table data.
//!
//! `"κ."` → `whitelist { name: "κύριος" }`
//!
//! Matches win over every other grammar, so the table can also pin down
//! tokens that would otherwise classify as something else. With
//! `lower_case_input` set, lookup is case-insensitive (written forms in
//! running Greek text often arrive capitalized).

use crate::token::TokenSet;

use super::TagContext;

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let entry = cx.lexicon.whitelist().iter().find(|(written, _)| {
        if cx.lower_case_input {
            written.to_lowercase() == token.to_lowercase()
        } else {
            written == token
        }
    });
    match entry {
        Some((_, spoken)) => vec![TokenSet::new("whitelist").with("name", spoken.as_str())],
        None => Vec::new(),
    }
}
