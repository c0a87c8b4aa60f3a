//! Electronic verbalizer: protocol, username and domain in written order.
//!
//! `electronic { username: "example" domain: "παπάκι gmail τελεία com" }` →
//! `example παπάκι gmail τελεία com`.

use crate::token::TokenSet;

pub fn verbalize(set: &TokenSet) -> Option<String> {
    let domain = set.text("domain")?;
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if let Some(protocol) = set.text("protocol") {
        parts.push(protocol);
    }
    if let Some(username) = set.text("username") {
        parts.push(username);
    }
    parts.push(domain);
    Some(parts.join(" "))
}
