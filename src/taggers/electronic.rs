//! Electronic tagger: e-mail addresses and URLs spelled symbol by symbol.
//!
//! `"example@gmail.com"` → `electronic { username: "example" domain:
//! "παπάκι gmail τελεία com" }`
//! `"https://site.gr"` → `electronic { protocol: "..." domain: "..." }`
//! `"www.google.gr"` and bare domains like `"google.gr"` also match.
//!
//! Latin letters and digits pass through unchanged; punctuation reads by
//! its Greek name (τελεία, παύλα, κάθετος, …).

use crate::token::TokenSet;

use super::TagContext;

/// Spoken names for address punctuation.
const SYMBOLS: &[(char, &str)] = &[
    ('@', "παπάκι"),
    ('.', "τελεία"),
    ('-', "παύλα"),
    ('_', "κάτω παύλα"),
    ('/', "κάθετος"),
    (':', "άνω κάτω τελεία"),
];

/// Spoken forms for protocol prefixes, spelled once as a unit.
const PROTOCOLS: &[(&str, &str)] = &[
    (
        "https://",
        "χτπς άνω κάτω τελεία κάθετος κάθετος",
    ),
    (
        "http://",
        "χτπ άνω κάτω τελεία κάθετος κάθετος",
    ),
    ("www.", "ντάμπλιου ντάμπλιου ντάμπλιου τελεία"),
];

pub fn tag(token: &str, _cx: &TagContext<'_>) -> Vec<TokenSet> {
    // E-mail: username@domain.
    if let Some((local, host)) = token.split_once('@') {
        if !local.is_empty()
            && !host.is_empty()
            && is_address_text(local)
            && is_address_text(host)
            && !host.contains('@')
        {
            let set = TokenSet::new("electronic")
                .with("username", spell(local))
                .with("domain", format!("παπάκι {}", spell(host)));
            return vec![set];
        }
        return Vec::new();
    }

    // URL with an explicit protocol prefix.
    for (prefix, spoken) in PROTOCOLS {
        if let Some(rest) = token.strip_prefix(prefix) {
            if rest.is_empty() || rest.contains(' ') {
                return Vec::new();
            }
            let set = TokenSet::new("electronic")
                .with("protocol", *spoken)
                .with("domain", spell(rest));
            return vec![set];
        }
    }

    // Bare domain: needs a dot and at least one letter so that plain and
    // punctuation-grouped numbers never read as addresses.
    if token.contains('.')
        && token.bytes().any(|b| b.is_ascii_alphabetic())
        && is_address_text(token)
        && !token.starts_with('.')
        && !token.ends_with('.')
    {
        let set = TokenSet::new("electronic").with("domain", spell(token));
        return vec![set];
    }

    Vec::new()
}

fn is_address_text(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
}

/// Spell a run of address characters: alphanumerics pass through, known
/// punctuation reads by name, anything else passes through unchanged.
fn spell(text: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut run = String::new();
    for c in text.chars() {
        match SYMBOLS.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, name)) => {
                if !run.is_empty() {
                    words.push(std::mem::take(&mut run));
                }
                words.push((*name).to_string());
            }
            None => run.push(c),
        }
    }
    if !run.is_empty() {
        words.push(run);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::lexicon::Lexicon;

    fn cx(lex: &Lexicon) -> TagContext<'_> {
        TagContext {
            lexicon: lex,
            deterministic: true,
            lower_case_input: false,
        }
    }

    #[test]
    fn test_email() {
        let lex = Lexicon::bundled();
        let sets = tag("example@gmail.com", &cx(&lex));
        assert_eq!(
            sets[0].to_string(),
            "electronic { username: \"example\" domain: \"παπάκι gmail τελεία com\" }"
        );
    }

    #[test]
    fn test_email_with_punctuated_local_part() {
        let lex = Lexicon::bundled();
        let sets = tag("john.doe@site.gr", &cx(&lex));
        assert_eq!(sets[0].text("username"), Some("john τελεία doe"));
    }

    #[test]
    fn test_url_with_protocol() {
        let lex = Lexicon::bundled();
        let sets = tag("https://site.gr/path", &cx(&lex));
        assert_eq!(
            sets[0].text("protocol"),
            Some("χτπς άνω κάτω τελεία κάθετος κάθετος")
        );
        assert_eq!(sets[0].text("domain"), Some("site τελεία gr κάθετος path"));
    }

    #[test]
    fn test_www_prefix() {
        let lex = Lexicon::bundled();
        let sets = tag("www.google.gr", &cx(&lex));
        assert_eq!(
            sets[0].text("protocol"),
            Some("ντάμπλιου ντάμπλιου ντάμπλιου τελεία")
        );
        assert_eq!(sets[0].text("domain"), Some("google τελεία gr"));
    }

    #[test]
    fn test_bare_domain() {
        let lex = Lexicon::bundled();
        let sets = tag("example.com", &cx(&lex));
        assert_eq!(sets[0].text("domain"), Some("example τελεία com"));
    }

    #[test]
    fn test_numbers_are_not_domains() {
        let lex = Lexicon::bundled();
        assert!(tag("1.234", &cx(&lex)).is_empty());
        assert!(tag("3.14", &cx(&lex)).is_empty());
        assert!(tag("example", &cx(&lex)).is_empty());
    }

    #[test]
    fn test_malformed_emails_fall_through() {
        let lex = Lexicon::bundled();
        assert!(tag("@host", &cx(&lex)).is_empty());
        assert!(tag("user@", &cx(&lex)).is_empty());
        assert!(tag("a@b@c", &cx(&lex)).is_empty());
    }
}
