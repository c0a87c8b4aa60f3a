//! Measure tagger: a numeric value plus a unit symbol.
//!
//! `"5 km"` → `measure { cardinal { integer: "πέντε" } units: "χιλιόμετρα" }`
//! `"3,5 m"` → `measure { decimal { ... } units: "μέτρα" }`
//! `"50%"` → unit symbols may attach without a space.
//!
//! The value is whatever the cardinal, decimal or fraction grammar accepts,
//! nested whole inside the measure token. The unit reads singular for
//! exactly one, plural otherwise.

use crate::token::TokenSet;

use super::{TagContext, cardinal, decimal, fraction};

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    if cx.lexicon.numbers().is_none() {
        return Vec::new();
    }

    // Longest symbol first so "mm" and "km" win over "m".
    let mut units: Vec<_> = cx.lexicon.measures().iter().collect();
    units.sort_by_key(|u| std::cmp::Reverse(u.symbol.len()));

    for unit in units {
        let Some(raw_value) = token.strip_suffix(&unit.symbol) else {
            continue;
        };
        let value_str = raw_value.strip_suffix(' ').unwrap_or(raw_value);
        if value_str.is_empty() || value_str.ends_with(' ') {
            continue;
        }

        let Some(inner) = tag_value(value_str, cx) else {
            continue;
        };
        let word = if is_exactly_one(value_str) {
            unit.singular.as_str()
        } else {
            unit.plural.as_str()
        };

        let mut set = TokenSet::new("measure");
        set.push_nested(inner);
        set.push("units", word);
        return vec![set];
    }
    Vec::new()
}

fn tag_value(value: &str, cx: &TagContext<'_>) -> Option<TokenSet> {
    fraction::tag(value, cx)
        .into_iter()
        .next()
        .or_else(|| decimal::tag(value, cx).into_iter().next())
        .or_else(|| cardinal::tag(value, cx).into_iter().next())
}

fn is_exactly_one(value: &str) -> bool {
    value == "1"
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
    fn test_cardinal_measure() {
        let lex = Lexicon::bundled();
        let sets = tag("5 km", &cx(&lex));
        assert_eq!(
            sets[0].to_string(),
            "measure { cardinal { integer: \"πέντε\" } units: \"χιλιόμετρα\" }"
        );
    }

    #[test]
    fn test_singular_for_exactly_one() {
        let lex = Lexicon::bundled();
        let sets = tag("1 kg", &cx(&lex));
        assert_eq!(sets[0].text("units"), Some("κιλό"));
    }

    #[test]
    fn test_decimal_measure() {
        let lex = Lexicon::bundled();
        let sets = tag("3,5 m", &cx(&lex));
        let inner = sets[0].nested("decimal").unwrap();
        assert_eq!(inner.text("integer_part"), Some("τρία"));
        assert_eq!(sets[0].text("units"), Some("μέτρα"));
    }

    #[test]
    fn test_fraction_measure() {
        let lex = Lexicon::bundled();
        let sets = tag("1/2 l", &cx(&lex));
        assert!(sets[0].nested("fraction").is_some());
        assert_eq!(sets[0].text("units"), Some("λίτρα"));
    }

    #[test]
    fn test_percent_attaches_without_space() {
        let lex = Lexicon::bundled();
        let sets = tag("50%", &cx(&lex));
        assert_eq!(sets[0].text("units"), Some("τοις εκατό"));
    }

    #[test]
    fn test_longest_symbol_wins() {
        let lex = Lexicon::bundled();
        let sets = tag("5 mm", &cx(&lex));
        assert_eq!(sets[0].text("units"), Some("χιλιοστά"));
    }

    #[test]
    fn test_negative_measure_keeps_sign_field() {
        let lex = Lexicon::bundled();
        let sets = tag("-4 °C", &cx(&lex));
        let inner = sets[0].nested("cardinal").unwrap();
        assert_eq!(inner.text("negative"), Some("true"));
        assert_eq!(sets[0].text("units"), Some("βαθμοί Κελσίου"));
    }

    #[test]
    fn test_no_match_cases() {
        let lex = Lexicon::bundled();
        assert!(tag("km", &cx(&lex)).is_empty());
        assert!(tag("5 xx", &cx(&lex)).is_empty());
        assert!(tag("5", &cx(&lex)).is_empty());
    }
}
