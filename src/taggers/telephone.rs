//! Telephone tagger: Greek phone numbers read digit by digit.
//!
//! `"+30 210 1234567"` → `telephone { country_code: "τριάντα" number_part:
//! "δύο ένα μηδέν ένα δύο τρία τέσσερα πέντε έξι επτά" }`
//! `"6912345678"` → `telephone { number_part: "..." }`
//!
//! Without a country code a token must look like a Greek number: exactly
//! ten digits starting with 69 (mobile) or 2 (landline). Separator
//! characters — space, dash, parentheses, period — are deleted.

use crate::numeral;
use crate::token::TokenSet;

use super::TagContext;

const SEPARATORS: [char; 5] = [' ', '-', '(', ')', '.'];

/// Minimum digits following an explicit country code.
const MIN_SUBSCRIBER_DIGITS: usize = 6;

pub fn tag(token: &str, cx: &TagContext<'_>) -> Vec<TokenSet> {
    let Some(tables) = cx.lexicon.numbers() else {
        return Vec::new();
    };

    let (country_code, rest) = match token.strip_prefix("+30").or_else(|| token.strip_prefix("0030"))
    {
        Some(rest) => {
            let Some(words) = numeral::compose("30", tables) else {
                return Vec::new();
            };
            (Some(words), rest)
        }
        None => (None, token),
    };

    let Some(digits) = collect_digits(rest) else {
        return Vec::new();
    };
    let plausible = match country_code {
        Some(_) => digits.len() >= MIN_SUBSCRIBER_DIGITS,
        None => digits.len() == 10 && (digits.starts_with("69") || digits.starts_with('2')),
    };
    if !plausible {
        return Vec::new();
    }
    let Some(number_part) = numeral::read_digits(&digits, tables) else {
        return Vec::new();
    };

    let mut set = TokenSet::new("telephone");
    if let Some(words) = country_code {
        set.push("country_code", words);
    }
    set.push("number_part", number_part);
    vec![set]
}

/// Strip separators; `None` when anything else but digits remains or no
/// digit is present at all.
fn collect_digits(text: &str) -> Option<String> {
    let mut digits = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !SEPARATORS.contains(&c) {
            return None;
        }
    }
    (!digits.is_empty()).then_some(digits)
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
    fn test_mobile_number() {
        let lex = Lexicon::bundled();
        let sets = tag("6912345678", &cx(&lex));
        assert_eq!(
            sets[0].text("number_part"),
            Some("έξι εννέα ένα δύο τρία τέσσερα πέντε έξι επτά οκτώ")
        );
    }

    #[test]
    fn test_landline_with_separators() {
        let lex = Lexicon::bundled();
        let sets = tag("210-123-4567", &cx(&lex));
        assert_eq!(
            sets[0].text("number_part"),
            Some("δύο ένα μηδέν ένα δύο τρία τέσσερα πέντε έξι επτά")
        );
    }

    #[test]
    fn test_country_code() {
        let lex = Lexicon::bundled();
        let sets = tag("+30 210 1234567", &cx(&lex));
        assert_eq!(sets[0].text("country_code"), Some("τριάντα"));
        assert!(sets[0].text("number_part").unwrap().starts_with("δύο ένα μηδέν"));
    }

    #[test]
    fn test_zero_zero_prefix() {
        let lex = Lexicon::bundled();
        let sets = tag("00306912345678", &cx(&lex));
        assert_eq!(sets[0].text("country_code"), Some("τριάντα"));
    }

    #[test]
    fn test_implausible_numbers_fall_through() {
        let lex = Lexicon::bundled();
        // Wrong length and wrong prefix for a Greek number.
        assert!(tag("123", &cx(&lex)).is_empty());
        assert!(tag("1234567890", &cx(&lex)).is_empty());
        assert!(tag("69123", &cx(&lex)).is_empty());
        assert!(tag("+30 123", &cx(&lex)).is_empty());
        assert!(tag("210x1234567", &cx(&lex)).is_empty());
    }
}
