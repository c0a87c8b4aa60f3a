//! Cardinal numeral composition.
//!
//! Turns a digit string (value 0 to 10^15 − 1) into the spoken Greek word
//! sequence. The digit string is zero-padded to 15 digits and split into
//! five 3-digit groups bound, most significant first, to the trillion,
//! billion, million, thousand and units scales. Each group renders as a
//! hundreds-component; non-unit groups append their scale word, except that
//! a group whose component is exactly ένα collapses to the scale's
//! irregular form (χίλια, ένα εκατομμύριο, …) instead of ένα + plural.
//!
//! Composition is total over well-formed input and never panics; malformed
//! digit strings return `None` and the caller treats the token as
//! unclassified.

use crate::lexicon::NumberTables;

use super::collapse_spaces;

/// Maximum accepted digit-string width (values below 10^15).
pub const MAX_DIGITS: usize = 15;

/// Compose the spoken form of a plain digit string.
///
/// Accepts `"0"` and any 1–15 digit string without a leading zero. Returns
/// `None` for anything else: non-digits, excess width, `"00"`, `"0123"`.
pub fn compose(digits: &str, tables: &NumberTables) -> Option<String> {
    if digits.is_empty()
        || digits.len() > MAX_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    if digits == "0" {
        return Some(tables.zero.clone());
    }
    if digits.starts_with('0') {
        return None;
    }

    let mut padded = [b'0'; MAX_DIGITS];
    padded[MAX_DIGITS - digits.len()..].copy_from_slice(digits.as_bytes());

    let mut parts: Vec<String> = Vec::with_capacity(5);
    // Groups 0..4 carry scale indices 3..0 (trillion down to thousand);
    // the last group is the units.
    for (i, group) in padded.chunks_exact(3).enumerate() {
        let component = hundreds_component(group, tables);
        if component.is_empty() {
            continue;
        }
        if i == 4 {
            parts.push(component);
            continue;
        }
        let scale = &tables.scales[3 - i];
        if component == tables.digit_word(1) {
            parts.push(scale.one.clone());
        } else {
            parts.push(format!("{component} {}", scale.many));
        }
    }

    Some(collapse_spaces(&parts.join(" ")))
}

/// Render one 3-digit group (0–999). `"000"` renders as the empty string.
fn hundreds_component(group: &[u8], tables: &NumberTables) -> String {
    let h = group[0] - b'0';
    let t = group[1] - b'0';
    let u = group[2] - b'0';

    let tail = tens_component(t, u, tables);
    match h {
        0 => tail,
        1 if tail.is_empty() => tables.hundred_exact().to_string(),
        1 => format!("{} {tail}", tables.hundred_prefix()),
        _ if tail.is_empty() => tables.hundreds_word(h).to_string(),
        _ => format!("{} {tail}", tables.hundreds_word(h)),
    }
}

/// Render the two low digits of a group (0–99). `"00"` renders empty.
fn tens_component(t: u8, u: u8, tables: &NumberTables) -> String {
    match (t, u) {
        (0, 0) => String::new(),
        (0, _) => tables.digit_word(u).to_string(),
        (1, 0) => tables.decade_word(1).to_string(),
        (1, _) => tables.teen_word(10 + u).to_string(),
        (_, 0) => tables.decade_word(t).to_string(),
        (_, _) => format!("{} {}", tables.decade_word(t), tables.digit_word(u)),
    }
}

/// Strip conventional thousands-grouping punctuation from a numeric token.
///
/// Accepts either a plain digit run, or groups of three digits separated by
/// a period or space with a non-zero leftmost group of 1–3 digits
/// (`1.234.567`, `1 234 567`). Returns the bare digit string. Anything else
/// — misplaced separators, short groups, a zero-valued leftmost group —
/// returns `None`.
pub fn strip_grouping(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return Some(token.to_string());
    }

    let mut groups: Vec<&str> = Vec::new();
    let mut rest = token;
    loop {
        let split = rest.find(['.', ' ']);
        match split {
            Some(idx) => {
                groups.push(&rest[..idx]);
                rest = &rest[idx + 1..];
            }
            None => {
                groups.push(rest);
                break;
            }
        }
    }
    if groups.len() < 2 {
        return None;
    }

    let first = groups[0];
    if first.is_empty()
        || first.len() > 3
        || !first.bytes().all(|b| b.is_ascii_digit())
        || first.bytes().all(|b| b == b'0')
    {
        return None;
    }
    for group in &groups[1..] {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    Some(groups.concat())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::lexicon::{Lexicon, NumberTables};

    fn spell(digits: &str) -> String {
        let lex = Lexicon::bundled();
        compose(digits, lex.numbers().unwrap()).unwrap()
    }

    // -----------------------------------------------------------------------
    // Hundreds-component behavior
    // -----------------------------------------------------------------------

    #[test]
    fn test_single_digits() {
        assert_eq!(spell("0"), "μηδέν");
        assert_eq!(spell("1"), "ένα");
        assert_eq!(spell("9"), "εννέα");
    }

    #[test]
    fn test_teens_are_irregular() {
        assert_eq!(spell("10"), "δέκα");
        assert_eq!(spell("11"), "έντεκα");
        assert_eq!(spell("15"), "δεκαπέντε");
        assert_eq!(spell("19"), "δεκαεννέα");
    }

    #[test]
    fn test_decades_and_compounds() {
        assert_eq!(spell("20"), "είκοσι");
        assert_eq!(spell("21"), "είκοσι ένα");
        assert_eq!(spell("99"), "ενενήντα εννέα");
    }

    #[test]
    fn test_hundred_exact_vs_prefix() {
        assert_eq!(spell("100"), "εκατό");
        assert_eq!(spell("101"), "εκατόν ένα");
        assert_eq!(spell("110"), "εκατόν δέκα");
        assert_eq!(spell("123"), "εκατόν είκοσι τρία");
    }

    #[test]
    fn test_hundreds_prefix_elides_double_zero() {
        assert_eq!(spell("200"), "διακόσια");
        assert_eq!(spell("215"), "διακόσια δεκαπέντε");
        assert_eq!(spell("999"), "εννιακόσια ενενήντα εννέα");
    }

    // -----------------------------------------------------------------------
    // Scale words and the exactly-one elision
    // -----------------------------------------------------------------------

    #[test]
    fn test_exactly_one_thousand_is_irregular() {
        assert_eq!(spell("1000"), "χίλια");
    }

    #[test]
    fn test_plural_thousands() {
        assert_eq!(spell("2000"), "δύο χιλιάδες");
        assert_eq!(spell("1234"), "χίλια διακόσια τριάντα τέσσερα");
    }

    #[test]
    fn test_component_not_value_gates_the_irregular_form() {
        // 101000: the thousands group renders εκατόν ένα, not ένα, so the
        // irregular χίλια must NOT fire.
        assert_eq!(spell("101000"), "εκατόν ένα χιλιάδες");
    }

    #[test]
    fn test_exactly_one_at_higher_scales() {
        assert_eq!(spell("1000000"), "ένα εκατομμύριο");
        assert_eq!(spell("1000000000"), "ένα δισεκατομμύριο");
        assert_eq!(spell("1000000000000"), "ένα τρισεκατομμύριο");
    }

    #[test]
    fn test_plural_at_higher_scales() {
        assert_eq!(spell("2000000"), "δύο εκατομμύρια");
        assert_eq!(spell("3000000000"), "τρία δισεκατομμύρια");
    }

    #[test]
    fn test_mixed_scales_skip_zero_groups() {
        assert_eq!(spell("1001000"), "ένα εκατομμύριο χίλια");
        assert_eq!(spell("1000001"), "ένα εκατομμύριο ένα");
        assert_eq!(
            spell("5000000015"),
            "πέντε δισεκατομμύρια δεκαπέντε"
        );
    }

    #[test]
    fn test_widest_accepted_value() {
        let widest = "9".repeat(MAX_DIGITS);
        let spelled = spell(&widest);
        assert!(spelled.starts_with("εννιακόσια ενενήντα εννέα τρισεκατομμύρια"));
    }

    // -----------------------------------------------------------------------
    // Rejection
    // -----------------------------------------------------------------------

    #[test]
    fn test_rejects_malformed_input() {
        let lex = Lexicon::bundled();
        let tables = lex.numbers().unwrap();
        assert!(compose("", tables).is_none());
        assert!(compose("12a", tables).is_none());
        assert!(compose("00", tables).is_none());
        assert!(compose("0123", tables).is_none());
        assert!(compose(&"1".repeat(MAX_DIGITS + 1), tables).is_none());
    }

    // -----------------------------------------------------------------------
    // Grouping punctuation
    // -----------------------------------------------------------------------

    #[test]
    fn test_strip_grouping_period_and_space() {
        assert_eq!(strip_grouping("1.234").unwrap(), "1234");
        assert_eq!(strip_grouping("1.234.567").unwrap(), "1234567");
        assert_eq!(strip_grouping("12 345").unwrap(), "12345");
        assert_eq!(strip_grouping("1234").unwrap(), "1234");
    }

    #[test]
    fn test_strip_grouping_rejects_misplaced_separators() {
        assert!(strip_grouping("1.23").is_none());
        assert!(strip_grouping("1.2345").is_none());
        assert!(strip_grouping("1234.567").is_none());
        assert!(strip_grouping(".123").is_none());
        assert!(strip_grouping("123.").is_none());
        assert!(strip_grouping("0.123").is_none());
    }

    #[test]
    fn test_grouped_and_plain_agree() {
        let lex = Lexicon::bundled();
        let tables = lex.numbers().unwrap();
        for (grouped, plain) in [("1.234", "1234"), ("12 345", "12345"), ("1.234.567", "1234567")]
        {
            let via_grouping = compose(&strip_grouping(grouped).unwrap(), tables).unwrap();
            assert_eq!(via_grouping, compose(plain, tables).unwrap());
        }
    }

    // -----------------------------------------------------------------------
    // Round-trip through the cardinal vocabulary
    // -----------------------------------------------------------------------

    /// Reverse word-sequence → value mapping over the same tables, in the
    /// accumulate-then-scale style of spoken-number parsers.
    fn unspell(words: &str, tables: &NumberTables) -> u64 {
        let mut total: u64 = 0;
        let mut current: u64 = 0;
        for word in words.split(' ') {
            if word == tables.zero {
                continue;
            }
            if let Some(v) = small_value(word, tables) {
                current += v;
                continue;
            }
            let scale = [1_000u64, 1_000_000, 1_000_000_000, 1_000_000_000_000]
                .into_iter()
                .zip(&tables.scales)
                .find(|(_, s)| {
                    word == s.many || s.one.split(' ').next_back() == Some(word) || word == s.one
                });
            if let Some((multiplier, _)) = scale {
                total += current.max(1) * multiplier;
                current = 0;
            } else {
                panic!("unknown word in round-trip: {word}");
            }
        }
        total + current
    }

    fn small_value(word: &str, tables: &NumberTables) -> Option<u64> {
        for d in 1..=9u8 {
            if word == tables.digit_word(d) {
                return Some(u64::from(d));
            }
        }
        for n in 11..=19u8 {
            if word == tables.teen_word(n) {
                return Some(u64::from(n));
            }
        }
        for t in 1..=9u8 {
            if word == tables.decade_word(t) {
                return Some(u64::from(t) * 10);
            }
        }
        if word == tables.hundred_exact() || word == tables.hundred_prefix() {
            return Some(100);
        }
        for h in 2..=9u8 {
            if word == tables.hundreds_word(h) {
                return Some(u64::from(h) * 100);
            }
        }
        None
    }

    #[test]
    fn test_roundtrip_recovers_value() {
        let lex = Lexicon::bundled();
        let tables = lex.numbers().unwrap();

        let mut samples: Vec<u64> = (0..=1200).collect();
        samples.extend([
            1999,
            2024,
            10_001,
            101_000,
            999_999,
            1_000_000,
            2_000_001,
            987_654_321,
            1_000_000_000,
            999_999_999_999_999,
        ]);
        // Deterministic spread over the full domain.
        let mut x: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..500 {
            x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            samples.push(x % 1_000_000_000_000_000);
        }

        for n in samples {
            let words = compose(&n.to_string(), tables).unwrap();
            assert_eq!(unspell(&words, tables), n, "value {n} spelled {words}");
        }
    }
}
