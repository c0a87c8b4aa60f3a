//! Ordinal formation with gender agreement.
//!
//! Greek ordinals inflect for gender: πρώτος / πρώτη / πρώτο. Each ordinal
//! word is a stem plus a gender suffix, and multi-word ordinals carry the
//! suffix on every word. The stems follow the same decomposition as the
//! cardinal tables: unit stems for 1–9, decade stems for the multiples of
//! ten, a dedicated stem for 100, and irregular stems for 11 and 12. The
//! teens 13–19 are lexical two-word compounds (δέκατος τρίτος) — ordinal
//! teens are not productive from decade + unit the way 21–99 are.

/// Morphological gender of an ordinal (or gendered cardinal) word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// -ος ending.
    Masculine,
    /// -η ending.
    Feminine,
    /// -ο ending.
    Neuter,
}

impl Gender {
    /// The ordinal word ending for this gender.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Masculine => "ος",
            Self::Feminine => "η",
            Self::Neuter => "ο",
        }
    }

    /// Tag used in the `morphosyntactic_features` field.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Masculine => "masc",
            Self::Feminine => "fem",
            Self::Neuter => "neut",
        }
    }

    /// All genders, in the order variants are generated.
    pub const ALL: [Self; 3] = [Self::Masculine, Self::Feminine, Self::Neuter];
}

/// Ordinal stems for units 1–9.
const UNIT_STEMS: [&str; 9] = [
    "πρώτ", "δεύτερ", "τρίτ", "τέταρτ", "πέμπτ", "έκτ", "έβδομ", "όγδο", "ένατ",
];

/// Ordinal stems for the decades 10–90.
const DECADE_STEMS: [&str; 9] = [
    "δέκατ",
    "εικοστ",
    "τριακοστ",
    "τεσσαρακοστ",
    "πεντηκοστ",
    "εξηκοστ",
    "εβδομηκοστ",
    "ογδοηκοστ",
    "ενενηκοστ",
];

const HUNDRED_STEM: &str = "εκατοστ";
const ELEVEN_STEM: &str = "ενδέκατ";
const TWELVE_STEM: &str = "δωδέκατ";

/// Form the ordinal word for a digit string in the requested gender.
///
/// Accepts 1–2 digit strings for 1–99 plus the irregular top case `"100"`.
/// Leading zeros, zero itself and anything wider return `None` — ordinal
/// formation is a classification step and malformed input is a no-match.
pub fn form(digits: &str, gender: Gender) -> Option<String> {
    if digits == "100" {
        return Some(format!("{HUNDRED_STEM}{}", gender.suffix()));
    }
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.starts_with('0') {
        return None;
    }

    let suffix = gender.suffix();
    let bytes = digits.as_bytes();
    if bytes.len() == 1 {
        let u = usize::from(bytes[0] - b'0');
        return Some(format!("{}{suffix}", UNIT_STEMS[u - 1]));
    }

    let t = usize::from(bytes[0] - b'0');
    let u = usize::from(bytes[1] - b'0');
    let word = match (t, u) {
        (_, 0) => format!("{}{suffix}", DECADE_STEMS[t - 1]),
        (1, 1) => format!("{ELEVEN_STEM}{suffix}"),
        (1, 2) => format!("{TWELVE_STEM}{suffix}"),
        // Teens 13–19: the compound is lexical, but both words still agree.
        (1, _) => format!("{}{suffix} {}{suffix}", DECADE_STEMS[0], UNIT_STEMS[u - 1]),
        (_, _) => format!(
            "{}{suffix} {}{suffix}",
            DECADE_STEMS[t - 1],
            UNIT_STEMS[u - 1]
        ),
    };
    Some(word)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_units_by_gender() {
        assert_eq!(form("1", Gender::Masculine).unwrap(), "πρώτος");
        assert_eq!(form("1", Gender::Feminine).unwrap(), "πρώτη");
        assert_eq!(form("1", Gender::Neuter).unwrap(), "πρώτο");
        assert_eq!(form("8", Gender::Masculine).unwrap(), "όγδοος");
    }

    #[test]
    fn test_ten_and_irregular_teens() {
        assert_eq!(form("10", Gender::Masculine).unwrap(), "δέκατος");
        assert_eq!(form("11", Gender::Feminine).unwrap(), "ενδέκατη");
        assert_eq!(form("12", Gender::Neuter).unwrap(), "δωδέκατο");
    }

    #[test]
    fn test_compound_teens_agree_on_both_words() {
        assert_eq!(form("13", Gender::Masculine).unwrap(), "δέκατος τρίτος");
        assert_eq!(form("13", Gender::Feminine).unwrap(), "δέκατη τρίτη");
        assert_eq!(form("13", Gender::Neuter).unwrap(), "δέκατο τρίτο");
        assert_eq!(form("19", Gender::Masculine).unwrap(), "δέκατος ένατος");
    }

    #[test]
    fn test_decades() {
        assert_eq!(form("20", Gender::Masculine).unwrap(), "εικοστος");
        assert_eq!(form("30", Gender::Neuter).unwrap(), "τριακοστο");
        assert_eq!(form("90", Gender::Feminine).unwrap(), "ενενηκοστη");
    }

    #[test]
    fn test_productive_compounds() {
        assert_eq!(form("21", Gender::Masculine).unwrap(), "εικοστος πρώτος");
        assert_eq!(form("45", Gender::Neuter).unwrap(), "τεσσαρακοστο πέμπτο");
    }

    #[test]
    fn test_hundred_top_case() {
        assert_eq!(form("100", Gender::Masculine).unwrap(), "εκατοστος");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(form("0", Gender::Masculine).is_none());
        assert!(form("01", Gender::Masculine).is_none());
        assert!(form("101", Gender::Masculine).is_none());
        assert!(form("", Gender::Masculine).is_none());
        assert!(form("1a", Gender::Masculine).is_none());
    }

    #[test]
    fn test_gender_variants_never_collide() {
        for n in 1..=99u8 {
            let digits = n.to_string();
            let masc = form(&digits, Gender::Masculine).unwrap();
            let fem = form(&digits, Gender::Feminine).unwrap();
            let neut = form(&digits, Gender::Neuter).unwrap();
            assert_ne!(masc, fem, "collision at {n}");
            assert_ne!(masc, neut, "collision at {n}");
            assert_ne!(fem, neut, "collision at {n}");
        }
    }
}
