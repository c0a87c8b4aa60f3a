//! Immutable lexical tables for the Greek grammars.
//!
//! All word data lives in flat TSV files (two or three columns, tab
//! separated, `#` comments ignored). A [`Lexicon`] is built once — either
//! from the copy bundled into the binary or from a data directory on disk —
//! and then only ever borrowed. A missing or incomplete table does not fail
//! startup: it disables the grammars that depend on it, with a warning, and
//! those classifiers simply never match.
//!
//! Table layout under the data directory:
//!
//! ```text
//! number/zero.tsv            0 → μηδέν
//! number/digit.tsv           1–9 → neuter cardinal words
//! number/teens.tsv           11–19 → irregular teen words
//! number/tens.tsv            10–90 → decade words
//! number/hundreds.tsv        100 → εκατό, 1 → εκατόν prefix, 2–9 → prefix words
//! number/scales.tsv          scale → exactly-one form, plural form
//! number/fractions.tsv       special fraction spellings (data only, unwired)
//! number/gender/digit_*.tsv  gendered cardinal digits (data only, unwired)
//! dates/months.tsv           1–12 → genitive month names
//! measures/measurements.tsv  symbol → singular, plural
//! money/currency.tsv         symbol → major unit name
//! money/currency_minor.tsv   symbol → minor unit name
//! time/time_suffix.tsv       written suffix → spoken form
//! whitelist.tsv              verbatim replacements
//! ```

mod table;

use std::path::Path;

use tracing::{info, warn};

use crate::error::{NormalizeError, Result};
use table::{parse_pairs, parse_triples};

/// Words for one power-of-one-thousand scale level.
#[derive(Debug, Clone)]
pub struct ScaleWords {
    /// Irregular form for exactly one of this scale (e.g. χίλια).
    pub one: String,
    /// Generic plural scale word (e.g. χιλιάδες).
    pub many: String,
}

/// The cardinal-number word tables. Present only when every required entry
/// loaded; the numeral composer cannot run on a partial set.
#[derive(Debug, Clone)]
pub struct NumberTables {
    /// The dedicated zero word (μηδέν).
    pub zero: String,
    digit: [String; 9],
    teen: [String; 9],
    decade: [String; 9],
    hundred_exact: String,
    hundred_prefix: String,
    hundreds: [String; 8],
    /// Scale words in ascending order: thousand, million, billion, trillion.
    pub scales: [ScaleWords; 4],
}

impl NumberTables {
    /// Word for a single digit 1–9.
    pub fn digit_word(&self, d: u8) -> &str {
        debug_assert!((1..=9).contains(&d));
        &self.digit[usize::from(d) - 1]
    }

    /// Word for a digit 0–9, using the zero word for 0. Used by the
    /// digit-by-digit readers (telephone, decimal fractions).
    pub fn digit_or_zero(&self, d: u8) -> &str {
        if d == 0 {
            &self.zero
        } else {
            self.digit_word(d)
        }
    }

    /// Irregular teen word for 11–19.
    pub fn teen_word(&self, n: u8) -> &str {
        debug_assert!((11..=19).contains(&n));
        &self.teen[usize::from(n) - 11]
    }

    /// Decade word for tens digit 1–9 (δέκα, είκοσι, …).
    pub fn decade_word(&self, tens: u8) -> &str {
        debug_assert!((1..=9).contains(&tens));
        &self.decade[usize::from(tens) - 1]
    }

    /// Word for exactly 100 standing alone (εκατό).
    pub fn hundred_exact(&self) -> &str {
        &self.hundred_exact
    }

    /// Prefix word for 101–199 (εκατόν).
    pub fn hundred_prefix(&self) -> &str {
        &self.hundred_prefix
    }

    /// Prefix word for hundreds 200–900, hundreds digit 2–9.
    pub fn hundreds_word(&self, h: u8) -> &str {
        debug_assert!((2..=9).contains(&h));
        &self.hundreds[usize::from(h) - 2]
    }
}

/// Gendered cardinal digit words. Loaded as data but not wired into the
/// default composition path, which always renders neuter; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct GenderDigits {
    /// Masculine digit words 1–9 (ένας, δύο, τρεις, …).
    pub masc: [String; 9],
    /// Feminine digit words 1–9 (μία, δύο, τρεις, …).
    pub fem: [String; 9],
    /// Neuter digit words 1–9 (ένα, δύο, τρία, …).
    pub neut: [String; 9],
}

/// A measurement unit: written symbol plus singular and plural spoken forms.
#[derive(Debug, Clone)]
pub struct UnitEntry {
    /// Written symbol, e.g. `km`, `%`, `°C`.
    pub symbol: String,
    /// Spoken form for exactly one (χιλιόμετρο).
    pub singular: String,
    /// Spoken form otherwise (χιλιόμετρα).
    pub plural: String,
}

/// A currency: symbol plus major and (optional) minor unit names.
#[derive(Debug, Clone)]
pub struct CurrencyEntry {
    /// Currency symbol, e.g. `€`.
    pub symbol: String,
    /// Major unit name (ευρώ).
    pub major: String,
    /// Minor unit name (λεπτά); currencies without one get no cents reading.
    pub minor: Option<String>,
}

/// Process-wide immutable word data. Built once, shared by reference.
#[derive(Debug, Clone)]
pub struct Lexicon {
    numbers: Option<NumberTables>,
    gender_digits: Option<GenderDigits>,
    months: Option<Vec<String>>,
    measures: Vec<UnitEntry>,
    currencies: Vec<CurrencyEntry>,
    time_suffixes: Vec<(String, String)>,
    whitelist: Vec<(String, String)>,
    special_fractions: Vec<(String, String)>,
}

impl Lexicon {
    /// Build the lexicon from the TSV data compiled into the binary.
    pub fn bundled() -> Self {
        assemble(|path| Some(bundled_table(path)?.to_string()))
    }

    /// Build the lexicon from a data directory on disk.
    ///
    /// Missing or unreadable individual tables disable their feature with a
    /// warning; only a missing directory is an error.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Lexicon`] if `dir` does not exist.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(NormalizeError::Lexicon(format!(
                "data directory not found: {}",
                dir.display()
            )));
        }
        info!(dir = %dir.display(), "loading lexicon");
        Ok(assemble(|path| {
            let full = dir.join(path);
            match std::fs::read_to_string(&full) {
                Ok(text) => Some(text),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    warn!(path = %full.display(), error = %e, "failed to read table");
                    None
                }
            }
        }))
    }

    /// Cardinal-number tables, if the complete set loaded.
    pub fn numbers(&self) -> Option<&NumberTables> {
        self.numbers.as_ref()
    }

    /// Genitive month names, January first, if the table loaded.
    pub fn months(&self) -> Option<&[String]> {
        self.months.as_deref()
    }

    /// Measurement units (empty when the table is absent).
    pub fn measures(&self) -> &[UnitEntry] {
        &self.measures
    }

    /// Currencies (empty when the table is absent).
    pub fn currencies(&self) -> &[CurrencyEntry] {
        &self.currencies
    }

    /// Time suffixes such as π.μ. (empty when the table is absent).
    pub fn time_suffixes(&self) -> &[(String, String)] {
        &self.time_suffixes
    }

    /// Verbatim whitelist replacements (empty when the table is absent).
    pub fn whitelist(&self) -> &[(String, String)] {
        &self.whitelist
    }

    /// Special fraction spellings (μισό, τέταρτο). Loaded but not wired
    /// into the default fraction grammar; see [`Self::has_special_fractions`].
    pub fn special_fractions(&self) -> &[(String, String)] {
        &self.special_fractions
    }

    /// Whether gendered cardinal digit tables are available. The default
    /// composition path always renders neuter regardless; this flag only
    /// reports that the data is present.
    pub fn has_gender_cardinals(&self) -> bool {
        self.gender_digits.is_some()
    }

    /// Gendered cardinal digit words, if loaded.
    pub fn gender_digits(&self) -> Option<&GenderDigits> {
        self.gender_digits.as_ref()
    }

    /// Whether special-fraction data is available (it is never consulted by
    /// the default fraction grammar).
    pub fn has_special_fractions(&self) -> bool {
        !self.special_fractions.is_empty()
    }
}

/// Relative table paths → bundled contents.
fn bundled_table(path: &str) -> Option<&'static str> {
    Some(match path {
        "number/zero.tsv" => include_str!("../../data/number/zero.tsv"),
        "number/digit.tsv" => include_str!("../../data/number/digit.tsv"),
        "number/teens.tsv" => include_str!("../../data/number/teens.tsv"),
        "number/tens.tsv" => include_str!("../../data/number/tens.tsv"),
        "number/hundreds.tsv" => include_str!("../../data/number/hundreds.tsv"),
        "number/scales.tsv" => include_str!("../../data/number/scales.tsv"),
        "number/fractions.tsv" => include_str!("../../data/number/fractions.tsv"),
        "number/gender/digit_masc.tsv" => {
            include_str!("../../data/number/gender/digit_masc.tsv")
        }
        "number/gender/digit_fem.tsv" => include_str!("../../data/number/gender/digit_fem.tsv"),
        "number/gender/digit_neut.tsv" => {
            include_str!("../../data/number/gender/digit_neut.tsv")
        }
        "dates/months.tsv" => include_str!("../../data/dates/months.tsv"),
        "measures/measurements.tsv" => include_str!("../../data/measures/measurements.tsv"),
        "money/currency.tsv" => include_str!("../../data/money/currency.tsv"),
        "money/currency_minor.tsv" => include_str!("../../data/money/currency_minor.tsv"),
        "time/time_suffix.tsv" => include_str!("../../data/time/time_suffix.tsv"),
        "whitelist.tsv" => include_str!("../../data/whitelist.tsv"),
        _ => return None,
    })
}

/// Build a [`Lexicon`] by fetching each table through `fetch` (bundled
/// strings or disk reads) and validating required entries per feature.
fn assemble(fetch: impl Fn(&str) -> Option<String>) -> Lexicon {
    let pairs = |path: &str| fetch(path).map(|text| parse_pairs(&text));
    let triples = |path: &str| fetch(path).map(|text| parse_triples(&text));

    let numbers = load_numbers(&pairs, &triples);
    if numbers.is_none() {
        warn!("number tables incomplete; numeric grammars disabled");
    }

    let gender_digits = load_gender_digits(&pairs);

    let months = pairs("dates/months.tsv").and_then(|rows| {
        let mut out = Vec::with_capacity(12);
        for m in 1..=12u8 {
            out.push(lookup(&rows, &m.to_string())?.to_string());
        }
        Some(out)
    });
    if months.is_none() {
        warn!("month table incomplete; date grammar disabled");
    }

    let measures = triples("measures/measurements.tsv")
        .unwrap_or_default()
        .into_iter()
        .map(|(symbol, singular, plural)| UnitEntry {
            symbol,
            singular,
            plural,
        })
        .collect();

    let minor_rows = pairs("money/currency_minor.tsv").unwrap_or_default();
    let currencies = pairs("money/currency.tsv")
        .unwrap_or_default()
        .into_iter()
        .map(|(symbol, major)| {
            let minor = lookup(&minor_rows, &symbol).map(str::to_string);
            CurrencyEntry {
                symbol,
                major,
                minor,
            }
        })
        .collect();

    Lexicon {
        numbers,
        gender_digits,
        months,
        measures,
        currencies,
        time_suffixes: pairs("time/time_suffix.tsv").unwrap_or_default(),
        whitelist: pairs("whitelist.tsv").unwrap_or_default(),
        special_fractions: pairs("number/fractions.tsv").unwrap_or_default(),
    }
}

fn load_numbers(
    pairs: &impl Fn(&str) -> Option<Vec<(String, String)>>,
    triples: &impl Fn(&str) -> Option<Vec<(String, String, String)>>,
) -> Option<NumberTables> {
    let zero_rows = pairs("number/zero.tsv")?;
    let digit_rows = pairs("number/digit.tsv")?;
    let teen_rows = pairs("number/teens.tsv")?;
    let decade_rows = pairs("number/tens.tsv")?;
    let hundred_rows = pairs("number/hundreds.tsv")?;
    let scale_rows = triples("number/scales.tsv")?;

    let zero = lookup(&zero_rows, "0")?.to_string();
    let digit = array_for(&digit_rows, |i| (i + 1).to_string())?;
    let teen = array_for(&teen_rows, |i| (i + 11).to_string())?;
    let decade = array_for(&decade_rows, |i| ((i + 1) * 10).to_string())?;
    let hundred_exact = lookup(&hundred_rows, "100")?.to_string();
    let hundred_prefix = lookup(&hundred_rows, "1")?.to_string();
    let hundreds: [String; 8] = {
        let mut out: Vec<String> = Vec::with_capacity(8);
        for h in 2..=9u8 {
            out.push(lookup(&hundred_rows, &h.to_string())?.to_string());
        }
        out.try_into().ok()?
    };

    let mut scales: Vec<ScaleWords> = Vec::with_capacity(4);
    for key in ["thousand", "million", "billion", "trillion"] {
        let (_, one, many) = scale_rows.iter().find(|(k, _, _)| k == key)?;
        scales.push(ScaleWords {
            one: one.clone(),
            many: many.clone(),
        });
    }

    Some(NumberTables {
        zero,
        digit,
        teen,
        decade,
        hundred_exact,
        hundred_prefix,
        hundreds,
        scales: scales.try_into().ok()?,
    })
}

fn load_gender_digits(
    pairs: &impl Fn(&str) -> Option<Vec<(String, String)>>,
) -> Option<GenderDigits> {
    let digits = |path: &str| -> Option<[String; 9]> {
        let rows = pairs(path)?;
        array_for(&rows, |i| (i + 1).to_string())
    };
    Some(GenderDigits {
        masc: digits("number/gender/digit_masc.tsv")?,
        fem: digits("number/gender/digit_fem.tsv")?,
        neut: digits("number/gender/digit_neut.tsv")?,
    })
}

fn lookup<'a>(rows: &'a [(String, String)], key: &str) -> Option<&'a str> {
    rows.iter()
        .find_map(|(k, v)| (k == key).then_some(v.as_str()))
}

/// Collect nine consecutive entries keyed by `key_for(0..9)`; `None` if any
/// is missing, which disables the owning feature.
fn array_for(rows: &[(String, String)], key_for: impl Fn(usize) -> String) -> Option<[String; 9]> {
    let mut out: Vec<String> = Vec::with_capacity(9);
    for i in 0..9 {
        out.push(lookup(rows, &key_for(i))?.to_string());
    }
    out.try_into().ok()
}
