//! Glossa: Greek (el) text normalization for speech synthesis.
//!
//! Converts written numeric and semi-structured tokens — cardinals, dates,
//! decimals, money, measures, fractions, ordinals, times, telephone
//! numbers, electronic addresses — into fully spelled-out spoken Greek.
//!
//! # Architecture
//!
//! Normalization is a two-stage pipeline over immutable word tables:
//!
//! - **Classification**: per-class grammars ([`taggers`]) match a written
//!   token and emit a field-labeled intermediate string such as
//!   `money { currency: "ευρώ" integer_part: "δέκα" }`
//! - **Verbalization**: inverse grammars ([`verbalizers`]) strip the labels
//!   and join the values with locale connectors (και, κόμμα, προς)
//!
//! Both stages spell numbers through the [`numeral`] core: the cardinal
//! composer (3-digit group decomposition with scale words and the
//! irregular exactly-one forms) and the gendered ordinal former.
//!
//! The [`Lexicon`] is loaded once — bundled or from TSV files — and shared
//! by reference; the whole pipeline is pure and freely concurrent.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod numeral;
pub mod taggers;
pub mod token;
pub mod verbalizers;

pub use config::{InputCase, NormalizerConfig};
pub use error::{NormalizeError, Result};
pub use lexicon::Lexicon;
pub use normalizer::Normalizer;
pub use token::{FieldValue, TaggedField, TokenSet};
