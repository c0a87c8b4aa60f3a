//! Configuration types for the normalizer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NormalizeError, Result};

/// Top-level configuration for the normalization pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Lexical data settings.
    pub lexicon: LexiconConfig,
    /// Classification settings.
    pub classify: ClassifyConfig,
}

/// Lexical data configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Directory holding the TSV tables (None = the bundled copy).
    pub data_dir: Option<PathBuf>,
}

/// Classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Single transduction per token when true. When false, ambiguous
    /// tokens keep every reading from every matching class.
    pub deterministic: bool,
    /// Casing expected of input tokens before whitelist lookup.
    pub input_case: InputCase,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            deterministic: true,
            input_case: InputCase::Cased,
        }
    }
}

/// Input casing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCase {
    /// Tokens arrive as written; whitelist lookup is exact.
    #[default]
    Cased,
    /// Whitelist lookup ignores case.
    LowerCased,
}

impl NormalizerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| NormalizeError::Config(e.to_string()))
    }
}
