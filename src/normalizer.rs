//! The normalization pipeline: classify, serialize, verbalize.
//!
//! A [`Normalizer`] owns the lexicon and mode flags and is otherwise
//! stateless: every call is a pure function of its input, so one instance
//! can serve any number of threads by shared reference.
//!
//! Each token passes through two stages. Classification tries every grammar
//! in [`PRIORITY`](crate::taggers::PRIORITY) order and produces the
//! structured intermediate text (`money { ... }`). Verbalization parses
//! that text back and emits spoken words. Tokens nothing matches come back
//! verbatim.

use tracing::debug;

use crate::config::{InputCase, NormalizerConfig};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::taggers::{PRIORITY, TagContext};
use crate::token::TokenSet;
use crate::verbalizers;

/// Two-stage text normalizer for one locale.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Lexicon,
    config: NormalizerConfig,
}

impl Normalizer {
    /// Build a normalizer per `config`, loading the lexicon from the
    /// configured data directory or the bundled tables.
    ///
    /// # Errors
    ///
    /// Returns an error when a configured data directory does not exist.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let lexicon = match &config.lexicon.data_dir {
            Some(dir) => Lexicon::from_dir(dir)?,
            None => Lexicon::bundled(),
        };
        Ok(Self { lexicon, config })
    }

    /// Build a normalizer around an already-loaded lexicon.
    pub fn with_lexicon(lexicon: Lexicon, config: NormalizerConfig) -> Self {
        Self { lexicon, config }
    }

    /// Bundled tables, default configuration.
    pub fn bundled() -> Self {
        Self {
            lexicon: Lexicon::bundled(),
            config: NormalizerConfig::default(),
        }
    }

    /// The lexicon in use.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn context(&self) -> TagContext<'_> {
        TagContext {
            lexicon: &self.lexicon,
            deterministic: self.config.classify.deterministic,
            lower_case_input: self.config.classify.input_case == InputCase::LowerCased,
        }
    }

    /// Classify one token into its structured alternatives.
    ///
    /// Deterministic mode returns at most one set — the first alternative
    /// of the first matching class. Non-deterministic mode returns every
    /// alternative of every matching class, priority order first. An empty
    /// result means no grammar matched.
    pub fn classify(&self, token: &str) -> Vec<TokenSet> {
        let cx = self.context();
        let mut all: Vec<TokenSet> = Vec::new();
        for (class, tag) in PRIORITY {
            let mut sets = tag(token, &cx);
            if sets.is_empty() {
                continue;
            }
            debug!(class = %class, token = %token, alternatives = sets.len(), "classified");
            if self.config.classify.deterministic {
                sets.truncate(1);
                return sets;
            }
            all.append(&mut sets);
        }
        all
    }

    /// Normalize one token to spoken words, or return it verbatim when no
    /// grammar matches.
    ///
    /// The winning classification round-trips through its serialized text
    /// form on the way to the verbalizer, so the stage boundary exercises
    /// the exact `class { field: "value" }` contract on every call.
    pub fn normalize_token(&self, token: &str) -> String {
        let Some(set) = self.classify(token).into_iter().next() else {
            return token.to_string();
        };
        let tagged = set.to_string();
        let spoken = tagged
            .parse::<TokenSet>()
            .ok()
            .as_ref()
            .and_then(verbalizers::verbalize);
        match spoken {
            Some(text) => text,
            None => {
                debug!(token = %token, tagged = %tagged, "verbalization failed; passing through");
                token.to_string()
            }
        }
    }

    /// Normalize a whitespace-separated line token by token.
    ///
    /// This is a convenience for line-oriented harnesses. Real tokenization
    /// (multi-word dates, spaced telephone numbers, sentence segmentation)
    /// belongs to the caller, which can hand complete tokens to
    /// [`normalize_token`](Self::normalize_token) directly.
    pub fn normalize_line(&self, line: &str) -> String {
        let words: Vec<String> = line
            .split_whitespace()
            .map(|token| self.normalize_token(token))
            .collect();
        words.join(" ")
    }
}
