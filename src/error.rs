//! Error types for the normalization pipeline.

/// Top-level error type for the Greek text-normalization crate.
///
/// Grammar no-match is deliberately NOT represented here: a token that no
/// classifier accepts simply falls through to verbatim output. Errors are
/// reserved for broken inputs at the crate boundary — unreadable lexicon
/// data, malformed structured-token text, bad configuration.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Lexicon data directory or table file could not be read.
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// A structured token string violated the `class {{ field: "value" }}` contract.
    #[error("token syntax error: {0}")]
    Token(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, NormalizeError>;
