//! Error types for the Mathlang tokenizer

use thiserror::Error;

/// Errors raised while scanning Mathlang source text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A quoted string was never closed
    ///
    /// **Triggered by:** Input ending before the closing `"` of a string
    /// **Example:** `print "hello` (missing closing quote)
    #[error("Unterminated string literal starting at offset {at}")]
    UnterminatedString {
        /// Character offset of the opening quote
        at: usize,
    },

    /// The scanner needed another character but the input was exhausted
    ///
    /// **Triggered by:** An internal peek past the end of input. The scan
    /// loops guard against this, so hitting it indicates a tokenizer bug
    /// rather than bad input.
    #[error("Unexpected end of input at offset {at}")]
    UnexpectedEof {
        /// Character offset where input ran out
        at: usize,
    },
}

/// Result type for Mathlang tokenizer operations
pub type Result<T> = std::result::Result<T, ScanError>;
