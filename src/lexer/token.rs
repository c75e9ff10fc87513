use serde::{Deserialize, Serialize};

/// A single token from Mathlang source code
///
/// The grammar only defines single-character letters, digits, and symbols;
/// multi-character lexemes are either keywords or opaque string payloads.
/// Tokens therefore carry no position information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Identifier: a single letter, or one of the keywords `let`, `note`, `print`
    Name(String),
    /// Numeric literal: the value of a single digit character
    Number(f64),
    /// Operator character: `=`, `+` or `-`
    Symbol(char),
    /// String payload: quoted text (unquoted), or any lexeme that fits no
    /// other category
    Str(String),
}

/// Keywords recognized as [`Token::Name`] when a lexeme matches exactly
pub const KEYWORDS: [&str; 3] = ["let", "note", "print"];

/// Characters recognized as [`Token::Symbol`]
pub const SYMBOLS: [char; 3] = ['=', '+', '-'];

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Name(name) => write!(f, "{}", name),
            Token::Number(value) => write!(f, "{}", value),
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Str(text) => write!(f, "\"{}\"", text),
        }
    }
}
