//! # Mathlang Tokenizer
//!
//! A lexical tokenizer for **Mathlang**, a small expression-oriented math
//! scripting language built from `let`, `note` and `print` statements over
//! single-letter variables and single-digit numbers.
//!
//! The tokenizer owns a cursor over an immutable source buffer and produces
//! tokens one at a time on demand; a downstream parser pulls tokens until it
//! receives end of stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathlang::{Token, Tokenizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tokenizer = Tokenizer::new("let x = 5");
//! let tokens = tokenizer.tokenize()?;
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Name("let".to_string()),
//!         Token::Name("x".to_string()),
//!         Token::Symbol('='),
//!         Token::Number(5.0),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Pulling Tokens One at a Time
//!
//! ```rust
//! use mathlang::{Token, Tokenizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tokenizer = Tokenizer::new("print \"hi there\"");
//!
//! assert_eq!(tokenizer.next_token()?, Some(Token::Name("print".to_string())));
//! assert_eq!(tokenizer.next_token()?, Some(Token::Str("hi there".to_string())));
//! assert_eq!(tokenizer.next_token()?, None); // end of stream
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Tokenizer → Tokens → (downstream parser)
//! ```
//!
//! The crate covers lexical analysis only. Parsing the token sequence into
//! expressions and evaluating them belong to downstream components.
//!
//! ## Error Handling
//!
//! Malformed input aborts the scan with a [`ScanError`]; there is no
//! partial-token recovery or retry at this layer:
//!
//! ```rust
//! use mathlang::{ScanError, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("print \"unclosed");
//! tokenizer.next_token().unwrap(); // Name("print")
//!
//! match tokenizer.next_token() {
//!     Err(ScanError::UnterminatedString { .. }) => {} // expected
//!     other => panic!("expected scan error, got {:?}", other),
//! }
//! ```

/// Version of the Mathlang tokenizer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Result, ScanError};
pub use lexer::{Token, Tokenizer};
