//! Glossify Parser Library
//!
//! Turns a flat glossary source into a term store, and splits definition
//! text into word/separator tokens for the renderer.

pub mod record;
pub mod token;

pub use record::parse;
use thiserror::Error;
pub use token::{next_token, tokens, SeparatorSet, Token, TokenKind, DEFAULT_SEPARATORS};

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A term was defined more than once.
    #[error("duplicate term `{term}` on line {line}")]
    DuplicateTerm { term: String, line: usize },
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;
