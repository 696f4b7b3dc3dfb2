//! Lexer for the inline index markup dialect
//!
//! Splits source text into TEXT runs, directive delimiters, field
//! separators, and capture toggles.
//!
//! ## Modules
//!
//! - [`tokens`] - Raw token alphabet and the public token type
//! - [`scanner`] - Lazy scanner with directive-aware separator handling

pub mod scanner;
pub mod tokens;

pub use scanner::{scan, Scanner};
pub use tokens::{Token, TokenKind};
