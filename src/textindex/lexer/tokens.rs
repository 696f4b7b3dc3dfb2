//! Token definitions for the index markup dialect
//!
//! This module defines the raw surface alphabet recognized by logos and
//! the position-carrying tokens the scanner hands to the parser. The
//! toggle forms are whole tokens so that `{^+}` never decomposes into a
//! directive open followed by text.

use crate::textindex::ast::Position;
use logos::Logos;

/// Raw lexemes recognized directly in the source text
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    #[token("{^+}")]
    ToggleOn,

    #[token("{^-}")]
    ToggleOff,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token(":")]
    Colon,

    #[token("|")]
    Pipe,

    // A backslash escape carries its literal character as the payload
    #[regex(r"\\[{}:|^\\]", |lex| lex.slice().chars().nth(1))]
    Escaped(char),

    // A backslash that does not begin a valid escape
    #[token("\\")]
    Backslash,

    // Literal text (catch-all for non-marker characters)
    #[regex(r"[^{}:|\\]+")]
    Chunk,
}

/// The kinds of token the scanner produces
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A maximal run of literal text, escapes already applied
    Text(String),
    DirectiveOpen,
    DirectiveClose,
    FieldSep,
    SeeSep,
    ToggleOn,
    ToggleOff,
}

/// A token with the position of its first character
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Check if this token is a literal text run
    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text(_))
    }

    /// Check if this token is one of the capture toggles
    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, TokenKind::ToggleOn | TokenKind::ToggleOff)
    }

    pub fn as_text(&self) -> Option<&str> {
        if let TokenKind::Text(content) = &self.kind {
            Some(content)
        } else {
            None
        }
    }
}
