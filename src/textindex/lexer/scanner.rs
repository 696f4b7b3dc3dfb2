//! Scanner producing position-carrying tokens from source text
//!
//! The scanner wraps the raw logos lexer with the directive-awareness the
//! token stream needs: literal pieces merge into maximal TEXT runs with
//! escapes applied, `:` and `|` act as separators only inside a directive
//! and fold into the surrounding text otherwise, and the four lexical
//! errors are reported at the first offending character. Tokens are
//! produced lazily; after an error the stream ends.

use crate::textindex::ast::{format_source_context, LexError, Position, SourceLocation};
use crate::textindex::lexer::tokens::{RawToken, Token, TokenKind};
use logos::Logos;

/// A lazy token stream over source text
pub struct Scanner<'a> {
    raw: logos::Lexer<'a, RawToken>,
    location: SourceLocation<'a>,
    in_directive: bool,
    /// Byte offset of the unclosed `{`, for unterminated reporting
    open_offset: Option<usize>,
    /// Whether the next chunk would begin a directive's first field
    at_field_start: bool,
    text_buf: String,
    text_start: usize,
    pending: Option<Token>,
    failed: bool,
}

/// Scan source text into a stream of tokens
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            raw: RawToken::lexer(source),
            location: SourceLocation::new(source),
            in_directive: false,
            open_offset: None,
            at_field_start: false,
            text_buf: String::new(),
            text_start: 0,
            pending: None,
            failed: false,
        }
    }

    fn position_at(&self, offset: usize) -> Position {
        self.location.byte_to_position(offset)
    }

    fn context(&self, position: Position) -> String {
        format_source_context(self.location.source(), position)
    }

    fn push_text(&mut self, offset: usize, piece: &str) {
        if self.text_buf.is_empty() {
            self.text_start = offset;
        }
        self.text_buf.push_str(piece);
    }

    fn push_char(&mut self, offset: usize, ch: char) {
        if self.text_buf.is_empty() {
            self.text_start = offset;
        }
        self.text_buf.push(ch);
    }

    /// Drain the buffered text run into a TEXT token, if any
    fn take_text(&mut self) -> Option<Token> {
        if self.text_buf.is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.text_buf);
        let position = self.position_at(self.text_start);
        Some(Token::new(TokenKind::Text(content), position))
    }

    /// Emit a structural token, flushing any buffered text run before it
    fn emit(&mut self, kind: TokenKind, offset: usize) -> Option<Result<Token, LexError>> {
        let token = Token::new(kind, self.position_at(offset));
        match self.take_text() {
            Some(text) => {
                self.pending = Some(token);
                Some(Ok(text))
            }
            None => Some(Ok(token)),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }

        loop {
            let raw = match self.raw.next() {
                Some(raw) => raw,
                None => {
                    if let Some(open) = self.open_offset.take() {
                        self.failed = true;
                        let position = self.position_at(open);
                        return Some(Err(LexError::UnterminatedDirective {
                            position,
                            snippet: self.context(position),
                        }));
                    }
                    return self.take_text().map(Ok);
                }
            };
            let span = self.raw.span();

            match raw {
                Ok(RawToken::Chunk) => {
                    let piece = self.raw.slice();
                    if self.in_directive
                        && self.at_field_start
                        && piece.trim_start().starts_with('^')
                    {
                        self.failed = true;
                        let position = self.position_at(span.start);
                        return Some(Err(LexError::InvalidToggle {
                            position,
                            snippet: self.context(position),
                        }));
                    }
                    self.at_field_start = false;
                    self.push_text(span.start, piece);
                }
                Ok(RawToken::Escaped(ch)) => {
                    self.at_field_start = false;
                    self.push_char(span.start, ch);
                }
                Ok(RawToken::Backslash) => {
                    self.failed = true;
                    let position = self.position_at(span.start);
                    return Some(Err(LexError::InvalidEscape {
                        position,
                        snippet: self.context(position),
                    }));
                }
                Ok(RawToken::Colon) => {
                    if self.in_directive {
                        self.at_field_start = false;
                        return self.emit(TokenKind::FieldSep, span.start);
                    }
                    self.push_char(span.start, ':');
                }
                Ok(RawToken::Pipe) => {
                    if self.in_directive {
                        self.at_field_start = false;
                        return self.emit(TokenKind::SeeSep, span.start);
                    }
                    self.push_char(span.start, '|');
                }
                Ok(RawToken::OpenBrace) => {
                    if !self.in_directive {
                        self.in_directive = true;
                        self.open_offset = Some(span.start);
                        self.at_field_start = true;
                    }
                    return self.emit(TokenKind::DirectiveOpen, span.start);
                }
                Ok(RawToken::CloseBrace) => {
                    if !self.in_directive {
                        self.failed = true;
                        let position = self.position_at(span.start);
                        return Some(Err(LexError::UnescapedMarker {
                            marker: '}',
                            position,
                            snippet: self.context(position),
                        }));
                    }
                    self.in_directive = false;
                    self.open_offset = None;
                    self.at_field_start = false;
                    return self.emit(TokenKind::DirectiveClose, span.start);
                }
                Ok(RawToken::ToggleOn) => return self.emit(TokenKind::ToggleOn, span.start),
                Ok(RawToken::ToggleOff) => return self.emit(TokenKind::ToggleOff, span.start),
                Err(()) => unreachable!("the raw token alphabet covers every input"),
            }
        }
    }
}
