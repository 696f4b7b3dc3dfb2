//! Error types for scanning and parsing index markup

use super::position::Position;
use std::fmt;

/// Errors reported by the scanner while tokenizing source text
#[derive(Debug, Clone)]
pub enum LexError {
    /// A directive was opened but never closed before end of input
    UnterminatedDirective { position: Position, snippet: String },
    /// A structural marker appeared in prose without an escape
    UnescapedMarker {
        marker: char,
        position: Position,
        snippet: String,
    },
    /// A backslash not followed by an escapable character
    InvalidEscape { position: Position, snippet: String },
    /// A directive starting with `^` that is not one of the toggle forms
    InvalidToggle { position: Position, snippet: String },
}

impl LexError {
    /// Position of the offending input
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedDirective { position, .. }
            | LexError::UnescapedMarker { position, .. }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidToggle { position, .. } => *position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedDirective { position, snippet } => {
                writeln!(f, "Unterminated directive at {}", position)?;
                write!(f, "{}", snippet)
            }
            LexError::UnescapedMarker {
                marker,
                position,
                snippet,
            } => {
                writeln!(f, "Unescaped '{}' outside a directive at {}", marker, position)?;
                write!(f, "{}", snippet)
            }
            LexError::InvalidEscape { position, snippet } => {
                writeln!(f, "Invalid escape sequence at {}", position)?;
                write!(f, "{}", snippet)
            }
            LexError::InvalidToggle { position, snippet } => {
                writeln!(
                    f,
                    "Invalid toggle marker at {} (expected '{{^+}}' or '{{^-}}')",
                    position
                )?;
                write!(f, "{}", snippet)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors reported by the parser while assembling directives
#[derive(Debug, Clone)]
pub enum ParseError {
    /// A directive closed without a usable primary term
    MissingPrimary { position: Position },
    /// A field separator or close delimited an empty subterm
    BlankSubterm { position: Position },
    /// The cross-reference field was empty
    BlankCrossReference { position: Position },
    /// More than one cross-reference marker in a single directive
    DuplicateCrossReference { position: Position },
    /// A field separator after the cross-reference field
    SubtermAfterCrossReference { position: Position },
    /// A directive opened while another was still open
    NestedDirective { position: Position },
    /// A toggle marker inside a directive body
    ToggleInDirective { position: Position },
    /// The token stream ended while a directive was open
    UnexpectedEnd { position: Position },
    /// A token that cannot appear outside a directive
    UnexpectedToken {
        found: &'static str,
        position: Position,
    },
}

impl ParseError {
    /// Position of the offending input
    pub fn position(&self) -> Position {
        match self {
            ParseError::MissingPrimary { position }
            | ParseError::BlankSubterm { position }
            | ParseError::BlankCrossReference { position }
            | ParseError::DuplicateCrossReference { position }
            | ParseError::SubtermAfterCrossReference { position }
            | ParseError::NestedDirective { position }
            | ParseError::ToggleInDirective { position }
            | ParseError::UnexpectedEnd { position }
            | ParseError::UnexpectedToken { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingPrimary { position } => {
                write!(f, "Missing primary term in directive at {}", position)
            }
            ParseError::BlankSubterm { position } => {
                write!(f, "Blank subterm in directive at {}", position)
            }
            ParseError::BlankCrossReference { position } => {
                write!(f, "Blank cross-reference in directive at {}", position)
            }
            ParseError::DuplicateCrossReference { position } => {
                write!(f, "Duplicate cross-reference marker at {}", position)
            }
            ParseError::SubtermAfterCrossReference { position } => {
                write!(f, "Field separator after cross-reference at {}", position)
            }
            ParseError::NestedDirective { position } => {
                write!(f, "Directive opened inside another directive at {}", position)
            }
            ParseError::ToggleInDirective { position } => {
                write!(f, "Toggle marker inside a directive at {}", position)
            }
            ParseError::UnexpectedEnd { position } => {
                write!(f, "Unexpected end of input in directive opened at {}", position)
            }
            ParseError::UnexpectedToken { found, position } => {
                write!(f, "Unexpected {} outside a directive at {}", found, position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Any error the processing pipeline can produce
#[derive(Debug, Clone)]
pub enum IndexError {
    Lex(LexError),
    Parse(ParseError),
}

impl IndexError {
    /// Position of the offending input
    pub fn position(&self) -> Position {
        match self {
            IndexError::Lex(e) => e.position(),
            IndexError::Parse(e) => e.position(),
        }
    }

    pub fn as_lex(&self) -> Option<&LexError> {
        if let IndexError::Lex(e) = self {
            Some(e)
        } else {
            None
        }
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        if let IndexError::Parse(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Lex(e) => write!(f, "{}", e),
            IndexError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Lex(e) => Some(e),
            IndexError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for IndexError {
    fn from(e: LexError) -> Self {
        IndexError::Lex(e)
    }
}

impl From<ParseError> for IndexError {
    fn from(e: ParseError) -> Self {
        IndexError::Parse(e)
    }
}

/// Format source code context around an error location
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, position: Position) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = position.line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        let display_line_num = line_num + 1;

        if line_num < lines.len() {
            context.push_str(&format!(
                "{} {:3} | {}\n",
                marker, display_line_num, lines[line_num]
            ));
        }
    }

    context
}
