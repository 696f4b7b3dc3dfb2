//! Position tracking and byte-offset conversion for source text
//!
//! Positions are 1-based: the first character of a document is line 1,
//! column 1. Columns count characters rather than bytes so that
//! diagnostics stay meaningful for multi-byte text.

use std::fmt;

/// A line/column position in source text (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The first character of a document
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Provides conversion from byte offsets to line/column positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    /// Create a new SourceLocation from source text
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a 1-based line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self.source[line_start..byte_offset].chars().count() + 1;

        Position::new(line + 1, column)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The source text this table was built from
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("Hello");
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(1), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(4), Position::new(1, 5));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Hello\nworld\ntest");

        // First line
        assert_eq!(loc.byte_to_position(0), Position::new(1, 1));
        assert_eq!(loc.byte_to_position(5), Position::new(1, 6));

        // Second line
        assert_eq!(loc.byte_to_position(6), Position::new(2, 1));
        assert_eq!(loc.byte_to_position(10), Position::new(2, 5));

        // Third line
        assert_eq!(loc.byte_to_position(12), Position::new(3, 1));
        assert_eq!(loc.byte_to_position(15), Position::new(3, 4));
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        let source = "w\u{00f6}rld";
        let loc = SourceLocation::new(source);
        // The o-umlaut occupies two bytes but one column
        assert_eq!(loc.byte_to_position(1), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(3), Position::new(1, 3));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("single").line_count(), 1);
        assert_eq!(SourceLocation::new("line1\nline2").line_count(), 2);
        assert_eq!(SourceLocation::new("line1\nline2\nline3").line_count(), 3);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(5, 10)), "5:10");
        assert_eq!(format!("{}", Position::start()), "1:1");
    }

    #[test]
    fn test_position_comparison() {
        let pos1 = Position::new(1, 5);
        let pos2 = Position::new(1, 5);
        let pos3 = Position::new(2, 3);

        assert_eq!(pos1, pos2);
        assert_ne!(pos1, pos3);
        assert!(pos1 < pos3);
    }
}
