//! End-to-end document processing
//!
//! Chains the scanner, parser, and index builder into the single entry
//! point the CLI uses. The caller supplies the document text and owns
//! every I/O decision; nothing here touches the filesystem.

use crate::textindex::ast::IndexError;
use crate::textindex::index::{IndexBuilder, RenderedNode};
use crate::textindex::lexer::scan;
use crate::textindex::parser::parse;

/// Build the rendered index tree for a whole document
pub fn index_from_text(text: &str) -> Result<RenderedNode, IndexError> {
    let nodes = parse(scan(text))?;
    Ok(IndexBuilder::build(&nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textindex::ast::Position;

    #[test]
    fn test_document_to_tree() {
        let root = index_from_text("Plant an {Apple} tree in the {Orchard:corner}.").unwrap();
        assert_eq!(root.term_count(), 3);
        assert_eq!(root.children[0].display.as_deref(), Some("Apple"));
        assert_eq!(root.children[1].display.as_deref(), Some("Orchard"));
    }

    #[test]
    fn test_markerless_document_is_an_empty_index() {
        let root = index_from_text("nothing of note").unwrap();
        assert!(root.is_empty());
    }

    #[test]
    fn test_lex_error_carries_position() {
        let error = index_from_text("broken {entry").unwrap_err();
        assert!(error.as_lex().is_some());
        assert_eq!(error.position(), Position::new(1, 8));
    }

    #[test]
    fn test_parse_error_carries_position() {
        let error = index_from_text("line one\n{}").unwrap_err();
        assert!(error.as_parse().is_some());
        assert_eq!(error.position(), Position::new(2, 1));
    }
}
