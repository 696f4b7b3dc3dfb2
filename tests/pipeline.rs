//! End-to-end pipeline tests
//!
//! These tests drive the full scan -> parse -> build -> render chain
//! the way the CLI does, checking document-level behavior rather than
//! any single stage.

use rstest::rstest;
use textindex::textindex::ast::Position;
use textindex::textindex::index::render_description_list;
use textindex::textindex::pipeline::index_from_text;

fn render(source: &str) -> String {
    render_description_list(&index_from_text(source).unwrap())
}

#[cfg(test)]
mod document_indexing {
    use super::*;

    #[test]
    fn test_prose_only_document() {
        assert_eq!(
            render("Nothing here is marked for the index."),
            "<p><em>No index entries found.</em></p>"
        );
    }

    #[test]
    fn test_single_directive_tree_shape() {
        let root = index_from_text("{  Walnut  }").unwrap();
        assert_eq!(root.children.len(), 1);
        let entry = &root.children[0];
        assert_eq!(entry.display.as_deref(), Some("Walnut"));
        assert_eq!(entry.occurrences.len(), 1);
        assert_eq!(entry.occurrences[0].reference, 1);
        assert_eq!(entry.occurrences[0].see_also, None);
    }

    #[test]
    fn test_subterm_occurrence_lands_on_child() {
        let root = index_from_text("{Fruit:Apple}").unwrap();
        let fruit = &root.children[0];
        assert!(fruit.occurrences.is_empty());
        assert_eq!(fruit.children[0].occurrences[0].reference, 1);
    }

    #[test]
    fn test_toggle_window_excludes_directives() {
        let root = index_from_text("{^-}{ghost}{^+}{real}").unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].display.as_deref(), Some("real"));
        assert_eq!(root.children[0].occurrences[0].reference, 1);
    }

    #[test]
    fn test_case_variants_merge_into_one_entry() {
        let root = index_from_text("{Apple} then {apple}").unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].display.as_deref(), Some("Apple"));
        let references: Vec<u32> = root.children[0]
            .occurrences
            .iter()
            .map(|occurrence| occurrence.reference)
            .collect();
        assert_eq!(references, vec![1, 2]);
    }

    #[test]
    fn test_entry_order_ignores_document_order() {
        let root = index_from_text("{cherry}{banana}{Apple}").unwrap();
        let displays: Vec<&str> = root
            .children
            .iter()
            .filter_map(|child| child.display.as_deref())
            .collect();
        assert_eq!(displays, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_escaped_markers_never_index() {
        assert_eq!(
            render(r"A literal \{brace\} and a \| bar and a \^ caret."),
            "<p><em>No index entries found.</em></p>"
        );
    }

    #[test]
    fn test_escaped_separator_inside_directive() {
        let root = index_from_text(r"{State\: draft}").unwrap();
        assert_eq!(root.children[0].display.as_deref(), Some("State: draft"));
    }

    #[test]
    fn test_full_document_render() {
        let document = [
            "The {Orchard} holds many trees.",
            "",
            "{Orchard:Apple} rows line the north field, with {Orchard:Pear}",
            "along the wall. Cider making is covered elsewhere",
            "{Cider|Orchard}.",
            "",
            "{^-}This draft aside mentions {Compost} but stays out of the",
            "index.{^+}",
            "",
            "Back to the {Orchard:Apple} rows.",
        ]
        .join("\n");

        assert_eq!(
            render(&document),
            [
                "<dl class='index textindex'>",
                "  <dt>Cider, 4 (see Orchard)</dt>",
                "  <dt>Orchard, 1</dt>",
                "  <dd>",
                "    <dl>",
                "      <dt>Apple, 2, 5</dt>",
                "      <dt>Pear, 3</dt>",
                "    </dl>",
                "  </dd>",
                "</dl>",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let root = index_from_text("{b}{a:x|y}{A}").unwrap();
        assert_eq!(
            render_description_list(&root),
            render_description_list(&root)
        );
    }
}

#[cfg(test)]
mod error_reporting {
    use super::*;

    #[rstest]
    #[case::empty_directive("{}", 1, 1, "Missing primary term")]
    #[case::whitespace_primary("{   }", 1, 1, "Missing primary term")]
    #[case::leading_separator("{:x}", 1, 1, "Missing primary term")]
    #[case::blank_subterm("{a:}", 1, 4, "Blank subterm")]
    #[case::blank_cross_reference("{a|}", 1, 4, "Blank cross-reference")]
    #[case::duplicate_cross_reference("{a|b|c}", 1, 5, "Duplicate cross-reference")]
    #[case::subterm_after_cross_reference("{a|b:c}", 1, 5, "Field separator after cross-reference")]
    #[case::nested_directive("{a{b}", 1, 3, "inside another directive")]
    #[case::toggle_in_directive("{a{^+}b}", 1, 3, "Toggle marker inside a directive")]
    fn test_parse_error_positions(
        #[case] source: &str,
        #[case] line: usize,
        #[case] column: usize,
        #[case] message: &str,
    ) {
        let error = index_from_text(source).unwrap_err();
        assert!(
            error.as_parse().is_some(),
            "expected a parse error for {:?}",
            source
        );
        assert_eq!(error.position(), Position::new(line, column));
        assert!(
            error.to_string().contains(message),
            "missing {:?} in {:?}",
            message,
            error.to_string()
        );
    }

    #[rstest]
    #[case::unterminated("bad {unclosed", 1, 5, "Unterminated directive")]
    #[case::unterminated_multiline("good\n{oops\nmore", 2, 1, "Unterminated directive")]
    #[case::stray_close("all wrong}", 1, 10, "Unescaped '}'")]
    #[case::bad_escape(r"oops \z", 1, 6, "Invalid escape sequence")]
    #[case::bad_toggle("{^*}", 1, 2, "Invalid toggle marker")]
    fn test_lex_error_positions(
        #[case] source: &str,
        #[case] line: usize,
        #[case] column: usize,
        #[case] message: &str,
    ) {
        let error = index_from_text(source).unwrap_err();
        assert!(
            error.as_lex().is_some(),
            "expected a lexical error for {:?}",
            source
        );
        assert_eq!(error.position(), Position::new(line, column));
        assert!(
            error.to_string().contains(message),
            "missing {:?} in {:?}",
            message,
            error.to_string()
        );
    }

    #[test]
    fn test_lex_error_display_includes_source_context() {
        let error = index_from_text("first line fine\nbad } line").unwrap_err();
        insta::assert_snapshot!(error.to_string(), @r"
        Unescaped '}' outside a directive at 2:5
           1 | first line fine
        >>   2 | bad } line
        ");
    }
}

#[cfg(test)]
mod snapshots {
    use super::*;

    #[test]
    fn test_nested_render_snapshot() {
        insta::assert_snapshot!(render("An {Orchard:Apple} and an {Orchard}."), @r"
        <dl class='index textindex'>
          <dt>Orchard, 2</dt>
          <dd>
            <dl>
              <dt>Apple, 1</dt>
            </dl>
          </dd>
        </dl>
        ");
    }

    #[test]
    fn test_empty_index_snapshot() {
        insta::assert_snapshot!(render("no entries"), @"<p><em>No index entries found.</em></p>");
    }
}
