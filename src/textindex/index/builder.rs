//! Index aggregation over a parsed node sequence
//!
//! The builder walks nodes in document order, numbering captured
//! directives and merging headings into a term tree. Merging is
//! case-insensitive at every level; the first spelling seen fixes the
//! display casing for an entry. Aggregation never fails.

use crate::textindex::ast::{IndexDirective, Node};
use crate::textindex::index::render::RenderedNode;
use serde::Serialize;
use std::collections::BTreeMap;

/// One captured reference to a term, numbered in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub reference: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_also: Option<String>,
}

impl Occurrence {
    pub fn new(reference: u32) -> Self {
        Self {
            reference,
            see_also: None,
        }
    }

    pub fn with_see_also(mut self, target: String) -> Self {
        self.see_also = Some(target);
        self
    }
}

/// A term at one level of the tree, keyed by its sort key
#[derive(Debug)]
struct TermEntry {
    display: String,
    occurrences: Vec<Occurrence>,
    children: BTreeMap<String, TermEntry>,
}

impl TermEntry {
    fn new(display: &str) -> Self {
        Self {
            display: display.to_string(),
            occurrences: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    fn into_rendered(self) -> RenderedNode {
        let mut node = RenderedNode::entry(self.display);
        node.occurrences = self.occurrences;
        for child in self.children.into_values() {
            node.children.push(child.into_rendered());
        }
        node
    }
}

/// Case-folded, trimmed merge key for a heading field
fn sort_key(field: &str) -> String {
    field.trim().to_lowercase()
}

/// Descend the heading path, creating entries as needed, and attach the
/// occurrence to the deepest entry
fn insert_occurrence(
    level: &mut BTreeMap<String, TermEntry>,
    field: &str,
    rest: &[String],
    occurrence: Occurrence,
) {
    let entry = level
        .entry(sort_key(field))
        .or_insert_with(|| TermEntry::new(field.trim()));
    match rest.split_first() {
        Some((next, tail)) => insert_occurrence(&mut entry.children, next, tail, occurrence),
        None => entry.occurrences.push(occurrence),
    }
}

/// Aggregates index directives into a sorted term tree
///
/// Capture starts enabled; toggle directives switch it off and on.
/// Suppressed directives advance nothing, so occurrence numbering only
/// counts what the index keeps.
#[derive(Debug)]
pub struct IndexBuilder {
    capturing: bool,
    counter: u32,
    terms: BTreeMap<String, TermEntry>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self {
            capturing: true,
            counter: 0,
            terms: BTreeMap::new(),
        }
    }

    /// Feed one node, in document order
    pub fn process(&mut self, node: &Node) {
        match node {
            Node::Text(_) => {}
            Node::Toggle(toggle) => self.capturing = toggle.enabled,
            Node::Directive(directive) => {
                if self.capturing {
                    self.record(directive);
                }
            }
        }
    }

    fn record(&mut self, directive: &IndexDirective) {
        self.counter += 1;
        let occurrence = match &directive.see_also {
            Some(target) => Occurrence::new(self.counter).with_see_also(target.trim().to_string()),
            None => Occurrence::new(self.counter),
        };
        insert_occurrence(
            &mut self.terms,
            &directive.primary,
            &directive.subterms,
            occurrence,
        );
    }

    /// Consume the builder and produce the rendered tree, children
    /// ordered by sort key at every level
    pub fn finish(self) -> RenderedNode {
        let mut root = RenderedNode::root();
        for entry in self.terms.into_values() {
            root.children.push(entry.into_rendered());
        }
        root
    }

    /// Run a complete node sequence through a fresh builder
    pub fn build(nodes: &[Node]) -> RenderedNode {
        let mut builder = Self::new();
        for node in nodes {
            builder.process(node);
        }
        builder.finish()
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
