//! Description-list rendering of the aggregated index
//!
//! Produces the nested `<dl>` markup for a rendered term tree. Each
//! entry becomes a `<dt>` carrying the display text and its occurrence
//! references; entries with subterms nest a fresh `<dl>` inside a
//! `<dd>` block. Output is deterministic for a given tree.

use crate::textindex::index::builder::Occurrence;
use serde::Serialize;

/// An aggregated, display-ready index entry
///
/// The tree root is synthetic: it has no display text and no
/// occurrences, only the top-level entries as children. Children are
/// already sorted by the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub occurrences: Vec<Occurrence>,
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    /// The synthetic root of an index tree
    pub fn root() -> Self {
        Self {
            display: None,
            occurrences: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A named entry with no occurrences or children yet
    pub fn entry(display: String) -> Self {
        Self {
            display: Some(display),
            occurrences: Vec::new(),
            children: Vec::new(),
        }
    }

    /// True for a root with no entries at all
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of entries in the tree; the synthetic root is not counted
    pub fn term_count(&self) -> usize {
        let own = if self.display.is_some() { 1 } else { 0 };
        own + self
            .children
            .iter()
            .map(RenderedNode::term_count)
            .sum::<usize>()
    }
}

/// Render the term tree as a nested description list
pub fn render_description_list(root: &RenderedNode) -> String {
    if root.children.is_empty() {
        return "<p><em>No index entries found.</em></p>".to_string();
    }
    let mut output = String::from("<dl class='index textindex'>");
    for child in &root.children {
        append_entry(&mut output, child, 1);
    }
    output.push_str("\n</dl>");
    output
}

fn append_entry(output: &mut String, entry: &RenderedNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let display = entry.display.as_deref().unwrap_or("");
    if entry.occurrences.is_empty() {
        output.push_str(&format!("\n{}<dt>{}</dt>", indent, display));
    } else {
        output.push_str(&format!(
            "\n{}<dt>{}, {}</dt>",
            indent,
            display,
            occurrence_list(&entry.occurrences)
        ));
    }
    if !entry.children.is_empty() {
        output.push_str(&format!("\n{}<dd>", indent));
        output.push_str(&format!("\n{}  <dl>", indent));
        for child in &entry.children {
            append_entry(output, child, depth + 2);
        }
        output.push_str(&format!("\n{}  </dl>", indent));
        output.push_str(&format!("\n{}</dd>", indent));
    }
}

/// Comma-joined occurrence references, cross-references spelled out
fn occurrence_list(occurrences: &[Occurrence]) -> String {
    let mut parts = Vec::with_capacity(occurrences.len());
    for occurrence in occurrences {
        match &occurrence.see_also {
            Some(target) => parts.push(format!("{} (see {})", occurrence.reference, target)),
            None => parts.push(occurrence.reference.to_string()),
        }
    }
    parts.join(", ")
}
