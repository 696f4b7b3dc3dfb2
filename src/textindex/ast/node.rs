//! AST node type definitions for index markup
//!
//! This module defines the node types produced by the parser: literal
//! text runs, index directives, and capture toggles. Nodes are immutable,
//! own their text, and carry the position of their first character.

use super::position::Position;
use std::fmt;

/// A parsed element of an input document
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextSpan),
    Directive(IndexDirective),
    Toggle(ToggleDirective),
}

/// A run of literal prose between directives
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub content: String,
    pub position: Position,
}

/// An index directive: a primary term, optional subterms, and an
/// optional cross-reference target
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDirective {
    pub primary: String,
    pub subterms: Vec<String>,
    pub see_also: Option<String>,
    pub position: Position,
}

/// A capture toggle switching directive processing off or on
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleDirective {
    pub enabled: bool,
    pub position: Position,
}

impl TextSpan {
    pub fn new(content: String) -> Self {
        Self {
            content,
            position: Position::start(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

impl IndexDirective {
    pub fn new(primary: String) -> Self {
        Self {
            primary,
            subterms: Vec::new(),
            see_also: None,
            position: Position::start(),
        }
    }

    pub fn with_subterms(mut self, subterms: Vec<String>) -> Self {
        self.subterms = subterms;
        self
    }

    pub fn with_see_also(mut self, target: String) -> Self {
        self.see_also = Some(target);
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// The heading path joined for display, primary first
    pub fn heading_path(&self) -> String {
        let mut path = self.primary.clone();
        for subterm in &self.subterms {
            path.push(':');
            path.push_str(subterm);
        }
        path
    }
}

impl ToggleDirective {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            position: Position::start(),
        }
    }

    pub fn on() -> Self {
        Self::new(true)
    }

    pub fn off() -> Self {
        Self::new(false)
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

impl Node {
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Text(_) => "Text",
            Node::Directive(_) => "Directive",
            Node::Toggle(_) => "Toggle",
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Node::Text(t) => t.position,
            Node::Directive(d) => d.position,
            Node::Toggle(t) => t.position,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
    pub fn is_directive(&self) -> bool {
        matches!(self, Node::Directive(_))
    }
    pub fn is_toggle(&self) -> bool {
        matches!(self, Node::Toggle(_))
    }

    pub fn as_text(&self) -> Option<&TextSpan> {
        if let Node::Text(t) = self {
            Some(t)
        } else {
            None
        }
    }
    pub fn as_directive(&self) -> Option<&IndexDirective> {
        if let Node::Directive(d) = self {
            Some(d)
        } else {
            None
        }
    }
    pub fn as_toggle(&self) -> Option<&ToggleDirective> {
        if let Node::Toggle(t) = self {
            Some(t)
        } else {
            None
        }
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({} chars)", self.content.chars().count())
    }
}

impl fmt::Display for IndexDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.see_also {
            Some(target) => write!(f, "Directive('{}', see '{}')", self.heading_path(), target),
            None => write!(f, "Directive('{}')", self.heading_path()),
        }
    }
}

impl fmt::Display for ToggleDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "Toggle(on)")
        } else {
            write!(f, "Toggle(off)")
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => write!(f, "{}", t),
            Node::Directive(d) => write!(f, "{}", d),
            Node::Toggle(t) => write!(f, "{}", t),
        }
    }
}
