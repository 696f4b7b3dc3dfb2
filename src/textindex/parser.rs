//! Token stream to AST parser for index markup
//!
//! A single forward pass turns the scanner's tokens into an ordered
//! sequence of nodes. Directives accumulate their fields between the
//! open and close delimiters; everything else passes through as text
//! spans and toggles. The first grammar violation aborts the parse.

use crate::textindex::ast::{
    IndexDirective, IndexError, LexError, Node, ParseError, Position, TextSpan, ToggleDirective,
};
use crate::textindex::lexer::{Token, TokenKind};

/// Which slot of a directive is currently accumulating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Primary,
    Subterm,
    CrossReference,
}

/// Accumulates the fields of one open directive
struct DirectiveBuilder {
    open_position: Position,
    primary: Option<String>,
    subterms: Vec<String>,
    see_also: Option<String>,
    field: Field,
    buffer: String,
}

impl DirectiveBuilder {
    fn new(open_position: Position) -> Self {
        Self {
            open_position,
            primary: None,
            subterms: Vec::new(),
            see_also: None,
            field: Field::Primary,
            buffer: String::new(),
        }
    }

    fn text(&mut self, content: String) {
        if self.buffer.is_empty() {
            self.buffer = content;
        } else {
            self.buffer.push_str(&content);
        }
    }

    /// Finalize the accumulating field at the separator or close token
    /// found at `position`. Fields are kept end-trimmed; a field that is
    /// blank after trimming is rejected.
    fn finish_field(&mut self, position: Position) -> Result<(), ParseError> {
        let raw = std::mem::take(&mut self.buffer);
        if raw.trim().is_empty() {
            return Err(match self.field {
                Field::Primary => ParseError::MissingPrimary {
                    position: self.open_position,
                },
                Field::Subterm => ParseError::BlankSubterm { position },
                Field::CrossReference => ParseError::BlankCrossReference { position },
            });
        }
        let content = raw.trim_end().to_string();
        match self.field {
            Field::Primary => self.primary = Some(content),
            Field::Subterm => self.subterms.push(content),
            Field::CrossReference => self.see_also = Some(content),
        }
        Ok(())
    }

    fn field_sep(&mut self, position: Position) -> Result<(), ParseError> {
        if self.field == Field::CrossReference {
            return Err(ParseError::SubtermAfterCrossReference { position });
        }
        self.finish_field(position)?;
        self.field = Field::Subterm;
        Ok(())
    }

    fn see_sep(&mut self, position: Position) -> Result<(), ParseError> {
        if self.field == Field::CrossReference {
            return Err(ParseError::DuplicateCrossReference { position });
        }
        self.finish_field(position)?;
        self.field = Field::CrossReference;
        Ok(())
    }

    fn close(mut self, position: Position) -> Result<IndexDirective, ParseError> {
        self.finish_field(position)?;
        let primary = match self.primary.take() {
            Some(primary) => primary,
            None => {
                return Err(ParseError::MissingPrimary {
                    position: self.open_position,
                })
            }
        };
        let mut directive = IndexDirective::new(primary).with_subterms(self.subterms);
        if let Some(target) = self.see_also {
            directive = directive.with_see_also(target);
        }
        Ok(directive.at(self.open_position))
    }
}

/// Parse a token stream into an ordered sequence of nodes
///
/// Accepts any stream of scanner results, so lexical errors surface
/// here and abort the parse at the point they occur.
pub fn parse<I>(tokens: I) -> Result<Vec<Node>, IndexError>
where
    I: IntoIterator<Item = Result<Token, LexError>>,
{
    let mut nodes = Vec::new();
    let mut open: Option<DirectiveBuilder> = None;

    for item in tokens {
        let token = item?;
        match token.kind {
            TokenKind::Text(content) => match open.as_mut() {
                Some(builder) => builder.text(content),
                None => nodes.push(Node::Text(TextSpan::new(content).at(token.position))),
            },
            TokenKind::DirectiveOpen => {
                if open.is_some() {
                    return Err(ParseError::NestedDirective {
                        position: token.position,
                    }
                    .into());
                }
                open = Some(DirectiveBuilder::new(token.position));
            }
            TokenKind::DirectiveClose => match open.take() {
                Some(builder) => nodes.push(Node::Directive(builder.close(token.position)?)),
                None => {
                    return Err(ParseError::UnexpectedToken {
                        found: "directive close",
                        position: token.position,
                    }
                    .into())
                }
            },
            TokenKind::FieldSep => match open.as_mut() {
                Some(builder) => builder.field_sep(token.position)?,
                None => {
                    return Err(ParseError::UnexpectedToken {
                        found: "field separator",
                        position: token.position,
                    }
                    .into())
                }
            },
            TokenKind::SeeSep => match open.as_mut() {
                Some(builder) => builder.see_sep(token.position)?,
                None => {
                    return Err(ParseError::UnexpectedToken {
                        found: "cross-reference separator",
                        position: token.position,
                    }
                    .into())
                }
            },
            TokenKind::ToggleOn => {
                if open.is_some() {
                    return Err(ParseError::ToggleInDirective {
                        position: token.position,
                    }
                    .into());
                }
                nodes.push(Node::Toggle(ToggleDirective::on().at(token.position)));
            }
            TokenKind::ToggleOff => {
                if open.is_some() {
                    return Err(ParseError::ToggleInDirective {
                        position: token.position,
                    }
                    .into());
                }
                nodes.push(Node::Toggle(ToggleDirective::off().at(token.position)));
            }
        }
    }

    // The scanner reports unterminated directives itself; this guards
    // hand-built token streams.
    if let Some(builder) = open {
        return Err(ParseError::UnexpectedEnd {
            position: builder.open_position,
        }
        .into());
    }

    Ok(nodes)
}
