//! AST definitions and diagnostics for index markup
//!
//! This module provides the node types produced by the parser, the
//! position types attached to tokens, nodes, and errors, and the error
//! types shared across the pipeline.
//!
//! ## Modules
//!
//! - `position` - Position type and byte-offset conversion
//! - `node` - AST node type definitions
//! - `error` - Error types for scanning and parsing

pub mod error;
pub mod node;
pub mod position;

// Re-export commonly used types at module root
pub use error::{format_source_context, IndexError, LexError, ParseError};
pub use node::{IndexDirective, Node, TextSpan, ToggleDirective};
pub use position::{Position, SourceLocation};
