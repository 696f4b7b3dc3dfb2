//! # textindex
//!
//! An inline index markup processor for plain-text documents.
//!
//! Index directives are written inline as `{term}`, `{term:subterm}`,
//! or `{term|see-target}`; `{^-}` and `{^+}` pause and resume index
//! capture. Processing a document numbers every captured directive in
//! reading order and aggregates the terms into a case-folded, sorted
//! tree that renders as a nested description list.

pub mod textindex;
