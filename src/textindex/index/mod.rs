//! Index aggregation and rendering
//!
//! ## Modules
//!
//! - [`builder`] - Document-order aggregation into a sorted term tree
//! - [`render`] - Description-list markup for the aggregated tree

pub mod builder;
pub mod render;

pub use builder::{IndexBuilder, Occurrence};
pub use render::{render_description_list, RenderedNode};
