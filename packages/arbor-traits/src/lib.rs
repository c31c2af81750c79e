//! Shared traits and types for Arbor.
//!
//! These describe the capability Arbor consumes from an HTML5 parsing engine: allocating
//! document handles, parsing into them, and walking the resulting tree through
//! first-child / next-sibling links.

mod engine;
mod tree;

pub mod tag;

pub use engine::HtmlEngine;
pub use tag::{TAG_NAMES, TagId};
pub use tree::{Children, ForeignAttribute, ForeignNodeKind, ForeignTree};
