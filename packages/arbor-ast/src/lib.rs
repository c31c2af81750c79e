//! The immutable HTML syntax tree used by Arbor.
//!
//! A [`Document`] is an ordered list of [`Node`]s; a node is an [`Element`], a text run or a
//! comment. Trees are built bottom-up and never mutated afterwards. They hold no references into
//! whatever parser produced them, so they can be freely cloned, hashed, compared and sent across
//! threads.
//!
//! Two consumers operate purely on the tree:
//!
//!  - [`Visitor`]: semantic dispatch by well-known HTML role (heading, link, list, ...).
//!  - [`serialize`]: canonical HTML output.
//!
//! Parsing lives in the [arbor-html](https://docs.rs/arbor-html) crate.

mod node;
pub mod serialize;
pub mod visitor;

pub use node::{Attributes, Descendants, Document, Element, Node, VOID_ELEMENTS, is_void_element};
pub use serialize::{ToHtml, serialize};
pub use visitor::{SemanticCategory, Visitor};
