//! HTML parsing for Arbor.
//!
//! Parses HTML with [html5ever](https://docs.rs/html5ever) and converts the resulting tree into
//! an immutable [`Document`]. The parse tree itself lives only for the duration of a call.
//!
//! ```
//! use arbor_html::{parse_fragment, serialize};
//!
//! let doc = parse_fragment("<p class=intro>Hello <b>world</b><script>x()</script>");
//! assert_eq!(serialize(&doc), r#"<p class="intro">Hello <b>world</b></p>"#);
//! ```
//!
//! Parsing never fails from the caller's point of view: empty input or an engine failure
//! produces an empty document. Use [`HtmlParser::try_parse`] or
//! [`HtmlParser::try_parse_fragment`] to observe the underlying error.
//!
//! Other engines can be plugged in by implementing [`HtmlEngine`] and constructing a parser with
//! [`HtmlParser::with_engine`].

mod config;
pub mod convert;
mod document;
mod engine;
mod error;
mod parser;
mod sink;

pub use config::{BooleanAttributePolicy, ParserConfig};
pub use document::{AttributeChain, ElementData, ForeignDocument, ForeignNode, NodeData};
pub use engine::Html5everEngine;
pub use error::{EngineError, ParseError};
pub use parser::HtmlParser;

pub use arbor_ast::{
    Attributes, Document, Element, Node, SemanticCategory, ToHtml, Visitor, serialize,
};
pub use arbor_traits::{ForeignTree, HtmlEngine};

/// Parse a complete HTML document with the default configuration.
///
/// See [`HtmlParser::parse`].
pub fn parse(input: impl AsRef<[u8]>) -> Document {
    HtmlParser::new(ParserConfig::default()).parse(input)
}

/// Parse an HTML fragment, as if it were the content of a `body` element, with the default
/// configuration.
///
/// See [`HtmlParser::parse_fragment`].
pub fn parse_fragment(input: impl AsRef<[u8]>) -> Document {
    HtmlParser::new(ParserConfig::default()).parse_fragment(input)
}
