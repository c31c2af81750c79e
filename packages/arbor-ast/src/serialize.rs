//! Rendering the AST back to HTML text.
//!
//! Output is canonical rather than source-faithful: attributes are emitted in lexicographic
//! order and empty attribute values are written as bare names, so two structurally equal
//! trees always serialize identically.

use std::fmt;

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::{Document, Element, Node};

/// Types which can be rendered as HTML.
pub trait ToHtml {
    /// Append the HTML for `self` to `out`
    fn write_html(&self, out: &mut String);

    fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// Serialize a [`Document`], [`Node`], [`Element`] or slice of nodes to an HTML string.
///
/// ```rust
/// use arbor_ast::{serialize, Element, Node};
///
/// let p = Element::empty("p").with_child(Node::Text("a < b".into()));
/// assert_eq!(serialize(&p), "<p>a &lt; b</p>");
/// ```
pub fn serialize<T: ToHtml + ?Sized>(value: &T) -> String {
    value.to_html()
}

impl ToHtml for Document {
    fn write_html(&self, out: &mut String) {
        self.children().write_html(out);
    }
}

impl ToHtml for [Node] {
    fn write_html(&self, out: &mut String) {
        write_nodes(self, out);
    }
}

impl ToHtml for Node {
    fn write_html(&self, out: &mut String) {
        write_nodes(std::slice::from_ref(self), out);
    }
}

impl ToHtml for Element {
    fn write_html(&self, out: &mut String) {
        write_start_tag(self, out);
        if !self.is_void() {
            write_nodes(self.children(), out);
            write_end_tag(self, out);
        }
    }
}

enum Step<'a> {
    Node(&'a Node),
    Close(&'a Element),
}

/// Writes `nodes` with an explicit stack of pending steps rather than recursing per element.
fn write_nodes(nodes: &[Node], out: &mut String) {
    let mut stack: Vec<Step<'_>> = nodes.iter().rev().map(Step::Node).collect();
    while let Some(step) = stack.pop() {
        match step {
            Step::Node(Node::Text(text)) => {
                encode_text_to_string(text, out);
            }
            // Comment content is written raw: it must not contain `-->`
            Step::Node(Node::Comment(text)) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            Step::Node(Node::Element(element)) => {
                write_start_tag(element, out);
                if !element.is_void() {
                    stack.push(Step::Close(element));
                    stack.extend(element.children().iter().rev().map(Step::Node));
                }
            }
            Step::Close(element) => write_end_tag(element, out),
        }
    }
}

fn write_start_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag_name());

    // BTreeMap iteration is already sorted by name
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            encode_double_quoted_attribute_to_string(value, out);
            out.push('"');
        }
    }
    out.push('>');
}

fn write_end_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(element.tag_name());
    out.push('>');
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
