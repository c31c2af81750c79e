use std::borrow::Cow;
use std::collections::BTreeMap;

/// Elements which never have content or a closing tag.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag_name` is one of the [`VOID_ELEMENTS`].
#[inline]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Attribute name to value map of an [`Element`].
///
/// Keys are unique and iterate in lexicographic order, regardless of the order in which the
/// source markup declared them.
pub type Attributes = BTreeMap<String, String>;

/// Root container for a parsed HTML tree: an ordered list of top-level nodes.
///
/// Empty input, or input the engine failed to parse, yields a document with no children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Top-level nodes of the document
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// A new document with `children` replacing the current top-level nodes.
    pub fn with_children(self, children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Concatenated text of every text node in the document, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Depth-first iterator over every element in the document, parents before children.
    pub fn descendant_elements(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A single node in the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Element(Element),
    /// A run of character data. Never empty when produced by the parser.
    Text(String),
    /// The content of a `<!-- ... -->` comment. May be empty.
    Comment(String),
}

impl Node {
    #[inline(always)]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    #[inline(always)]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    #[inline(always)]
    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&str> {
        match self {
            Node::Comment(text) => Some(text),
            _ => None,
        }
    }

    /// The text of this node and all of its descendants. Comments contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(std::slice::from_ref(self), &mut out);
        out
    }
}

/// Append the text of `nodes` and their descendants to `out`, in document order.
fn collect_text(nodes: &[Node], out: &mut String) {
    let mut stack = vec![nodes.iter()];
    while let Some(iter) = stack.last_mut() {
        match iter.next() {
            Some(Node::Text(text)) => out.push_str(text),
            Some(Node::Comment(_)) => {}
            Some(Node::Element(element)) => stack.push(element.children.iter()),
            None => {
                stack.pop();
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An HTML element: tag name, attributes and child nodes.
///
/// Elements are immutable once built. The `with_*` methods consume the element and return a
/// new one, so derived trees are produced by construction rather than mutation.
///
/// Cloning, comparing, hashing and debug formatting recurse through the children, so they are
/// bounded by the call stack. Building, dropping, serializing, [`Element::text_content`] and
/// [`Document::descendant_elements`] are not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "UncheckedElement"))]
pub struct Element {
    tag_name: Cow<'static, str>,
    attributes: Attributes,
    children: Vec<Node>,
}

impl Element {
    /// Build an element. Children passed to a void element are discarded.
    pub fn new(
        tag_name: impl Into<Cow<'static, str>>,
        attributes: Attributes,
        children: Vec<Node>,
    ) -> Self {
        let tag_name = tag_name.into();
        let children = if is_void_element(&tag_name) {
            Vec::new()
        } else {
            children
        };
        Self {
            tag_name,
            attributes,
            children,
        }
    }

    /// An element with no attributes and no children
    pub fn empty(tag_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(tag_name, Attributes::new(), Vec::new())
    }

    /// Lowercase tag name (e.g. `"p"`, `"my-component"`).
    ///
    /// The empty string means the tag could not be resolved. It is not a parse failure.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the attribute is present, regardless of its value (e.g. `disabled`).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag_name)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// A new element with `name` set to `value`, replacing any previous value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        if !self.is_void() {
            self.children = children;
        }
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        if !self.is_void() {
            self.children.push(child.into());
        }
        self
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        // Flatten the subtree so deep nesting doesn't recurse through drop glue
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Field-for-field mirror of [`Element`] which deserializes without checks, then goes through
/// [`Element::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedElement {
    tag_name: Cow<'static, str>,
    attributes: Attributes,
    children: Vec<Node>,
}

#[cfg(feature = "serde")]
impl From<UncheckedElement> for Element {
    fn from(raw: UncheckedElement) -> Self {
        Element::new(raw.tag_name, raw.attributes, raw.children)
    }
}

impl<'a> IntoIterator for &'a Element {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// A pre-order traverser over the elements of a list of nodes.
#[derive(Clone)]
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Descendants<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        let mut stack = Vec::with_capacity(16);
        stack.push(nodes.iter());
        Self { stack }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(Node::Element(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(_) => continue,
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
