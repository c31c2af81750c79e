//! Conversion of a foreign parse tree into the Arbor AST.
//!
//! The walk follows the first-child / next-sibling chain with an explicit stack of open
//! elements, so nesting depth is limited by memory rather than the call stack. Each element is
//! built once all of its children are converted. Everything is copied out of the foreign tree,
//! so the resulting [`Document`] is independent of it.

use std::borrow::Cow;

use arbor_ast::{Attributes, Document, Element, Node, is_void_element};
use arbor_traits::{ForeignNodeKind, ForeignTree};

use crate::BooleanAttributePolicy;

/// Convert the children of the tree's document node.
pub fn convert<T: ForeignTree + ?Sized>(tree: &T, policy: BooleanAttributePolicy) -> Document {
    Converter::new(tree, policy).document(tree.root())
}

/// Convert the children of a fragment root returned by [`HtmlEngine::parse_fragment`].
///
/// [`HtmlEngine::parse_fragment`]: arbor_traits::HtmlEngine::parse_fragment
pub fn convert_fragment<T: ForeignTree + ?Sized>(
    tree: &T,
    fragment_root: T::NodeId,
    policy: BooleanAttributePolicy,
) -> Document {
    Converter::new(tree, policy).document(fragment_root)
}

/// Elements whose whole subtree is left out of the AST.
pub fn is_excluded_element(tag_name: &str) -> bool {
    matches!(tag_name, "script" | "style" | "template")
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// What to do with a single foreign node.
enum Step {
    /// A finished node: text, comment or void element
    Leaf(Node),
    /// An element whose children still need converting
    Open {
        tag_name: Cow<'static, str>,
        attributes: Attributes,
    },
    Skip,
}

/// An element waiting for its children.
struct OpenElement<N> {
    tag_name: Cow<'static, str>,
    attributes: Attributes,
    children: Vec<Node>,
    /// Where to continue once this element is closed
    next_sibling: Option<N>,
}

struct Converter<'t, T: ?Sized> {
    tree: &'t T,
    boolean_attributes: BooleanAttributePolicy,
}

impl<'t, T: ForeignTree + ?Sized> Converter<'t, T> {
    fn new(tree: &'t T, boolean_attributes: BooleanAttributePolicy) -> Self {
        Self {
            tree,
            boolean_attributes,
        }
    }

    fn document(&self, parent: T::NodeId) -> Document {
        let mut top_level = Vec::new();
        let mut open: Vec<OpenElement<T::NodeId>> = Vec::new();
        let mut next = self.tree.first_child(parent);

        loop {
            let Some(current) = next else {
                // Every child of the innermost open element is done
                let Some(element) = open.pop() else {
                    break;
                };
                next = element.next_sibling;
                let node = Element::new(element.tag_name, element.attributes, element.children);
                push_child(&mut open, &mut top_level, node.into());
                continue;
            };

            next = self.tree.next_sibling(current);
            match self.step(current) {
                Step::Leaf(node) => push_child(&mut open, &mut top_level, node),
                Step::Open {
                    tag_name,
                    attributes,
                } => {
                    open.push(OpenElement {
                        tag_name,
                        attributes,
                        children: Vec::new(),
                        next_sibling: next,
                    });
                    next = self.tree.first_child(current);
                }
                Step::Skip => {}
            }
        }

        Document::new(top_level)
    }

    fn step(&self, node: T::NodeId) -> Step {
        match self.tree.kind(node) {
            ForeignNodeKind::Element => self.element(node),
            ForeignNodeKind::Text => match self.tree.char_data(node).map(decode) {
                Some(text) if !text.is_empty() => Step::Leaf(Node::Text(text.into_owned())),
                _ => Step::Skip,
            },
            ForeignNodeKind::Comment => {
                let text = self.tree.char_data(node).map(decode).unwrap_or_default();
                Step::Leaf(Node::Comment(text.into_owned()))
            }
            ForeignNodeKind::Document | ForeignNodeKind::Other => Step::Skip,
        }
    }

    fn element(&self, node: T::NodeId) -> Step {
        let tag_name = self.tag_name(node);
        if is_excluded_element(&tag_name) {
            tracing::trace!(tag = %tag_name, "skipping excluded subtree");
            return Step::Skip;
        }

        let attributes = self.attributes(node);
        if is_void_element(&tag_name) {
            return Step::Leaf(Element::new(tag_name, attributes, Vec::new()).into());
        }
        Step::Open {
            tag_name,
            attributes,
        }
    }

    fn tag_name(&self, node: T::NodeId) -> Cow<'static, str> {
        if let Some(name) = self.tree.tag_id(node).static_name() {
            return Cow::Borrowed(name);
        }
        match self.tree.local_name(node) {
            Some(bytes) if !bytes.is_empty() => Cow::Owned(decode(bytes).into_owned()),
            _ => Cow::Borrowed(""),
        }
    }

    fn attributes(&self, node: T::NodeId) -> Attributes {
        let mut attributes = Attributes::new();
        for attr in self.tree.attributes(node) {
            if attr.name.is_empty() {
                continue;
            }
            let name = match attr.prefix {
                Some(prefix) if !prefix.is_empty() => {
                    format!("{}:{}", decode(prefix), decode(attr.name))
                }
                _ => decode(attr.name).into_owned(),
            };
            let value = match attr.value {
                Some(value) => decode(value).into_owned(),
                None => self.boolean_attributes.synthesize(&name),
            };
            attributes.insert(name, value);
        }
        attributes
    }
}

fn push_child<N>(open: &mut [OpenElement<N>], top_level: &mut Vec<Node>, node: Node) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top_level.push(node),
    }
}
