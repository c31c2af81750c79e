//! The document handle html5ever parses into.
//!
//! Nodes live in a [`Slab`] and are linked by parent / first-child / next-sibling ids, the same
//! shape a C engine exposes through its node pointers. Detached nodes stay in the slab until the
//! whole document is dropped.

use std::borrow::Cow;

use arbor_traits::{ForeignAttribute, ForeignNodeKind, ForeignTree, TagId};
use html5ever::tendril::StrTendril;
use markup5ever::{Attribute, LocalName, QualName, local_name, ns};
use rustc_hash::FxHashMap;
use slab::Slab;

pub struct ElementData {
    pub name: QualName,
    pub tag_id: TagId,
    pub attrs: Vec<Attribute>,
}

pub enum NodeData {
    /// A document, or the container html5ever parses a fragment into
    Document,
    Element(ElementData),
    Text(StrTendril),
    Comment(StrTendril),
    /// Processing instructions have no counterpart in the AST, only their position is kept
    ProcessingInstruction,
}

pub struct ForeignNode {
    pub parent: Option<usize>,
    pub first_child: Option<usize>,
    pub last_child: Option<usize>,
    pub prev_sibling: Option<usize>,
    pub next_sibling: Option<usize>,
    pub data: NodeData,
}

impl ForeignNode {
    fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            data,
        }
    }

    pub fn element_data(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(data) => Some(data),
            _ => None,
        }
    }
}

/// An html5ever parse tree. Dropping it releases every node it owns.
pub struct ForeignDocument {
    nodes: Slab<ForeignNode>,
    root: usize,
    /// Ids handed out to tags outside the static table
    dynamic_tags: FxHashMap<LocalName, TagId>,
    pub(crate) errors: Vec<Cow<'static, str>>,
}

impl Default for ForeignDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ForeignDocument {
    pub fn new() -> Self {
        let mut nodes = Slab::with_capacity(64);
        let root = nodes.insert(ForeignNode::new(NodeData::Document));
        tracing::trace!("created foreign document");
        Self {
            nodes,
            root,
            dynamic_tags: FxHashMap::default(),
            errors: Vec::new(),
        }
    }

    pub fn get_node(&self, node_id: usize) -> Option<&ForeignNode> {
        self.nodes.get(node_id)
    }

    /// Recoverable errors html5ever reported while parsing into this document.
    pub fn parse_errors(&self) -> &[Cow<'static, str>] {
        &self.errors
    }

    pub fn create_node(&mut self, data: NodeData) -> usize {
        self.nodes.insert(ForeignNode::new(data))
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> usize {
        let tag_id = self.intern_tag(&name.local);
        self.create_node(NodeData::Element(ElementData {
            name,
            tag_id,
            attrs,
        }))
    }

    /// Create a detached document node for html5ever to parse a fragment into.
    pub fn create_fragment_root(&mut self) -> usize {
        self.create_node(NodeData::Document)
    }

    /// Static table id for standard tags, otherwise a per-document dynamic id.
    fn intern_tag(&mut self, local: &LocalName) -> TagId {
        if let Some(tag_id) = TagId::from_static_name(local) {
            return tag_id;
        }
        let next = TagId(TagId::LAST_ENTRY.0 + self.dynamic_tags.len() as u32);
        *self.dynamic_tags.entry(local.clone()).or_insert(next)
    }

    pub fn element_name(&self, node_id: usize) -> Option<&QualName> {
        self.nodes[node_id].element_data().map(|el| &el.name)
    }

    pub fn node_has_parent(&self, node_id: usize) -> bool {
        self.nodes[node_id].parent.is_some()
    }

    /// Unlink a node from its parent and siblings. Its own children stay attached to it.
    pub fn detach(&mut self, node_id: usize) {
        let node = &mut self.nodes[node_id];
        let parent = node.parent.take();
        let prev = node.prev_sibling.take();
        let next = node.next_sibling.take();

        match prev {
            Some(prev) => self.nodes[prev].next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.nodes[next].prev_sibling = prev,
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent].last_child = prev;
                }
            }
        }
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn append(&mut self, parent_id: usize, child_id: usize) {
        self.detach(child_id);

        let last = self.nodes[parent_id].last_child;
        let child = &mut self.nodes[child_id];
        child.parent = Some(parent_id);
        child.prev_sibling = last;

        match last {
            Some(last) => self.nodes[last].next_sibling = Some(child_id),
            None => self.nodes[parent_id].first_child = Some(child_id),
        }
        self.nodes[parent_id].last_child = Some(child_id);
    }

    /// Insert `child` immediately before `sibling_id`, detaching it from any previous parent.
    pub fn insert_before(&mut self, sibling_id: usize, child_id: usize) {
        self.detach(child_id);

        let parent = self.nodes[sibling_id].parent;
        let prev = self.nodes[sibling_id].prev_sibling;
        let child = &mut self.nodes[child_id];
        child.parent = parent;
        child.prev_sibling = prev;
        child.next_sibling = Some(sibling_id);

        self.nodes[sibling_id].prev_sibling = Some(child_id);
        match prev {
            Some(prev) => self.nodes[prev].next_sibling = Some(child_id),
            None => {
                if let Some(parent) = parent {
                    self.nodes[parent].first_child = Some(child_id);
                }
            }
        }
    }

    /// Move every child of `old_parent_id` to the end of `new_parent_id`, preserving order.
    pub fn reparent_children(&mut self, old_parent_id: usize, new_parent_id: usize) {
        while let Some(child_id) = self.nodes[old_parent_id].first_child {
            self.append(new_parent_id, child_id);
        }
    }

    /// Append text to `parent_id`, merging into its last child if that is a text node.
    pub fn append_text(&mut self, parent_id: usize, text: StrTendril) {
        if let Some(last) = self.nodes[parent_id].last_child {
            if let NodeData::Text(existing) = &mut self.nodes[last].data {
                existing.push_tendril(&text);
                return;
            }
        }
        let text_id = self.create_node(NodeData::Text(text));
        self.append(parent_id, text_id);
    }

    /// Insert text before `sibling_id`, merging into the preceding text node if there is one.
    pub fn insert_text_before(&mut self, sibling_id: usize, text: StrTendril) {
        if let Some(prev) = self.nodes[sibling_id].prev_sibling {
            if let NodeData::Text(existing) = &mut self.nodes[prev].data {
                existing.push_tendril(&text);
                return;
            }
        }
        let text_id = self.create_node(NodeData::Text(text));
        self.insert_before(sibling_id, text_id);
    }

    /// Add each attribute whose name the element doesn't already carry.
    pub fn add_attrs_if_missing(&mut self, node_id: usize, attrs: Vec<Attribute>) {
        let NodeData::Element(element) = &mut self.nodes[node_id].data else {
            return;
        };
        for attr in attrs {
            if !element.attrs.iter().any(|existing| existing.name == attr.name) {
                element.attrs.push(attr);
            }
        }
    }

    fn find_html_child(&self, parent_id: usize, name: &LocalName) -> Option<usize> {
        self.children(parent_id).find(|id| {
            self.nodes[*id]
                .element_data()
                .is_some_and(|el| el.name.ns == ns!(html) && el.name.local == *name)
        })
    }
}

impl Drop for ForeignDocument {
    fn drop(&mut self) {
        tracing::trace!(nodes = self.nodes.len(), "destroying foreign document");
    }
}

/// Attribute chain of a [`ForeignDocument`] element.
pub struct AttributeChain<'a> {
    inner: std::slice::Iter<'a, Attribute>,
}

impl<'a> Iterator for AttributeChain<'a> {
    type Item = ForeignAttribute<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let attr = self.inner.next()?;
        Some(ForeignAttribute {
            prefix: attr.name.prefix.as_ref().map(|prefix| prefix.as_bytes()),
            name: attr.name.local.as_bytes(),
            // html5ever always records a value; boolean attributes get an empty one
            value: Some(attr.value.as_bytes()),
        })
    }
}

impl ForeignTree for ForeignDocument {
    type NodeId = usize;

    type Attributes<'a>
        = AttributeChain<'a>
    where
        Self: 'a;

    fn root(&self) -> usize {
        self.root
    }

    fn body(&self) -> Option<usize> {
        let html = self.find_html_child(self.root, &local_name!("html"))?;
        self.find_html_child(html, &local_name!("body"))
    }

    fn kind(&self, node_id: usize) -> ForeignNodeKind {
        match self.nodes[node_id].data {
            NodeData::Document => ForeignNodeKind::Document,
            NodeData::Element(_) => ForeignNodeKind::Element,
            NodeData::Text(_) => ForeignNodeKind::Text,
            NodeData::Comment(_) => ForeignNodeKind::Comment,
            NodeData::ProcessingInstruction => ForeignNodeKind::Other,
        }
    }

    fn first_child(&self, node_id: usize) -> Option<usize> {
        self.nodes[node_id].first_child
    }

    fn next_sibling(&self, node_id: usize) -> Option<usize> {
        self.nodes[node_id].next_sibling
    }

    fn tag_id(&self, node_id: usize) -> TagId {
        self.nodes[node_id]
            .element_data()
            .map_or(TagId::UNDEF, |el| el.tag_id)
    }

    fn local_name(&self, node_id: usize) -> Option<&[u8]> {
        self.nodes[node_id]
            .element_data()
            .map(|el| el.name.local.as_bytes())
    }

    fn attributes(&self, node_id: usize) -> AttributeChain<'_> {
        let attrs = match self.nodes[node_id].element_data() {
            Some(el) => el.attrs.as_slice(),
            None => &[],
        };
        AttributeChain {
            inner: attrs.iter(),
        }
    }

    fn char_data(&self, node_id: usize) -> Option<&[u8]> {
        match &self.nodes[node_id].data {
            NodeData::Text(text) | NodeData::Comment(text) => Some(text.as_bytes()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_name(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    fn child_ids(doc: &ForeignDocument, parent: usize) -> Vec<usize> {
        doc.children(parent).collect()
    }

    #[test]
    fn append_and_insert_before_keep_links_consistent() {
        let mut doc = ForeignDocument::new();
        let root = doc.root();
        let a = doc.create_element(html_name("p"), Vec::new());
        let b = doc.create_element(html_name("div"), Vec::new());
        let c = doc.create_element(html_name("span"), Vec::new());

        doc.append(root, a);
        doc.append(root, c);
        doc.insert_before(c, b);
        assert_eq!(child_ids(&doc, root), [a, b, c]);
        assert_eq!(doc.get_node(root).unwrap().last_child, Some(c));
        assert_eq!(doc.get_node(b).unwrap().prev_sibling, Some(a));

        // Moving a node elsewhere unlinks it from its old parent
        doc.append(b, a);
        assert_eq!(child_ids(&doc, root), [b, c]);
        assert_eq!(child_ids(&doc, b), [a]);
        assert_eq!(doc.get_node(root).unwrap().first_child, Some(b));
    }

    #[test]
    fn detach_last_child_updates_parent() {
        let mut doc = ForeignDocument::new();
        let root = doc.root();
        let a = doc.create_element(html_name("p"), Vec::new());
        let b = doc.create_element(html_name("p"), Vec::new());
        doc.append(root, a);
        doc.append(root, b);

        doc.detach(b);
        assert_eq!(child_ids(&doc, root), [a]);
        assert_eq!(doc.get_node(root).unwrap().last_child, Some(a));
        assert!(!doc.node_has_parent(b));

        doc.detach(a);
        assert_eq!(doc.first_child(root), None);
        assert_eq!(doc.get_node(root).unwrap().last_child, None);
    }

    #[test]
    fn reparent_children_preserves_order() {
        let mut doc = ForeignDocument::new();
        let root = doc.root();
        let from = doc.create_element(html_name("div"), Vec::new());
        let to = doc.create_element(html_name("section"), Vec::new());
        doc.append(root, from);
        doc.append(root, to);
        let kids: Vec<usize> = (0..3)
            .map(|_| doc.create_element(html_name("li"), Vec::new()))
            .collect();
        for kid in &kids {
            doc.append(from, *kid);
        }

        doc.reparent_children(from, to);
        assert!(child_ids(&doc, from).is_empty());
        assert_eq!(child_ids(&doc, to), kids);
    }

    #[test]
    fn adjacent_text_is_merged() {
        let mut doc = ForeignDocument::new();
        let root = doc.root();
        let p = doc.create_element(html_name("p"), Vec::new());
        doc.append(root, p);
        doc.append_text(p, StrTendril::from_slice("Hello"));
        doc.append_text(p, StrTendril::from_slice(", world"));

        let kids = child_ids(&doc, p);
        assert_eq!(kids.len(), 1);
        assert_eq!(doc.char_data(kids[0]), Some(&b"Hello, world"[..]));

        let br = doc.create_element(html_name("br"), Vec::new());
        doc.append(p, br);
        doc.insert_text_before(br, StrTendril::from_slice("!"));
        assert_eq!(child_ids(&doc, p).len(), 2);
        assert_eq!(doc.char_data(kids[0]), Some(&b"Hello, world!"[..]));
    }

    #[test]
    fn standard_tags_use_static_ids() {
        let mut doc = ForeignDocument::new();
        let p = doc.create_element(html_name("p"), Vec::new());
        assert_eq!(doc.tag_id(p), TagId::from_static_name("p").unwrap());
        assert_eq!(doc.tag_id(doc.root()), TagId::UNDEF);
    }

    #[test]
    fn custom_tags_get_stable_dynamic_ids() {
        let mut doc = ForeignDocument::new();
        let a = doc.create_element(html_name("my-widget"), Vec::new());
        let b = doc.create_element(html_name("other-widget"), Vec::new());
        let c = doc.create_element(html_name("my-widget"), Vec::new());

        assert!(doc.tag_id(a) >= TagId::LAST_ENTRY);
        assert_ne!(doc.tag_id(a), doc.tag_id(b));
        assert_eq!(doc.tag_id(a), doc.tag_id(c));
        assert_eq!(doc.local_name(a), Some(&b"my-widget"[..]));
    }

    #[test]
    fn add_attrs_if_missing_keeps_existing_values() {
        let mut doc = ForeignDocument::new();
        let attr = |name: &str, value: &str| Attribute {
            name: html_attr_name(name),
            value: StrTendril::from_slice(value),
        };
        let el = doc.create_element(html_name("html"), vec![attr("lang", "en")]);
        doc.add_attrs_if_missing(el, vec![attr("lang", "fr"), attr("dir", "ltr")]);

        let attrs: Vec<_> = doc
            .attributes(el)
            .map(|a| (a.name.to_vec(), a.value.map(<[u8]>::to_vec)))
            .collect();
        assert_eq!(
            attrs,
            [
                (b"lang".to_vec(), Some(b"en".to_vec())),
                (b"dir".to_vec(), Some(b"ltr".to_vec())),
            ]
        );
    }

    fn html_attr_name(local: &str) -> QualName {
        QualName::new(None, ns!(), LocalName::from(local))
    }

    #[test]
    fn attribute_chain_reports_prefixes() {
        let mut doc = ForeignDocument::new();
        let xlink_href = Attribute {
            name: QualName::new(
                Some(markup5ever::Prefix::from("xlink")),
                ns!(xlink),
                LocalName::from("href"),
            ),
            value: StrTendril::from_slice("x"),
        };
        let href = Attribute {
            name: html_attr_name("href"),
            value: StrTendril::from_slice("y"),
        };
        let el = doc.create_element(html_name("a"), vec![xlink_href, href]);

        let attrs: Vec<_> = doc.attributes(el).collect();
        assert_eq!(attrs[0].prefix, Some(&b"xlink"[..]));
        assert_eq!(attrs[0].name, b"href");
        assert_eq!(attrs[1].prefix, None);
        assert_eq!(attrs[1].name, b"href");
    }

    #[test]
    fn fresh_document_has_no_body() {
        let doc = ForeignDocument::new();
        assert_eq!(doc.body(), None);
        assert_eq!(doc.first_child(doc.root()), None);
    }
}
