//! An implementation of html5ever's sink trait, building a [`ForeignDocument`].

use std::borrow::Cow;
use std::cell::{Cell, Ref, RefCell, RefMut};

use html5ever::{
    QualName,
    tendril::StrTendril,
    tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink},
};

use crate::document::{ForeignDocument, NodeData};

pub struct ForeignSink<'doc> {
    document: RefCell<&'doc mut ForeignDocument>,

    /// The node html5ever treats as its document. For fragment parses this is a detached
    /// fragment root rather than the real document node.
    document_node: usize,

    /// Errors that occurred during parsing.
    errors: RefCell<Vec<Cow<'static, str>>>,

    quirks_mode: Cell<QuirksMode>,
}

impl<'doc> ForeignSink<'doc> {
    pub fn new(document: &'doc mut ForeignDocument, document_node: usize) -> Self {
        ForeignSink {
            document: RefCell::new(document),
            document_node,
            errors: RefCell::new(Vec::new()),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
        }
    }

    #[track_caller]
    fn doc(&self) -> RefMut<'_, &'doc mut ForeignDocument> {
        self.document.borrow_mut()
    }
}

impl TreeSink for ForeignSink<'_> {
    type Output = ();

    // we use the slab index of the node as the handle
    type Handle = usize;

    type ElemName<'a>
        = Ref<'a, QualName>
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        let errors = self.errors.into_inner();
        for error in &errors {
            tracing::debug!("html parse error: {error}");
        }
        tracing::trace!(quirks_mode = ?self.quirks_mode.get(), "finished html parse");
        self.document.into_inner().errors.extend(errors);
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        self.errors.borrow_mut().push(msg);
    }

    fn get_document(&self) -> Self::Handle {
        self.document_node
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.document.borrow(), |doc| {
            doc.element_name(*target)
                .expect("TreeSink::elem_name called on a node which is not an element!")
        })
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<html5ever::Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        self.doc().create_element(name, attrs)
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        self.doc().create_node(NodeData::Comment(text))
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        self.doc().create_node(NodeData::ProcessingInstruction)
    }

    fn append(&self, parent_id: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(id) => self.doc().append(*parent_id, id),
            NodeOrText::AppendText(text) => self.doc().append_text(*parent_id, text),
        }
    }

    // The tree builder promises we won't have a text node after the insertion point.
    fn append_before_sibling(&self, sibling_id: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        match new_node {
            NodeOrText::AppendNode(id) => self.doc().insert_before(*sibling_id, id),
            NodeOrText::AppendText(text) => self.doc().insert_text_before(*sibling_id, text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.doc().node_has_parent(*element);
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Doctypes are dropped by the tree builder options and never reach the AST
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents hang directly off the template element. The converter drops the
        // whole subtree, so there is no separate content fragment.
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<html5ever::Attribute>) {
        self.doc().add_attrs_if_missing(*target, attrs);
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.doc().detach(*target);
    }

    fn reparent_children(&self, old_parent_id: &Self::Handle, new_parent_id: &Self::Handle) {
        self.doc().reparent_children(*old_parent_id, *new_parent_id);
    }
}
