use crate::TagId;

/// The kind of a node in a foreign parse tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForeignNodeKind {
    /// A document or document-fragment root
    Document,
    Element,
    Text,
    Comment,
    /// Doctypes, processing instructions and anything else an engine may produce
    Other,
}

/// One entry in an element's attribute chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForeignAttribute<'a> {
    /// Namespace prefix bytes for foreign attributes such as `xlink:href`
    pub prefix: Option<&'a [u8]>,
    /// Raw local name bytes
    pub name: &'a [u8],
    /// Raw value bytes, or `None` when the engine recorded no value at all (e.g. `disabled`)
    pub value: Option<&'a [u8]>,
}

/// Read-only traversal over a tree built by an HTML engine.
///
/// Node handles are opaque and only meaningful for the tree they came from. Whether they are
/// raw pointers, arena indices or something else is up to the implementation. All borrowed
/// data is tied to `&self`, so nothing obtained through this trait can outlive the tree.
pub trait ForeignTree {
    type NodeId: Copy;

    type Attributes<'a>: Iterator<Item = ForeignAttribute<'a>>
    where
        Self: 'a;

    /// The document node
    fn root(&self) -> Self::NodeId;

    /// The `body` element of the document, if one has been created.
    fn body(&self) -> Option<Self::NodeId>;

    fn kind(&self, node: Self::NodeId) -> ForeignNodeKind;

    fn first_child(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    fn next_sibling(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// The engine's tag identifier. [`TagId::UNDEF`] for non-elements.
    fn tag_id(&self, node: Self::NodeId) -> TagId;

    /// Raw local-name bytes of an element.
    fn local_name(&self, node: Self::NodeId) -> Option<&[u8]>;

    /// The attribute chain of an element. Empty for non-elements.
    fn attributes(&self, node: Self::NodeId) -> Self::Attributes<'_>;

    /// Character data of a text or comment node.
    fn char_data(&self, node: Self::NodeId) -> Option<&[u8]>;

    /// Iterate the child chain of `node` via `first_child` / `next_sibling`.
    fn children(&self, node: Self::NodeId) -> Children<'_, Self> {
        Children {
            tree: self,
            next: self.first_child(node),
        }
    }
}

/// An iterator over the children of a node in a [`ForeignTree`].
pub struct Children<'a, T: ForeignTree + ?Sized> {
    tree: &'a T,
    next: Option<T::NodeId>,
}

impl<T: ForeignTree + ?Sized> Iterator for Children<'_, T> {
    type Item = T::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}
