use crate::ForeignTree;

/// An HTML5 parsing engine which builds [`ForeignTree`]s.
///
/// A document handle is an owned value: destroying it means dropping it. Callers are expected to
/// keep it on the stack for the duration of a conversion so that it is released on every exit
/// path, including early returns.
pub trait HtmlEngine {
    type Document: ForeignTree;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Allocate a fresh, empty document handle.
    fn create_document(&self) -> Result<Self::Document, Self::Error>;

    /// Parse `input` as a complete document into `document`.
    fn parse(&self, document: &mut Self::Document, input: &[u8]) -> Result<(), Self::Error>;

    /// Parse `input` as the content of `context`, an element of `document`.
    ///
    /// Returns the root node of the fragment; its children are the parsed nodes.
    fn parse_fragment(
        &self,
        document: &mut Self::Document,
        context: <Self::Document as ForeignTree>::NodeId,
        input: &[u8],
    ) -> Result<<Self::Document as ForeignTree>::NodeId, Self::Error>;
}
