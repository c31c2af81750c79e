use thiserror::Error;

/// Failures of the bundled html5ever engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("node {0} is not an element and cannot be a fragment context")]
    InvalidContext(usize),
    #[error("fragment parse produced no root element")]
    NoFragmentRoot,
}

/// Why a parse could not produce a document. `E` is the engine's error type.
#[derive(Error, Debug)]
pub enum ParseError<E: std::error::Error + 'static> {
    #[error("failed to create document: {0}")]
    CreateDocument(#[source] E),
    #[error("failed to parse document: {0}")]
    Parse(#[source] E),
    #[error("document has no body element to parse a fragment against")]
    MissingContext,
    #[error("failed to parse fragment: {0}")]
    Fragment(#[source] E),
}
