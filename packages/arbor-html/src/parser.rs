use arbor_ast::Document;
use arbor_traits::{ForeignTree, HtmlEngine};

use crate::convert::{convert, convert_fragment};
use crate::{BooleanAttributePolicy, Html5everEngine, ParseError, ParserConfig};

/// Parses HTML into an Arbor [`Document`] using an [`HtmlEngine`].
///
/// Each call allocates its own engine document and drops it before returning, so a parser can
/// be reused freely.
#[derive(Clone, Debug)]
pub struct HtmlParser<E: HtmlEngine = Html5everEngine> {
    engine: E,
    boolean_attributes: BooleanAttributePolicy,
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl HtmlParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            engine: Html5everEngine::new(&config),
            boolean_attributes: config.boolean_attributes,
        }
    }
}

impl<E: HtmlEngine> HtmlParser<E> {
    /// Use a custom engine. Engine specific options are the engine's own concern.
    pub fn with_engine(engine: E, boolean_attributes: BooleanAttributePolicy) -> Self {
        Self {
            engine,
            boolean_attributes,
        }
    }

    /// Parse a complete document. The result contains the `html` element and everything the
    /// tree builder synthesized around the input.
    ///
    /// Failures are logged and yield an empty document.
    pub fn parse(&self, input: impl AsRef<[u8]>) -> Document {
        self.try_parse(input).unwrap_or_else(|err| {
            tracing::warn!("failed to parse html document: {err}");
            Document::default()
        })
    }

    /// Parse the input as the content of a `body` element. No `html`, `head` or `body`
    /// wrappers appear in the result.
    ///
    /// Failures are logged and yield an empty document.
    pub fn parse_fragment(&self, input: impl AsRef<[u8]>) -> Document {
        self.try_parse_fragment(input).unwrap_or_else(|err| {
            tracing::warn!("failed to parse html fragment: {err}");
            Document::default()
        })
    }

    pub fn try_parse(&self, input: impl AsRef<[u8]>) -> Result<Document, ParseError<E::Error>> {
        let input = input.as_ref();
        if input.is_empty() {
            return Ok(Document::default());
        }

        let mut document = self
            .engine
            .create_document()
            .map_err(ParseError::CreateDocument)?;
        self.engine
            .parse(&mut document, input)
            .map_err(ParseError::Parse)?;

        Ok(convert(&document, self.boolean_attributes))
    }

    pub fn try_parse_fragment(
        &self,
        input: impl AsRef<[u8]>,
    ) -> Result<Document, ParseError<E::Error>> {
        let input = input.as_ref();
        if input.is_empty() {
            return Ok(Document::default());
        }

        let mut document = self
            .engine
            .create_document()
            .map_err(ParseError::CreateDocument)?;

        // An empty parse gives us a body element to use as the fragment's context
        self.engine
            .parse(&mut document, b"")
            .map_err(ParseError::Parse)?;
        let context = document.body().ok_or(ParseError::MissingContext)?;

        let fragment_root = self
            .engine
            .parse_fragment(&mut document, context, input)
            .map_err(ParseError::Fragment)?;

        Ok(convert_fragment(
            &document,
            fragment_root,
            self.boolean_attributes,
        ))
    }
}
