//! The bundled [`HtmlEngine`], driving html5ever's tree builder.

use arbor_traits::{ForeignTree, HtmlEngine};
use html5ever::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;

use crate::document::ForeignDocument;
use crate::sink::ForeignSink;
use crate::{EngineError, ParserConfig};

#[derive(Clone, Copy, Debug, Default)]
pub struct Html5everEngine {
    scripting_enabled: bool,
    exact_errors: bool,
}

impl Html5everEngine {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            scripting_enabled: config.scripting_enabled,
            exact_errors: config.exact_errors,
        }
    }

    fn parse_opts(&self) -> ParseOpts {
        ParseOpts {
            tokenizer: TokenizerOpts {
                exact_errors: self.exact_errors,
                ..Default::default()
            },
            tree_builder: TreeBuilderOpts {
                exact_errors: self.exact_errors,
                scripting_enabled: self.scripting_enabled,
                drop_doctype: true,
                ..Default::default()
            },
        }
    }
}

impl HtmlEngine for Html5everEngine {
    type Document = ForeignDocument;
    type Error = EngineError;

    fn create_document(&self) -> Result<ForeignDocument, EngineError> {
        Ok(ForeignDocument::new())
    }

    fn parse(&self, document: &mut ForeignDocument, mut input: &[u8]) -> Result<(), EngineError> {
        let root = document.root();
        let sink = ForeignSink::new(document, root);
        html5ever::parse_document(sink, self.parse_opts())
            .from_utf8()
            .read_from(&mut input)?;
        Ok(())
    }

    fn parse_fragment(
        &self,
        document: &mut ForeignDocument,
        context: usize,
        mut input: &[u8],
    ) -> Result<usize, EngineError> {
        if document.element_name(context).is_none() {
            return Err(EngineError::InvalidContext(context));
        }

        // html5ever parses the fragment into a detached root, creating an `html` element
        // under it which holds the fragment's nodes
        let fragment = document.create_fragment_root();
        let sink = ForeignSink::new(document, fragment);
        html5ever::driver::parse_fragment_for_element(
            sink,
            self.parse_opts(),
            context,
            self.scripting_enabled,
            None,
        )
        .from_utf8()
        .read_from(&mut input)?;

        document
            .first_child(fragment)
            .ok_or(EngineError::NoFragmentRoot)
    }
}
