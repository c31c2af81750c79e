/// How to fill in an attribute the engine recorded without any value, such as `disabled` in
/// `<input disabled>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BooleanAttributePolicy {
    /// `disabled` -> `""`
    #[default]
    Empty,
    /// `disabled` -> `"disabled"`
    Name,
}

impl BooleanAttributePolicy {
    pub fn synthesize(self, name: &str) -> String {
        match self {
            BooleanAttributePolicy::Empty => String::new(),
            BooleanAttributePolicy::Name => name.to_string(),
        }
    }
}

/// Options used when constructing an [`HtmlParser`](crate::HtmlParser)
#[derive(Clone, Debug, Default)]
pub struct ParserConfig {
    /// Value synthesized for attributes without one
    pub boolean_attributes: BooleanAttributePolicy,
    /// Parse `<noscript>` contents as raw text, as a browser with scripting would
    pub scripting_enabled: bool,
    /// Ask html5ever for detailed parse error messages
    pub exact_errors: bool,
}
