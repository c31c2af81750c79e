//! Semantic dispatch over the AST.
//!
//! Implement [`Visitor`] and override only the categories you care about: every category
//! method forwards to [`Visitor::visit_element`] unless overridden, and text and comment
//! nodes produce `Output::default()`.
//!
//! ```rust
//! use arbor_ast::{Document, Element, Node, Visitor};
//!
//! struct TextCollector;
//!
//! impl Visitor for TextCollector {
//!     type Output = String;
//!
//!     fn visit_text(&mut self, text: &str) -> String {
//!         text.to_string()
//!     }
//!
//!     fn visit_element(&mut self, element: &Element) -> String {
//!         element.children().iter().map(|child| child.accept(self)).collect()
//!     }
//! }
//!
//! let doc = Document::new(vec![Element::empty("p").with_child(Node::Text("hi".into())).into()]);
//! assert_eq!(doc.accept(&mut TextCollector), ["hi"]);
//! ```

use crate::{Document, Element, Node};

/// Well-known HTML roles recognised by [`Node::accept`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SemanticCategory {
    /// `h1`..`h6`, with the level 1-6
    Heading(u8),
    Paragraph,
    Link,
    List { ordered: bool },
    ListItem,
    Blockquote,
    CodeBlock,
    Table,
    Bold,
    Italic,
    InlineCode,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
    Image,
    LineBreak,
    HorizontalRule,
    /// Anything without a dedicated category (`div`, `span`, custom elements, ...)
    Generic,
}

impl SemanticCategory {
    /// Classify a tag name. Matching is exact, so names are expected to be lowercase already.
    pub fn of(tag_name: &str) -> Self {
        use SemanticCategory::*;
        match tag_name {
            "h1" => Heading(1),
            "h2" => Heading(2),
            "h3" => Heading(3),
            "h4" => Heading(4),
            "h5" => Heading(5),
            "h6" => Heading(6),
            "p" => Paragraph,
            "a" => Link,
            "ul" => List { ordered: false },
            "ol" => List { ordered: true },
            "li" => ListItem,
            "blockquote" => Blockquote,
            "pre" => CodeBlock,
            "table" => Table,
            "b" | "strong" => Bold,
            "i" | "em" => Italic,
            "code" => InlineCode,
            "u" | "ins" => Underline,
            "s" | "del" | "strike" => Strikethrough,
            "sub" => Subscript,
            "sup" => Superscript,
            "img" => Image,
            "br" => LineBreak,
            "hr" => HorizontalRule,
            _ => Generic,
        }
    }
}

pub trait Visitor {
    type Output: Default;

    /// Fallback for elements without a dedicated visit method.
    fn visit_element(&mut self, element: &Element) -> Self::Output;

    /// `h1`-`h6`. `level` is 1-6.
    fn visit_heading(&mut self, element: &Element, level: u8) -> Self::Output {
        let _ = level;
        self.visit_element(element)
    }

    fn visit_paragraph(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `a` elements. `href` is `None` when the attribute is missing.
    fn visit_link(&mut self, element: &Element, href: Option<&str>) -> Self::Output {
        let _ = href;
        self.visit_element(element)
    }

    /// `ul` and `ol`. `ordered` is true for `ol`.
    fn visit_list(&mut self, element: &Element, ordered: bool) -> Self::Output {
        let _ = ordered;
        self.visit_element(element)
    }

    fn visit_list_item(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    fn visit_blockquote(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `pre` elements
    fn visit_code_block(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    fn visit_table(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `b` and `strong`
    fn visit_bold(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `i` and `em`
    fn visit_italic(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// Inline `code`
    fn visit_inline_code(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `u` and `ins`
    fn visit_underline(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `s`, `del` and `strike`
    fn visit_strikethrough(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    fn visit_subscript(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    fn visit_superscript(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `img` elements. `src` and `alt` are `None` when the attributes are missing.
    fn visit_image(
        &mut self,
        element: &Element,
        src: Option<&str>,
        alt: Option<&str>,
    ) -> Self::Output {
        let _ = (src, alt);
        self.visit_element(element)
    }

    /// `br`
    fn visit_line_break(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    /// `hr`
    fn visit_horizontal_rule(&mut self, element: &Element) -> Self::Output {
        self.visit_element(element)
    }

    fn visit_text(&mut self, text: &str) -> Self::Output {
        let _ = text;
        Self::Output::default()
    }

    fn visit_comment(&mut self, text: &str) -> Self::Output {
        let _ = text;
        Self::Output::default()
    }
}

impl Element {
    /// The semantic category this element dispatches to.
    pub fn category(&self) -> SemanticCategory {
        SemanticCategory::of(self.tag_name())
    }

    /// Dispatch this element to the visitor method for its category.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self.category() {
            SemanticCategory::Heading(level) => visitor.visit_heading(self, level),
            SemanticCategory::Paragraph => visitor.visit_paragraph(self),
            SemanticCategory::Link => visitor.visit_link(self, self.attribute("href")),
            SemanticCategory::List { ordered } => visitor.visit_list(self, ordered),
            SemanticCategory::ListItem => visitor.visit_list_item(self),
            SemanticCategory::Blockquote => visitor.visit_blockquote(self),
            SemanticCategory::CodeBlock => visitor.visit_code_block(self),
            SemanticCategory::Table => visitor.visit_table(self),
            SemanticCategory::Bold => visitor.visit_bold(self),
            SemanticCategory::Italic => visitor.visit_italic(self),
            SemanticCategory::InlineCode => visitor.visit_inline_code(self),
            SemanticCategory::Underline => visitor.visit_underline(self),
            SemanticCategory::Strikethrough => visitor.visit_strikethrough(self),
            SemanticCategory::Subscript => visitor.visit_subscript(self),
            SemanticCategory::Superscript => visitor.visit_superscript(self),
            SemanticCategory::Image => {
                visitor.visit_image(self, self.attribute("src"), self.attribute("alt"))
            }
            SemanticCategory::LineBreak => visitor.visit_line_break(self),
            SemanticCategory::HorizontalRule => visitor.visit_horizontal_rule(self),
            SemanticCategory::Generic => visitor.visit_element(self),
        }
    }
}

impl Node {
    /// Dispatch this node to the appropriate visitor method based on its type and tag name.
    ///
    /// Only this node is visited; recursing into children is up to the visitor.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Text(text) => visitor.visit_text(text),
            Node::Comment(text) => visitor.visit_comment(text),
            Node::Element(element) => element.accept(visitor),
        }
    }
}

impl Document {
    /// Apply the visitor to each top-level node and collect the results.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Vec<V::Output> {
        self.children()
            .iter()
            .map(|child| child.accept(visitor))
            .collect()
    }
}
