//! Small-integer identifiers for the standard HTML tag set.
//!
//! Engines hand out a [`TagId`] per element. Ids below [`TagId::LAST_ENTRY`] index directly into
//! [`TAG_NAMES`]; anything else (custom elements, camel-cased SVG names, ...) is an
//! engine-specific dynamic id and has to be resolved from the element's raw local name.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// An engine's identifier for an element's tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub u32);

impl TagId {
    /// Unknown / not an element
    pub const UNDEF: TagId = TagId(0);
    /// First id past the static table. Engines allocate dynamic ids from here upwards.
    pub const LAST_ENTRY: TagId = TagId(TAG_COUNT as u32);

    /// Lookup the static id for a lowercase tag name.
    pub fn from_static_name(name: &str) -> Option<TagId> {
        TAG_INDEX.get(name).copied()
    }

    /// The interned name for this id, if it is part of the static table.
    #[inline]
    pub fn static_name(self) -> Option<&'static str> {
        TAG_NAMES
            .get(self.0 as usize)
            .copied()
            .filter(|name| !name.is_empty())
    }

    #[inline]
    pub fn is_static(self) -> bool {
        self.static_name().is_some()
    }
}

/// Number of entries in [`TAG_NAMES`], including the reserved slot 0.
pub const TAG_COUNT: usize = 137;

/// Dense id -> name table. Index 0 is reserved for [`TagId::UNDEF`].
pub static TAG_NAMES: [&str; TAG_COUNT] = [
    "",
    "a",
    "abbr",
    "acronym",
    "address",
    "applet",
    "area",
    "article",
    "aside",
    "audio",
    "b",
    "base",
    "basefont",
    "bdi",
    "bdo",
    "bgsound",
    "big",
    "blockquote",
    "body",
    "br",
    "button",
    "canvas",
    "caption",
    "center",
    "cite",
    "code",
    "col",
    "colgroup",
    "data",
    "datalist",
    "dd",
    "del",
    "details",
    "dfn",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "em",
    "embed",
    "fieldset",
    "figcaption",
    "figure",
    "font",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hgroup",
    "hr",
    "html",
    "i",
    "iframe",
    "image",
    "img",
    "input",
    "ins",
    "kbd",
    "label",
    "legend",
    "li",
    "link",
    "main",
    "map",
    "mark",
    "marquee",
    "math",
    "menu",
    "meta",
    "meter",
    "nav",
    "nobr",
    "noembed",
    "noframes",
    "noscript",
    "object",
    "ol",
    "optgroup",
    "option",
    "output",
    "p",
    "param",
    "picture",
    "plaintext",
    "pre",
    "progress",
    "q",
    "rb",
    "rp",
    "rt",
    "rtc",
    "ruby",
    "s",
    "samp",
    "script",
    "search",
    "section",
    "select",
    "slot",
    "small",
    "source",
    "span",
    "strike",
    "strong",
    "style",
    "sub",
    "summary",
    "sup",
    "svg",
    "table",
    "tbody",
    "td",
    "template",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "time",
    "title",
    "tr",
    "track",
    "tt",
    "u",
    "ul",
    "var",
    "video",
    "wbr",
    "xmp",
];

static TAG_INDEX: LazyLock<FxHashMap<&'static str, TagId>> = LazyLock::new(|| {
    TAG_NAMES
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(idx, name)| (*name, TagId(idx as u32)))
        .collect()
});
