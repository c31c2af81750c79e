use arbor_html::{
    BooleanAttributePolicy, Document, Element, HtmlParser, Node, ParserConfig, parse,
    parse_fragment, serialize,
};

fn tag_names(doc: &Document) -> Vec<&str> {
    doc.children()
        .iter()
        .filter_map(Node::as_element)
        .map(|el| el.tag_name())
        .collect()
}

#[test]
fn empty_input_yields_empty_document() {
    assert!(parse("").is_empty());
    assert!(parse_fragment("").is_empty());
    assert!(parse(b"").is_empty());
}

#[test]
fn paragraph_fragment() {
    let doc = parse_fragment("<p>Hello</p>");
    assert_eq!(doc.len(), 1);

    let p = doc.children()[0].as_element().unwrap();
    assert_eq!(p.tag_name(), "p");
    assert!(p.attributes().is_empty());
    assert_eq!(p.children(), [Node::Text("Hello".into())]);
}

#[test]
fn script_and_style_are_excluded() {
    let doc = parse_fragment("<div><script>x</script><p>y</p></div>");
    let div = doc.children()[0].as_element().unwrap();
    assert_eq!(div.children().len(), 1);
    assert_eq!(div.children()[0].as_element().unwrap().tag_name(), "p");

    let doc = parse_fragment("<style>p { color: red }</style><p>y</p>");
    assert_eq!(serialize(&doc), "<p>y</p>");

    let doc = parse_fragment("<template><p>hidden</p></template><p>shown</p>");
    assert_eq!(serialize(&doc), "<p>shown</p>");
}

#[test]
fn void_elements_have_no_children() {
    let doc = parse_fragment("<br><hr>");
    assert_eq!(tag_names(&doc), ["br", "hr"]);
    for node in doc.children() {
        assert!(node.as_element().unwrap().children().is_empty());
    }
}

#[test]
fn fragments_have_no_document_wrappers() {
    let doc = parse_fragment("<html><body><p>x</p></body></html>");
    assert_eq!(serialize(&doc), "<p>x</p>");

    for el in doc.descendant_elements() {
        assert!(!matches!(el.tag_name(), "html" | "head" | "body"));
    }
}

#[test]
fn full_document_has_html_head_and_body() {
    let doc = parse("<title>t</title><p>x</p>");
    assert_eq!(tag_names(&doc), ["html"]);
    assert_eq!(
        serialize(&doc),
        "<html><head><title>t</title></head><body><p>x</p></body></html>"
    );
}

#[test]
fn doctype_is_not_part_of_the_tree() {
    let doc = parse("<!DOCTYPE html><html><body>hi</body></html>");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.text_content(), "hi");
}

#[test]
fn implicit_tbody_is_kept() {
    let doc = parse_fragment("<table><tr><td>c</td></tr></table>");
    assert_eq!(
        serialize(&doc),
        "<table><tbody><tr><td>c</td></tr></tbody></table>"
    );
}

#[test]
fn entities_are_decoded() {
    let doc = parse_fragment("&amp; &#60; &#x3C;");
    assert_eq!(doc.children(), [Node::Text("& < <".into())]);
}

#[test]
fn comments_are_preserved() {
    let doc = parse_fragment("<p>a<!-- comment --></p><!---->");
    let p = doc.children()[0].as_element().unwrap();
    assert_eq!(p.children()[1], Node::Comment(" comment ".into()));
    assert_eq!(doc.children()[1], Node::Comment(String::new()));
}

#[test]
fn boolean_attributes_are_empty() {
    let doc = parse_fragment("<input disabled type=checkbox>");
    let input = doc.children()[0].as_element().unwrap();
    assert_eq!(input.attribute("disabled"), Some(""));
    assert_eq!(input.attribute("type"), Some("checkbox"));
}

#[test]
fn custom_and_foreign_tag_names_fall_back_to_local_name() {
    let doc = parse_fragment("<my-widget data-x=1>hi</my-widget>");
    let widget = doc.children()[0].as_element().unwrap();
    assert_eq!(widget.tag_name(), "my-widget");
    assert_eq!(widget.attribute("data-x"), Some("1"));

    let doc = parse_fragment("<svg><foreignObject></foreignObject></svg>");
    let svg = doc.children()[0].as_element().unwrap();
    assert_eq!(svg.tag_name(), "svg");
    assert_eq!(
        svg.children()[0].as_element().unwrap().tag_name(),
        "foreignObject"
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    let doc = parse_fragment(b"caf\xff");
    assert_eq!(doc.children(), [Node::Text("caf\u{FFFD}".into())]);
}

#[test]
fn attributes_are_sorted_and_unique() {
    let doc = parse_fragment(r#"<div id="x" class="a" data-z="1" class="b"></div>"#);
    assert_eq!(
        serialize(&doc),
        r#"<div class="a" data-z="1" id="x"></div>"#
    );
}

#[test]
fn noscript_follows_scripting_flag() {
    let html = "<noscript><p>x</p></noscript>";

    let doc = parse_fragment(html);
    assert_eq!(serialize(&doc), "<noscript><p>x</p></noscript>");

    let parser = HtmlParser::new(ParserConfig {
        scripting_enabled: true,
        ..Default::default()
    });
    let doc = parser.parse_fragment(html);
    let noscript = doc.children()[0].as_element().unwrap();
    assert_eq!(noscript.children(), [Node::Text("<p>x</p>".into())]);
}

#[test]
fn parser_is_reusable() {
    let parser = HtmlParser::new(ParserConfig {
        boolean_attributes: BooleanAttributePolicy::Name,
        ..Default::default()
    });
    assert_eq!(serialize(&parser.parse_fragment("<p>1</p>")), "<p>1</p>");
    assert_eq!(serialize(&parser.parse_fragment("<p>2</p>")), "<p>2</p>");
    assert!(parser.try_parse_fragment("").unwrap().is_empty());
}

#[test]
fn parse_large_document() {
    let mut html = String::from("<div>");
    for i in 1..=500 {
        html.push_str(&format!(
            r##"<p class="item">Paragraph {i} with <b>bold</b> and <a href="#{i}">link</a></p>"##
        ));
    }
    html.push_str("</div>");

    let doc = parse_fragment(&html);
    let div = doc.children()[0].as_element().unwrap();
    assert_eq!(div.children().len(), 500);

    let first = div.children()[0].as_element().unwrap();
    assert_eq!(first.tag_name(), "p");
    assert_eq!(first.attribute("class"), Some("item"));
    assert_eq!(first.text_content(), "Paragraph 1 with bold and link");

    let last = div.children()[499].as_element().unwrap();
    assert_eq!(last.tag_name(), "p");
    assert!(last.text_content().contains("500"));
    let link = last.children()[3].as_element().unwrap();
    assert_eq!(link.attribute("href"), Some("#500"));
}

#[test]
fn parse_many_siblings() {
    let items: String = (1..=100).map(|i| format!("<li>Item {i}</li>")).collect();
    let doc = parse_fragment(format!("<ul>{items}</ul>"));

    let ul = doc.children()[0].as_element().unwrap();
    assert_eq!(ul.children().len(), 100);
    assert!(ul.children().iter().all(|child| {
        child.as_element().is_some_and(|li| li.tag_name() == "li")
    }));
    assert_eq!(ul.children()[0].text_content(), "Item 1");
    assert_eq!(ul.children()[99].text_content(), "Item 100");
}

fn nested_divs(depth: usize) -> String {
    format!(
        "{}<p>deep</p>{}",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    )
}

fn innermost(doc: &Document, depth: usize) -> &Element {
    let mut el = doc.children()[0].as_element().unwrap();
    for _ in 1..depth {
        assert_eq!(el.tag_name(), "div");
        assert_eq!(el.children().len(), 1);
        el = el.children()[0].as_element().unwrap();
    }
    assert_eq!(el.tag_name(), "div");
    el.children()[0].as_element().unwrap()
}

#[test]
fn parse_deeply_nested() {
    const DEPTH: usize = 50;
    let html = nested_divs(DEPTH);
    let doc = parse_fragment(&html);

    let p = innermost(&doc, DEPTH);
    assert_eq!(p.tag_name(), "p");
    assert_eq!(p.text_content(), "deep");
    assert_eq!(serialize(&doc), html);
}

#[test]
fn thousands_of_nested_elements_do_not_overflow() {
    const DEPTH: usize = 5000;
    let html = nested_divs(DEPTH);
    let doc = parse_fragment(&html);

    let p = innermost(&doc, DEPTH);
    assert_eq!(p.text_content(), "deep");
    assert_eq!(doc.text_content(), "deep");
    assert_eq!(doc.descendant_elements().count(), DEPTH + 1);
    assert_eq!(serialize(&doc), html);
}

#[test]
fn foreign_attributes_keep_their_prefix() {
    let html = r#"<svg><a xlink:href="x" href="y"></a></svg>"#;
    let doc = parse_fragment(html);

    let svg = doc.children()[0].as_element().unwrap();
    let a = svg.children()[0].as_element().unwrap();
    assert_eq!(a.attribute("href"), Some("y"));
    assert_eq!(a.attribute("xlink:href"), Some("x"));
    assert_eq!(a.attributes().len(), 2);
    assert_eq!(serialize(&doc), r#"<svg><a href="y" xlink:href="x"></a></svg>"#);
}
