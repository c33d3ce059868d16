//! Seeding editor content from HTML.

use dinaform_types::{RichText, Span, SpanStyle};

use crate::html::{self, Element, Node};

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote", "pre",
];

/// Interpret an HTML fragment as styled text.
///
/// Compact rendering: blocks are separated by a single newline, `<br>` is a
/// newline, whitespace inside text collapses. `b`/`strong` are bold,
/// `i`/`em`/`cite`/`dfn` italic, `u`/`ins` underlined, `a href` a link.
/// Unknown tags contribute only their text.
pub fn from_html(html: &str) -> RichText {
    let mut builder = Builder::default();
    builder.nodes(&html::parse_fragment(html));
    builder.finish()
}

#[derive(Default)]
struct Builder {
    text: String,
    len: usize,
    spans: Vec<Span>,
    pending_break: bool,
}

impl Builder {
    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(t) => self.text(t),
                Node::Element(e) => self.element(e),
            }
        }
    }

    fn element(&mut self, element: &Element) {
        let name = element.name.as_str();
        if name == "br" {
            self.push_char('\n');
            return;
        }

        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            self.pending_break = true;
        }

        let start = self.len;
        self.nodes(&element.children);

        if let Some(style) = style_for(element) {
            if self.len > start {
                self.spans.push(Span::new(start, self.len, style));
            }
        }
        if block {
            self.pending_break = true;
        }
    }

    fn text(&mut self, raw: &str) {
        for c in html::collapse_whitespace(raw).chars() {
            if c == ' ' && (self.pending_break || self.text.is_empty() || self.text.ends_with([' ', '\n'])) {
                continue;
            }
            if self.pending_break {
                if !self.text.is_empty() && !self.text.ends_with('\n') {
                    self.push_char('\n');
                }
                self.pending_break = false;
            }
            self.push_char(c);
        }
    }

    fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.len += 1;
    }

    fn finish(mut self) -> RichText {
        self.spans.sort_by_key(|s| s.start);
        RichText::with_spans(self.text, self.spans)
    }
}

fn style_for(element: &Element) -> Option<SpanStyle> {
    match element.name.as_str() {
        "b" | "strong" => Some(SpanStyle::Bold),
        "i" | "em" | "cite" | "dfn" => Some(SpanStyle::Italic),
        "u" | "ins" => Some(SpanStyle::Underline),
        "a" => element.attr("href").map(|href| SpanStyle::Link(href.to_string())),
        _ => None,
    }
}
