//! Section header interpreter.
//!
//! Only top-level elements of the header fragment are inspected:
//! `<h1>` becomes a heading, `<p>` a paragraph (plus an image when it contains
//! one), everything else is ignored.

use crate::html::{self, Element, Node};

/// A structured piece of a section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderBlock {
    /// Text of an `<h1>`, tags stripped.
    Heading(String),
    /// Text of a `<p>`, tags stripped.
    Paragraph(String),
    /// `src` of the first `<img>` inside a paragraph.
    Image(String),
}

/// Parse a section title into header blocks, in document order.
///
/// Never fails; malformed markup is parsed on a best-effort basis.
pub fn parse_section_header(html: &str) -> Vec<HeaderBlock> {
    let mut blocks = Vec::new();
    for node in html::parse_fragment(html) {
        let Node::Element(element) = node else {
            continue;
        };
        match element.name.as_str() {
            "h1" => blocks.push(HeaderBlock::Heading(element.text())),
            "p" => {
                blocks.push(HeaderBlock::Paragraph(element.text()));
                if let Some(src) = first_image_src(&element) {
                    blocks.push(HeaderBlock::Image(src));
                }
            }
            _ => {}
        }
    }
    blocks
}

fn first_image_src(paragraph: &Element) -> Option<String> {
    paragraph
        .find_descendant(&|e: &Element| {
            e.name == "img" && e.attr("src").is_some_and(|src| !src.trim().is_empty())
        })
        .and_then(|img| img.attr("src"))
        .map(|src| src.trim().to_string())
}
