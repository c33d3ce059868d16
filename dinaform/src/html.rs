//! Forgiving HTML fragment parser.
//!
//! Never fails: unclosed tags are closed at the end of input, stray end tags
//! are dropped, unterminated tags and comments run to the end of input.
//! `html`, `head` and `body` wrappers are transparent, so their contents become
//! top-level nodes. `script` and `style` contents are discarded.

/// Elements that never have children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose start tag implicitly closes an open `<p>`.
const CLOSES_PARAGRAPH: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "header", "hr", "menu", "nav", "ol", "p", "pre", "section",
    "table", "ul",
];

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

const TRANSPARENT_ELEMENTS: &[&str] = &["html", "head", "body"];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

/// Splits HTML into tokens. Comments, doctypes and processing instructions are skipped.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance past the next occurrence of `pattern`, or to the end of input.
    fn skip_past(&mut self, pattern: &str) {
        match self.rest().find(pattern) {
            Some(i) => self.pos += i + pattern.len(),
            None => self.pos = self.input.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.input[start..self.pos]
    }

    fn text(&mut self) -> Token {
        // A lone '<' that does not open a tag is literal text.
        let start = self.pos;
        self.bump();
        let end = match self.rest().find('<') {
            Some(i) => self.pos + i,
            None => self.input.len(),
        };
        self.pos = end;
        Token::Text(decode_entities(&self.input[start..end]))
    }

    fn end_tag(&mut self) -> Token {
        self.pos += 2;
        let name = self
            .take_while(|c| !c.is_ascii_whitespace() && c != '/' && c != '>')
            .to_ascii_lowercase();
        self.skip_past(">");
        Token::EndTag { name }
    }

    fn start_tag(&mut self) -> Token {
        self.pos += 1;
        let name = self
            .take_while(|c| !c.is_ascii_whitespace() && c != '/' && c != '>')
            .to_ascii_lowercase();
        let mut attrs: Vec<(String, String)> = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('>') => {
                    self.bump();
                    break;
                }
                Some('/') => {
                    self.bump();
                    if self.peek() == Some('>') {
                        self.bump();
                        self_closing = true;
                        break;
                    }
                }
                Some(_) => {
                    let attr_name = self
                        .take_while(|c| {
                            !c.is_ascii_whitespace() && c != '=' && c != '>' && c != '/'
                        })
                        .to_ascii_lowercase();
                    self.skip_whitespace();
                    let value = if self.peek() == Some('=') {
                        self.bump();
                        self.skip_whitespace();
                        self.attr_value()
                    } else {
                        String::new()
                    };
                    if !attr_name.is_empty() && !attrs.iter().any(|(n, _)| *n == attr_name) {
                        attrs.push((attr_name, value));
                    }
                }
            }
        }

        if RAW_TEXT_ELEMENTS.contains(&name.as_str()) && !self_closing {
            self.skip_raw_text(&name);
        }

        Token::StartTag {
            name,
            attrs,
            self_closing,
        }
    }

    fn attr_value(&mut self) -> String {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let raw = self.take_while(|c| c != quote);
                self.bump();
                decode_entities(raw)
            }
            _ => decode_entities(self.take_while(|c| !c.is_ascii_whitespace() && c != '>')),
        }
    }

    fn skip_raw_text(&mut self, name: &str) {
        let closing = format!("</{name}");
        let lower = self.rest().to_ascii_lowercase();
        match lower.find(&closing) {
            // The end tag itself is left for the next token.
            Some(i) => self.pos += i,
            None => self.pos = self.input.len(),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }
            if rest.starts_with("<!--") {
                self.pos += 4;
                self.skip_past("-->");
                continue;
            }
            let mut chars = rest.chars();
            chars.next();
            let second = chars.next();
            let third = chars.next();
            if !rest.starts_with('<') {
                let end = rest.find('<').unwrap_or(rest.len());
                self.pos += end;
                return Some(Token::Text(decode_entities(&rest[..end])));
            }
            match second {
                Some('!' | '?') => {
                    self.skip_past(">");
                    continue;
                }
                Some('/') if third.is_some_and(|c| c.is_ascii_alphabetic()) => {
                    return Some(self.end_tag());
                }
                Some('/') => {
                    // "</>" and friends are dropped.
                    self.skip_past(">");
                    continue;
                }
                Some(c) if c.is_ascii_alphabetic() => return Some(self.start_tag()),
                _ => return Some(self.text()),
            }
        }
    }
}

/// Decode character references. Unknown or unterminated references stay literal.
pub(crate) fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub(crate) name: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    fn new(name: String, attrs: Vec<(String, String)>) -> Self {
        Self {
            name,
            attrs,
            children: Vec::new(),
        }
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content of all descendants, with whitespace runs collapsed to one space.
    ///
    /// `br` and block children count as whitespace. Leading whitespace is
    /// dropped; a trailing run is kept as a single space.
    pub(crate) fn text(&self) -> String {
        let mut raw = String::new();
        self.collect_text(&mut raw);
        collapse_whitespace(raw.trim_start_matches(|c: char| c.is_ascii_whitespace()))
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) if e.name == "br" => out.push(' '),
                Node::Element(e) => {
                    let block = CLOSES_PARAGRAPH.contains(&e.name.as_str()) || e.name == "li";
                    if block {
                        out.push(' ');
                    }
                    e.collect_text(out);
                    if block {
                        out.push(' ');
                    }
                }
            }
        }
    }

    /// First descendant (depth-first, document order) matching `pred`.
    pub(crate) fn find_descendant(&self, pred: &impl Fn(&Element) -> bool) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Node::Element(e) if pred(e) => Some(e),
            Node::Element(e) => e.find_descendant(pred),
            Node::Text(_) => None,
        })
    }
}

pub(crate) fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Parse an HTML fragment into its top-level nodes.
pub(crate) fn parse_fragment(input: &str) -> Vec<Node> {
    let mut stack = vec![Element::new(String::new(), Vec::new())];

    for token in Tokenizer::new(input) {
        match token {
            Token::StartTag {
                name,
                attrs,
                self_closing,
            } => {
                if TRANSPARENT_ELEMENTS.contains(&name.as_str()) {
                    continue;
                }
                if CLOSES_PARAGRAPH.contains(&name.as_str()) {
                    close_named(&mut stack, "p");
                }
                if name == "li" {
                    close_named(&mut stack, "li");
                }
                // Headings never nest directly.
                if is_heading(&name) && stack.last().is_some_and(|top| is_heading(&top.name)) {
                    close_top(&mut stack);
                }
                let void = VOID_ELEMENTS.contains(&name.as_str());
                let element = Element::new(name, attrs);
                if void || self_closing {
                    append(&mut stack, Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Token::EndTag { name } => {
                if TRANSPARENT_ELEMENTS.contains(&name.as_str()) {
                    continue;
                }
                if is_heading(&name) {
                    // Any heading end tag closes the innermost open heading.
                    if let Some(open) = stack.iter().skip(1).rev().find(|e| is_heading(&e.name)) {
                        let open = open.name.clone();
                        close_named(&mut stack, &open);
                    }
                } else if name == "p" && !stack.iter().skip(1).any(|e| e.name == "p") {
                    // A stray `</p>` stands for an empty paragraph.
                    append(&mut stack, Node::Element(Element::new(name, Vec::new())));
                } else {
                    close_named(&mut stack, &name);
                }
            }
            Token::Text(text) => append(&mut stack, Node::Text(text)),
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().map(|root| root.children).unwrap_or_default()
}

fn append(stack: &mut [Element], node: Node) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    if let (Node::Text(new), Some(Node::Text(prev))) = (&node, parent.children.last_mut()) {
        prev.push_str(new);
        return;
    }
    parent.children.push(node);
}

fn close_top(stack: &mut Vec<Element>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(element) = stack.pop() {
        append(stack, Node::Element(element));
    }
}

fn is_heading(name: &str) -> bool {
    HEADINGS.contains(&name)
}

/// Close the innermost open element called `name` and everything opened after it.
/// Does nothing when no such element is open.
fn close_named(stack: &mut Vec<Element>, name: &str) {
    let Some(depth) = stack.iter().skip(1).rposition(|e| e.name == name) else {
        return;
    };
    // rposition over the skipped iterator is relative to index 1.
    let depth = depth + 1;
    while stack.len() > depth {
        close_top(stack);
    }
}
