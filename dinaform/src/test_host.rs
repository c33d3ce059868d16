//! Test host for asserting rendered forms without a UI toolkit.
//!
//! `TestHost` flattens a rendered form into one outline line per widget,
//! which makes ordering and content easy to compare.
//!
//! # Example
//!
//! ```rust
//! use dinaform::{FormHost, FormScreen, TestHost};
//!
//! let schema = r#"{
//!     "title": "Contact",
//!     "fields": [{"type": "email", "label": "Email", "required": true}],
//!     "sections": [{"title": "<h1>Contact</h1>", "from": 0, "to": 0, "index": 0}]
//! }"#;
//!
//! let lines = FormScreen::new().present(Some(schema), &TestHost::new()).unwrap();
//!
//! assert_eq!(
//!     lines,
//!     vec![
//!         "heading: Contact",
//!         "container: Email",
//!         "input[email]: Email ! Email is required",
//!     ]
//! );
//! ```

use std::convert::Infallible;

use dinaform_types::{FormHost, InputMode, RenderedForm, SpanStyle, Widget};

/// A host that turns every widget into a line of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestHost {
    with_sections: bool,
}

impl TestHost {
    /// Create a host that outlines widgets only.
    pub fn new() -> Self {
        Self {
            with_sections: false,
        }
    }

    /// Also emit a `section <index>` line before each section.
    pub fn with_sections(mut self) -> Self {
        self.with_sections = true;
        self
    }
}

impl FormHost for TestHost {
    type Output = Vec<String>;
    type Error = Infallible;

    fn materialize(&self, form: &RenderedForm) -> Result<Vec<String>, Infallible> {
        let mut lines = Vec::new();
        for section in &form.sections {
            if self.with_sections {
                lines.push(format!("section {}", section.index));
            }
            lines.extend(section.widgets().map(outline));
        }
        Ok(lines)
    }
}

/// One-line description of a widget.
pub fn outline(widget: &Widget) -> String {
    match widget {
        Widget::Heading(text) => format!("heading: {text}"),
        Widget::Paragraph(text) => format!("paragraph: {text}"),
        Widget::Image(image) => format!("image: {} @{}", image.src, image.width),
        Widget::InputContainer(prefix) => format!("container: {prefix}"),
        Widget::TextInput(input) => {
            let mode = match input.mode {
                InputMode::Text => "text",
                InputMode::Email => "email",
                InputMode::Password => "password",
                InputMode::Number => "number",
                InputMode::Date => "date",
            };
            with_suffix(format!("input[{mode}]: {}", input.hint), "!", &input.error)
        }
        Widget::Label(text) => format!("label: {text}"),
        Widget::RadioGroup(group) => format!("radio: {}", group.options.join(" | ")),
        Widget::ErrorSlot(slot) => {
            let state = if slot.visible { "visible" } else { "hidden" };
            with_suffix(format!("error-slot: {state}"), "!", &slot.message)
        }
        Widget::CheckboxGroup(group) => {
            let toggles: Vec<_> = group
                .toggles
                .iter()
                .map(|t| format!("{}={}", t.label, t.tag))
                .collect();
            with_suffix(
                format!("checkbox: {} [{}]", group.header, toggles.join(", ")),
                "!",
                &group.error,
            )
        }
        Widget::Dropdown(dropdown) => with_suffix(
            format!("dropdown: {}", dropdown.choices.join(" | ")),
            "?",
            &dropdown.prompt,
        ),
        Widget::RichTextEditor(editor) => {
            let toolbar: Vec<_> = editor.toolbar.iter().map(|a| a.label()).collect();
            let styles: Vec<_> = editor
                .content
                .spans()
                .iter()
                .map(|s| {
                    let style = match &s.style {
                        SpanStyle::Bold => "b".to_string(),
                        SpanStyle::Italic => "i".to_string(),
                        SpanStyle::Underline => "u".to_string(),
                        SpanStyle::Link(url) => format!("a({url})"),
                    };
                    format!("{style}{}..{}", s.start, s.end)
                })
                .collect();
            let mut line = format!("editor[{}]: {}", toolbar.join(" "), editor.content.text());
            if !styles.is_empty() {
                line.push_str(&format!(" {{{}}}", styles.join(", ")));
            }
            line
        }
    }
}

fn with_suffix(mut line: String, marker: &str, suffix: &Option<String>) -> String {
    if let Some(suffix) = suffix {
        line.push_str(&format!(" {marker} {suffix}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinaform_types::{Cluster, RenderedSection};

    #[test]
    fn empty_form_has_no_lines() {
        let lines = TestHost::new().materialize(&RenderedForm::empty()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn section_markers() {
        let form = RenderedForm {
            title: "T".into(),
            sections: vec![RenderedSection {
                index: 4,
                uuid: String::new(),
                header: vec![],
                clusters: vec![Cluster {
                    position: 0,
                    name: "n".into(),
                    uuid: String::new(),
                    widgets: vec![Widget::Label("L".into())],
                }],
            }],
        };
        let lines = TestHost::new().with_sections().materialize(&form).unwrap();
        assert_eq!(lines, vec!["section 4", "label: L"]);
    }
}
