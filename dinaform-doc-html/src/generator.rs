//! HTML document generator implementation.

use std::convert::Infallible;

use dinaform::{
    Alignment, Cluster, FormHost, ImageScale, InputMode, RenderedForm, RenderedSection, RichText,
    SpanStyle, ToolbarAction, Widget,
};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document. Falls back to the form title.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "dinaform".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// A host that materializes rendered forms as fillable HTML.
#[derive(Debug, Clone)]
pub struct HtmlHost {
    options: HtmlOptions,
}

impl Default for HtmlHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlHost {
    /// Create a host with default options.
    pub fn new() -> Self {
        Self::with_options(HtmlOptions::new())
    }

    /// Create a host with custom options.
    pub fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl FormHost for HtmlHost {
    type Output = String;
    type Error = Infallible;

    fn materialize(&self, form: &RenderedForm) -> Result<String, Infallible> {
        Ok(generate_html(form, &self.options))
    }
}

/// Generate an HTML document from a rendered form with default options.
pub fn to_html(form: &RenderedForm) -> String {
    generate_html(form, &HtmlOptions::new())
}

/// Generate HTML with custom options.
pub fn to_html_with_options(form: &RenderedForm, options: HtmlOptions) -> String {
    generate_html(form, &options)
}

fn generate_html(form: &RenderedForm, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let title = options
        .title
        .as_deref()
        .unwrap_or(&form.title)
        .trim()
        .to_string();

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if !title.is_empty() {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(&title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\">\n"));

    if !title.is_empty() {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(&title)
        ));
    }

    for section in &form.sections {
        html.push_str(&generate_section(section, prefix));
    }

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

fn generate_section(section: &RenderedSection, prefix: &str) -> String {
    let mut html = format!(
        "  <section class=\"{prefix}-section\" data-index=\"{}\"{}>\n",
        section.index,
        data_uuid(&section.uuid)
    );

    if !section.header.is_empty() {
        html.push_str(&format!("    <header class=\"{prefix}-header\">\n"));
        for widget in section.header.iter().filter(|w| w.is_header()) {
            html.push_str(&generate_header_widget(widget, prefix, 3));
        }
        html.push_str("    </header>\n");
    }

    for cluster in &section.clusters {
        html.push_str(&generate_cluster(cluster, prefix, 2));
    }

    html.push_str("  </section>\n");
    html
}

fn generate_header_widget(widget: &Widget, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    match widget {
        Widget::Heading(text) => format!(
            "{ind}<h2 class=\"{prefix}-heading\">{}</h2>\n",
            escape_html(text)
        ),
        Widget::Paragraph(text) => format!(
            "{ind}<p class=\"{prefix}-paragraph\">{}</p>\n",
            escape_html(text)
        ),
        Widget::Image(image) => {
            let align = match image.alignment {
                Alignment::Center => "center",
            };
            let fit = match image.scale {
                ImageScale::FitCenter => "contain",
            };
            format!(
                "{ind}<img class=\"{prefix}-image {prefix}-{align}\" src=\"{}\" width=\"{}\" style=\"object-fit: {fit}\" alt=\"\">\n",
                escape_html(&image.src),
                image.width
            )
        }
        // Headers only ever hold the three kinds above.
        _ => String::new(),
    }
}

/// Generate HTML for one field cluster.
fn generate_cluster(cluster: &Cluster, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let field_id = field_id(cluster);
    let name = escape_html(&cluster.name);

    let mut html = format!(
        "{ind}<div class=\"{prefix}-field\" data-position=\"{}\"{}>\n",
        cluster.position,
        data_uuid(&cluster.uuid)
    );

    for widget in &cluster.widgets {
        html.push_str(&generate_widget(widget, &field_id, &name, prefix, indent + 1));
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

fn generate_widget(
    widget: &Widget,
    field_id: &str,
    name: &str,
    prefix: &str,
    indent: usize,
) -> String {
    let ind = "  ".repeat(indent);
    let mut html = String::new();

    match widget {
        Widget::Heading(_) | Widget::Paragraph(_) | Widget::Image(_) => {
            html.push_str(&generate_header_widget(widget, prefix, indent));
        }

        Widget::InputContainer(label) | Widget::Label(label) => {
            html.push_str(&format!(
                "{ind}<label for=\"{field_id}\" class=\"{prefix}-label\">{}</label>\n",
                escape_html(label)
            ));
        }

        Widget::TextInput(input) => {
            let mode = input.mode;
            let kind = if mode.is_masked() {
                "password"
            } else if mode.is_numeric() {
                "number"
            } else if mode == InputMode::Email {
                "email"
            } else {
                "text"
            };
            let mut attrs = format!(
                "type=\"{kind}\" id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\" placeholder=\"{}\"",
                escape_html(&input.hint)
            );
            if mode.is_read_only() {
                // Filled through the picker only, as D/M/YYYY.
                attrs.push_str(" readonly data-picker=\"date\" data-format=\"D/M/YYYY\"");
            }
            if input.error.is_some() {
                attrs.push_str(" required");
            }
            html.push_str(&format!("{ind}<input {attrs}>\n"));
            html.push_str(&generate_error(input.error.as_deref(), true, false, prefix, &ind));
        }

        Widget::RadioGroup(group) => {
            html.push_str(&format!(
                "{ind}<fieldset id=\"{field_id}\" class=\"{prefix}-fieldset {prefix}-radio\">\n"
            ));
            for (idx, option) in group.options.iter().enumerate() {
                let option_id = format!("{field_id}-{idx}");
                html.push_str(&format!("{ind}  <div class=\"{prefix}-radio-option\">\n"));
                html.push_str(&format!(
                    "{ind}    <input type=\"radio\" id=\"{option_id}\" name=\"{name}\" value=\"{idx}\">\n"
                ));
                html.push_str(&format!(
                    "{ind}    <label for=\"{option_id}\">{}</label>\n",
                    escape_html(option)
                ));
                html.push_str(&format!("{ind}  </div>\n"));
            }
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        Widget::ErrorSlot(slot) => {
            html.push_str(&generate_error(
                slot.message.as_deref(),
                slot.visible,
                slot.clears_on_selection,
                prefix,
                &ind,
            ));
        }

        Widget::CheckboxGroup(group) => {
            html.push_str(&format!(
                "{ind}<fieldset id=\"{field_id}\" class=\"{prefix}-fieldset {prefix}-checkbox\">\n"
            ));
            html.push_str(&format!(
                "{ind}  <legend>{}</legend>\n",
                escape_html(&group.header)
            ));
            for (idx, toggle) in group.toggles.iter().enumerate() {
                let option_id = format!("{field_id}-{idx}");
                html.push_str(&format!(
                    "{ind}  <div class=\"{prefix}-checkbox-option\">\n"
                ));
                html.push_str(&format!(
                    "{ind}    <input type=\"checkbox\" id=\"{option_id}\" name=\"{name}[]\" value=\"{}\">\n",
                    escape_html(&toggle.tag)
                ));
                html.push_str(&format!(
                    "{ind}    <label for=\"{option_id}\">{}</label>\n",
                    escape_html(&toggle.label)
                ));
                html.push_str(&format!("{ind}  </div>\n"));
            }
            html.push_str(&generate_error(
                group.error.as_deref(),
                true,
                false,
                prefix,
                &format!("{ind}  "),
            ));
            html.push_str(&format!("{ind}</fieldset>\n"));
        }

        Widget::Dropdown(dropdown) => {
            html.push_str(&format!(
                "{ind}<select id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-select\">\n"
            ));
            if let Some(prompt) = &dropdown.prompt {
                html.push_str(&format!(
                    "{ind}  <option value=\"\" disabled selected>{}</option>\n",
                    escape_html(prompt)
                ));
            }
            for (idx, choice) in dropdown.choices.iter().enumerate() {
                html.push_str(&format!(
                    "{ind}  <option value=\"{idx}\">{}</option>\n",
                    escape_html(choice)
                ));
            }
            html.push_str(&format!("{ind}</select>\n"));
        }

        Widget::RichTextEditor(editor) => {
            html.push_str(&format!("{ind}<div class=\"{prefix}-editor\">\n"));
            html.push_str(&format!("{ind}  <div class=\"{prefix}-toolbar\">\n"));
            for action in &editor.toolbar {
                html.push_str(&format!(
                    "{ind}    <button type=\"button\" data-action=\"{}\">{}</button>\n",
                    action_name(*action),
                    action.label()
                ));
            }
            html.push_str(&format!("{ind}  </div>\n"));
            html.push_str(&format!(
                "{ind}  <div id=\"{field_id}\" class=\"{prefix}-editor-content\" contenteditable=\"true\">{}</div>\n",
                rich_text_markup(&editor.content)
            ));
            html.push_str(&format!("{ind}</div>\n"));
        }
    }

    html
}

fn generate_error(
    message: Option<&str>,
    visible: bool,
    clears_on_selection: bool,
    prefix: &str,
    ind: &str,
) -> String {
    // Text inputs and checkbox groups only get a slot when there is a message.
    if message.is_none() && visible {
        return String::new();
    }
    let hidden = if visible { "" } else { " hidden" };
    let clears = if clears_on_selection {
        " data-clears-on-selection"
    } else {
        ""
    };
    format!(
        "{ind}<span class=\"{prefix}-error\"{hidden}{clears}>{}</span>\n",
        escape_html(message.unwrap_or_default())
    )
}

fn action_name(action: ToolbarAction) -> &'static str {
    match action {
        ToolbarAction::Bold => "bold",
        ToolbarAction::Italic => "italic",
        ToolbarAction::Underline => "underline",
        ToolbarAction::Link => "link",
    }
}

/// Render annotated text as inline markup.
///
/// The text is cut at every span boundary and each piece is wrapped in the
/// tags of the spans covering it, outermost first.
fn rich_text_markup(content: &RichText) -> String {
    let mut cuts: Vec<usize> = vec![0, content.len()];
    for span in content.spans() {
        cuts.push(span.start);
        cuts.push(span.end);
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut html = String::new();
    for window in cuts.windows(2) {
        let (start, end) = (window[0], window[1]);
        let styles = content.styles_at(start);

        let mut piece = escape_html(&content.slice(start, end)).replace('\n', "<br>");
        for style in styles.iter().rev() {
            piece = match style {
                SpanStyle::Bold => format!("<b>{piece}</b>"),
                SpanStyle::Italic => format!("<i>{piece}</i>"),
                SpanStyle::Underline => format!("<u>{piece}</u>"),
                SpanStyle::Link(url) => format!("<a href=\"{}\">{piece}</a>", escape_html(url)),
            };
        }
        html.push_str(&piece);
    }
    html
}

/// A DOM id for a cluster: its field name, or its position when unnamed.
fn field_id(cluster: &Cluster) -> String {
    let id: String = cluster
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
        .collect();
    if id.is_empty() {
        format!("field-{}", cluster.position)
    } else {
        id
    }
}

fn data_uuid(uuid: &str) -> String {
    if uuid.is_empty() {
        String::new()
    } else {
        format!(" data-uuid=\"{}\"", escape_html(uuid))
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-section {{
      margin: 1.5rem 0;
    }}
    .{prefix}-image {{
      display: block;
      max-width: 100%;
    }}
    .{prefix}-center {{
      margin: 0 auto;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
    }}
    .{prefix}-label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-input, .{prefix}-select {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-fieldset {{
      margin: 1rem 0;
      padding: 1rem;
    }}
    .{prefix}-radio-option, .{prefix}-checkbox-option {{
      margin: 0.25rem 0;
    }}
    .{prefix}-error {{
      color: #b00020;
      font-size: 0.875rem;
    }}
    .{prefix}-editor {{
      border: 1px solid #ccc;
    }}
    .{prefix}-toolbar {{
      display: flex;
      gap: 0.25rem;
      padding: 0.25rem;
      border-bottom: 1px solid #ccc;
    }}
    .{prefix}-editor-content {{
      min-height: 6rem;
      padding: 0.5rem;
      white-space: pre-wrap;
    }}
  </style>
"#
    )
}
