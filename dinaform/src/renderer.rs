//! Schema to widget descriptor rendering.

use dinaform_types::{
    CheckboxGroup, Cluster, Dropdown, ErrorSlot, FieldKind, FieldSpec, FormSchema, ImageWidget,
    InputMode, RadioGroup, RenderedForm, RenderedSection, RichTextEditor, SectionSpec, TextInput,
    Toggle, Widget,
};
use tracing::debug;

use crate::{HeaderBlock, RenderOptions, parse_section_header, rich_text};

/// Renders schemas into immutable widget descriptor trees.
#[derive(Debug, Clone, Default)]
pub struct FormRenderer {
    options: RenderOptions,
}

impl FormRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a schema.
    ///
    /// Sections are emitted in ascending `index` order (schema order among
    /// equal indices), each with its header followed by one cluster per field
    /// it contains. Fields outside every section are dropped.
    pub fn render(&self, schema: &FormSchema) -> RenderedForm {
        let assignment = assign_sections(&schema.fields, &schema.sections);

        let mut members: Vec<Vec<usize>> = vec![Vec::new(); schema.sections.len()];
        for (position, section) in assignment.iter().enumerate() {
            match section {
                Some(section) => members[*section].push(position),
                None => debug!(position, "field is outside every section, dropping it"),
            }
        }

        let mut order: Vec<usize> = (0..schema.sections.len()).collect();
        order.sort_by_key(|&i| schema.sections[i].index);

        let sections: Vec<RenderedSection> = order
            .into_iter()
            .map(|i| {
                let section = &schema.sections[i];
                RenderedSection {
                    index: section.index,
                    uuid: section.uuid.clone(),
                    header: self.header_widgets(&section.title),
                    clusters: members[i]
                        .iter()
                        .map(|&position| build_cluster(position, &schema.fields[position]))
                        .collect(),
                }
            })
            .collect();

        debug!(
            sections = sections.len(),
            clusters = sections.iter().map(|s| s.clusters.len()).sum::<usize>(),
            "rendered form"
        );

        RenderedForm {
            title: schema.title.clone(),
            sections,
        }
    }

    /// Header widgets for a section title.
    pub fn header_widgets(&self, title: &str) -> Vec<Widget> {
        parse_section_header(title)
            .into_iter()
            .map(|block| match block {
                HeaderBlock::Heading(text) => Widget::Heading(text),
                HeaderBlock::Paragraph(text) => Widget::Paragraph(text),
                HeaderBlock::Image(src) => {
                    Widget::Image(ImageWidget::new(src, self.options.image_width()))
                }
            })
            .collect()
    }
}

/// Render a schema with default options.
pub fn render(schema: &FormSchema) -> RenderedForm {
    FormRenderer::new().render(schema)
}

/// Map every field position to the section (by position in `sections`) that owns it.
///
/// The first section in schema order whose range contains a field wins;
/// later overlapping sections don't get it.
pub fn assign_sections(fields: &[FieldSpec], sections: &[SectionSpec]) -> Vec<Option<usize>> {
    let mut assignment = vec![None; fields.len()];
    let Some(last) = fields.len().checked_sub(1) else {
        return assignment;
    };
    let last = i64::try_from(last).unwrap_or(i64::MAX);

    for (i, section) in sections.iter().enumerate() {
        let from = section.from.max(0);
        let to = section.to.min(last);
        if from > to {
            continue;
        }
        // Both bounds are within 0..=last here.
        for position in from as usize..=to as usize {
            match assignment[position] {
                None => assignment[position] = Some(i),
                Some(owner) => debug!(
                    position,
                    owner,
                    section = i,
                    "field is claimed by overlapping sections, keeping the first"
                ),
            }
        }
    }
    assignment
}

/// The message attached to an empty required field.
pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}

fn build_cluster(position: usize, field: &FieldSpec) -> Cluster {
    if field.kind.is_choice() && field.options().is_empty() {
        debug!(position, kind = %field.kind, "choice field has no options");
    }
    let widgets = build_field(field);
    debug!(
        position,
        widgets = ?widgets.iter().map(Widget::kind_name).collect::<Vec<_>>(),
        "built field"
    );
    Cluster {
        position,
        name: field.name.clone(),
        uuid: field.uuid.clone(),
        widgets,
    }
}

/// Build the widgets for one field, in display order.
///
/// Pure: the same field always yields the same widgets.
pub fn build_field(field: &FieldSpec) -> Vec<Widget> {
    match &field.kind {
        FieldKind::Text => text_input(field, InputMode::Text),
        FieldKind::Email => text_input(field, InputMode::Email),
        FieldKind::Password => text_input(field, InputMode::Password),
        FieldKind::Number => text_input(field, InputMode::Number),
        FieldKind::Date => text_input(field, InputMode::Date),
        FieldKind::Radio => radio(field),
        FieldKind::Checkbox => checkbox(field),
        FieldKind::Dropdown => dropdown(field),
        FieldKind::Description => description(field),
        FieldKind::Unknown(_) => text_input(field, InputMode::Text),
    }
}

fn required_error(field: &FieldSpec) -> Option<String> {
    field.required.then(|| required_message(&field.label))
}

fn text_input(field: &FieldSpec, mode: InputMode) -> Vec<Widget> {
    vec![
        Widget::InputContainer(field.label.clone()),
        Widget::TextInput(TextInput {
            hint: field.label.clone(),
            mode,
            error: required_error(field),
        }),
    ]
}

fn radio(field: &FieldSpec) -> Vec<Widget> {
    // The slot is only ever cleared, never filled.
    vec![
        Widget::Label(field.label.clone()),
        Widget::RadioGroup(RadioGroup {
            options: field.options().iter().map(|o| o.label.clone()).collect(),
        }),
        Widget::ErrorSlot(ErrorSlot::hidden(field.required)),
    ]
}

fn checkbox(field: &FieldSpec) -> Vec<Widget> {
    vec![Widget::CheckboxGroup(CheckboxGroup {
        header: field.label.clone(),
        toggles: field
            .options()
            .iter()
            .map(|o| Toggle {
                label: o.label.clone(),
                tag: o.value.clone(),
            })
            .collect(),
        error: required_error(field),
    })]
}

fn dropdown(field: &FieldSpec) -> Vec<Widget> {
    vec![
        Widget::Label(field.label.clone()),
        Widget::Dropdown(Dropdown {
            choices: field.options().iter().map(|o| o.label.clone()).collect(),
            prompt: required_error(field),
        }),
    ]
}

fn description(field: &FieldSpec) -> Vec<Widget> {
    vec![Widget::RichTextEditor(RichTextEditor::new(
        rich_text::from_html(&field.label),
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinaform_types::{OptionSpec, SpanStyle, ToolbarAction};

    fn fields(n: usize) -> Vec<FieldSpec> {
        (0..n)
            .map(|i| FieldSpec::new("text", format!("F{i}")).with_name(format!("f{i}")))
            .collect()
    }

    #[test]
    fn required_text_field() {
        let widgets = build_field(&FieldSpec::new("text", "Name").required());
        assert_eq!(
            widgets,
            vec![
                Widget::InputContainer("Name".into()),
                Widget::TextInput(TextInput {
                    hint: "Name".into(),
                    mode: InputMode::Text,
                    error: Some("Name is required".into()),
                }),
            ]
        );
    }

    #[test]
    fn input_modes_by_kind() {
        let mode = |kind: &str| match &build_field(&FieldSpec::new(kind, "L"))[1] {
            Widget::TextInput(input) => input.mode,
            other => panic!("expected text input, got {other:?}"),
        };
        assert_eq!(mode("email"), InputMode::Email);
        assert_eq!(mode("password"), InputMode::Password);
        assert_eq!(mode("number"), InputMode::Number);
        assert_eq!(mode("date"), InputMode::Date);
        assert_eq!(mode("color"), InputMode::Text);
    }

    #[test]
    fn unknown_kind_falls_back_to_text() {
        let unknown = FieldSpec::new("signature", "Sign").required();
        let text = FieldSpec::new("text", "Sign").required();
        assert_eq!(build_field(&unknown), build_field(&text));
    }

    #[test]
    fn optional_text_field_has_no_error() {
        match &build_field(&FieldSpec::new("email", "Mail"))[1] {
            Widget::TextInput(input) => assert_eq!(input.error, None),
            other => panic!("expected text input, got {other:?}"),
        }
    }

    #[test]
    fn radio_error_slot_is_hidden_even_when_required() {
        let field = FieldSpec::new("radio", "Sex")
            .required()
            .with_options(vec![OptionSpec::new("F", "f"), OptionSpec::new("M", "m")]);
        assert_eq!(
            build_field(&field),
            vec![
                Widget::Label("Sex".into()),
                Widget::RadioGroup(RadioGroup {
                    options: vec!["F".into(), "M".into()],
                }),
                Widget::ErrorSlot(ErrorSlot {
                    message: None,
                    visible: false,
                    clears_on_selection: true,
                }),
            ]
        );
    }

    #[test]
    fn checkbox_toggles_carry_values() {
        let field = FieldSpec::new("checkbox", "Pick")
            .with_options(vec![OptionSpec::new("A", "a"), OptionSpec::new("B", "b")]);
        let widgets = build_field(&field);
        assert_eq!(widgets.len(), 1);
        let Widget::CheckboxGroup(group) = &widgets[0] else {
            panic!("expected checkbox group");
        };
        let tags: Vec<_> = group.toggles.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert_eq!(group.error, None);
    }

    #[test]
    fn required_checkbox_shows_error() {
        let field = FieldSpec::new("checkbox", "Pick").required();
        let Widget::CheckboxGroup(group) = &build_field(&field)[0] else {
            panic!("expected checkbox group");
        };
        assert!(group.toggles.is_empty());
        assert_eq!(group.error.as_deref(), Some("Pick is required"));
    }

    #[test]
    fn dropdown_carries_labels_only() {
        let field = FieldSpec::new("dropdown", "Country")
            .required()
            .with_options(vec![OptionSpec::new("X", "1")]);
        assert_eq!(
            build_field(&field),
            vec![
                Widget::Label("Country".into()),
                Widget::Dropdown(Dropdown {
                    choices: vec!["X".into()],
                    prompt: Some("Country is required".into()),
                }),
            ]
        );
    }

    #[test]
    fn options_on_text_field_are_ignored() {
        let field = FieldSpec::new("text", "T").with_options(vec![OptionSpec::new("X", "1")]);
        assert_eq!(build_field(&field), build_field(&FieldSpec::new("text", "T")));
    }

    #[test]
    fn description_editor_ignores_required() {
        let field = FieldSpec::new("description", "<b>Notes</b>").required();
        let widgets = build_field(&field);
        let [Widget::RichTextEditor(editor)] = widgets.as_slice() else {
            panic!("expected a single editor");
        };
        assert_eq!(editor.toolbar, ToolbarAction::ALL.to_vec());
        assert_eq!(editor.content.text(), "Notes");
        assert_eq!(editor.content.styles_at(0), vec![&SpanStyle::Bold]);
    }

    #[test]
    fn assignment_first_section_wins() {
        let sections = vec![
            SectionSpec::new("", 0, 2, 0),
            SectionSpec::new("", 1, 3, 1),
        ];
        assert_eq!(
            assign_sections(&fields(5), &sections),
            vec![Some(0), Some(0), Some(0), Some(1), None]
        );
    }

    #[test]
    fn assignment_clips_out_of_range_sections() {
        let sections = vec![
            SectionSpec::new("", -5, 0, 0),
            SectionSpec::new("", 2, 99, 1),
            SectionSpec::new("", 10, 12, 2),
        ];
        assert_eq!(
            assign_sections(&fields(3), &sections),
            vec![Some(0), None, Some(1)]
        );
    }

    #[test]
    fn assignment_without_fields() {
        assert!(assign_sections(&[], &[SectionSpec::new("", 0, 3, 0)]).is_empty());
    }

    #[test]
    fn sections_render_in_index_order() {
        let schema = FormSchema::new(
            "T",
            fields(2),
            vec![
                SectionSpec::new("<h1>B</h1>", 1, 1, 7),
                SectionSpec::new("<h1>A</h1>", 0, 0, 3),
            ],
        );
        let form = render(&schema);
        let indices: Vec<_> = form.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![3, 7]);
        assert_eq!(form.sections[0].header, vec![Widget::Heading("A".into())]);
        assert_eq!(form.sections[0].clusters[0].name, "f0");
    }

    #[test]
    fn header_images_are_sized_from_viewport() {
        let renderer = FormRenderer::with_options(RenderOptions::new().with_viewport_width(800));
        let widgets = renderer.header_widgets("<p>x<img src=a.png></p>");
        assert_eq!(widgets[1], Widget::Image(ImageWidget::new("a.png", 400)));
    }

    #[test]
    fn section_without_fields_still_shows_header() {
        let schema = FormSchema::new("T", vec![], vec![SectionSpec::new("<h1>Only</h1>", 0, 0, 0)]);
        let form = render(&schema);
        assert_eq!(form.sections.len(), 1);
        assert!(form.sections[0].clusters.is_empty());
    }
}
