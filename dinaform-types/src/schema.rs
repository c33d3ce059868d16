use std::fmt;

use serde::{Deserialize, Serialize};

/// The top-level structure of a form schema.
///
/// A schema is a flat, ordered list of fields plus an ordered list of sections
/// that group those fields by position. It's presentation-agnostic: the
/// renderer turns it into widget descriptors, and a host decides how they look.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form title.
    #[serde(default)]
    pub title: String,

    /// All fields, in schema order. Sections refer to them by position.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// All sections, in schema order.
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

impl FormSchema {
    /// Create a new schema.
    pub fn new(
        title: impl Into<String>,
        fields: Vec<FieldSpec>,
        sections: Vec<SectionSpec>,
    ) -> Self {
        Self {
            title: title.into(),
            fields,
            sections,
        }
    }

    /// Check if the schema has neither fields nor sections.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.sections.is_empty()
    }
}

/// A single input element specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The kind of field (serialized as the `type` tag).
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// User-facing label. For `description` fields this is an HTML fragment.
    pub label: String,

    /// Form key of the field.
    #[serde(default)]
    pub name: String,

    /// Whether the field must be filled in.
    #[serde(default)]
    pub required: bool,

    /// Unique identifier. Reserved; not used for lookups.
    #[serde(default)]
    pub uuid: String,

    /// Choices for radio, checkbox and dropdown fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionSpec>>,
}

impl FieldSpec {
    /// Create a new optional field with no options.
    pub fn new(kind: impl Into<FieldKind>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
            name: String::new(),
            required: false,
            uuid: String::new(),
            options: None,
        }
    }

    /// Set the form key.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the unique identifier.
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    /// Set the choices.
    pub fn with_options(mut self, options: Vec<OptionSpec>) -> Self {
        self.options = Some(options);
        self
    }

    /// The choices, or an empty slice when none were given.
    pub fn options(&self) -> &[OptionSpec] {
        self.options.as_deref().unwrap_or_default()
    }
}

/// The kind of a field, decoded from its string `type` tag.
///
/// Tags that are not recognised are kept verbatim in [`FieldKind::Unknown`];
/// the renderer treats them as plain text fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Date,
    Radio,
    Checkbox,
    Dropdown,
    Description,
    Unknown(String),
}

impl FieldKind {
    /// The schema tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::Description => "description",
            Self::Unknown(tag) => tag,
        }
    }

    /// Check if this kind consumes `options`.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox | Self::Dropdown)
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "date" => Self::Date,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "dropdown" => Self::Dropdown,
            "description" => Self::Description,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a radio, checkbox or dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Display text.
    pub label: String,

    /// Stored value when the option is selected.
    pub value: String,
}

impl OptionSpec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled group of fields, identified by a closed range of field positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Header as an HTML fragment.
    pub title: String,

    /// First field position (inclusive).
    pub from: i64,

    /// Last field position (inclusive).
    pub to: i64,

    /// Section identity; rendering follows ascending `index`.
    pub index: i64,

    #[serde(default)]
    pub uuid: String,
}

impl SectionSpec {
    /// Create a section covering field positions `from..=to`.
    pub fn new(title: impl Into<String>, from: i64, to: i64, index: i64) -> Self {
        Self {
            title: title.into(),
            from,
            to,
            index,
            uuid: String::new(),
        }
    }

    /// Set the unique identifier.
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    /// Check if the field at `position` falls inside this section.
    ///
    /// A section whose `from` is greater than its `to` contains nothing.
    pub fn contains(&self, position: usize) -> bool {
        i64::try_from(position).is_ok_and(|p| self.from <= p && p <= self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_from_known_tags() {
        assert_eq!(FieldKind::from("email"), FieldKind::Email);
        assert_eq!(FieldKind::from("description"), FieldKind::Description);
    }

    #[test]
    fn kind_keeps_unknown_tag() {
        let kind = FieldKind::from("color");
        assert_eq!(kind, FieldKind::Unknown("color".to_string()));
        assert_eq!(kind.as_str(), "color");
    }

    #[test]
    fn kind_tags_are_case_sensitive() {
        assert_eq!(FieldKind::from("Text"), FieldKind::Unknown("Text".to_string()));
    }

    #[test]
    fn choice_kinds() {
        assert!(FieldKind::Radio.is_choice());
        assert!(FieldKind::Dropdown.is_choice());
        assert!(!FieldKind::Date.is_choice());
    }

    #[test]
    fn options_default_to_empty() {
        let field = FieldSpec::new("text", "Name");
        assert!(field.options().is_empty());
    }

    #[test]
    fn section_contains_closed_range() {
        let section = SectionSpec::new("<h1>A</h1>", 1, 3, 0);
        assert!(!section.contains(0));
        assert!(section.contains(1));
        assert!(section.contains(3));
        assert!(!section.contains(4));
    }

    #[test]
    fn inverted_section_contains_nothing() {
        let section = SectionSpec::new("", 3, 1, 0);
        assert!((0..5).all(|p| !section.contains(p)));
    }

    #[test]
    fn negative_from_covers_start() {
        let section = SectionSpec::new("", -2, 0, 0);
        assert!(section.contains(0));
    }

    #[test]
    fn field_deserializes_type_tag() {
        let field: FieldSpec = serde_json::from_str(
            r#"{"type":"radio","label":"Sex","name":"sex","required":true,"uuid":"u1",
                "options":[{"label":"F","value":"f"}]}"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldKind::Radio);
        assert!(field.required);
        assert_eq!(field.options(), &[OptionSpec::new("F", "f")]);
    }

    #[test]
    fn field_missing_optional_keys() {
        let field: FieldSpec = serde_json::from_str(r#"{"type":"text","label":"Name"}"#).unwrap();
        assert_eq!(field.name, "");
        assert!(!field.required);
        assert_eq!(field.options, None);
    }
}
