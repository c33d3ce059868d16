use crate::{RichText, RichTextError, TextStyle};

/// A toolkit-agnostic description of one widget.
///
/// Hosts materialize these in order; nothing here refers to a concrete UI
/// toolkit.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Section header `<h1>`, rendered large and bold.
    Heading(String),

    /// Section header `<p>` text.
    Paragraph(String),

    /// Image embedded in a section header paragraph.
    Image(ImageWidget),

    /// Labelled container placed before a text input; carries the label as prefix text.
    InputContainer(String),

    /// Single-line text input.
    TextInput(TextInput),

    /// Static label preceding a choice widget.
    Label(String),

    /// Exclusive choice over option labels.
    RadioGroup(RadioGroup),

    /// Inline error message slot.
    ErrorSlot(ErrorSlot),

    /// Header, non-exclusive toggles and an optional error line.
    CheckboxGroup(CheckboxGroup),

    /// Single choice closed list.
    Dropdown(Dropdown),

    /// Rich-text block with a formatting toolbar.
    RichTextEditor(RichTextEditor),
}

impl Widget {
    /// Short, stable name of the widget variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::Paragraph(_) => "paragraph",
            Self::Image(_) => "image",
            Self::InputContainer(_) => "input-container",
            Self::TextInput(_) => "text-input",
            Self::Label(_) => "label",
            Self::RadioGroup(_) => "radio-group",
            Self::ErrorSlot(_) => "error-slot",
            Self::CheckboxGroup(_) => "checkbox-group",
            Self::Dropdown(_) => "dropdown",
            Self::RichTextEditor(_) => "rich-text-editor",
        }
    }

    /// Check if this widget comes from a section header.
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Heading(_) | Self::Paragraph(_) | Self::Image(_))
    }
}

/// How a text input accepts and shows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    Text,
    Email,
    /// Obscured rendering.
    Password,
    /// Digits only.
    Number,
    /// Read-only; a click opens a date picker that fills the text.
    Date,
}

impl InputMode {
    pub fn is_masked(self) -> bool {
        self == Self::Password
    }

    pub fn is_numeric(self) -> bool {
        self == Self::Number
    }

    pub fn is_read_only(self) -> bool {
        self == Self::Date
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    /// Placeholder shown while empty.
    pub hint: String,
    pub mode: InputMode,
    /// Error attached at render time, e.g. `"Name is required"`.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    /// Option labels, in schema order. Option values are not carried.
    pub options: Vec<String>,
}

/// An error message slot attached to a choice group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSlot {
    pub message: Option<String>,
    pub visible: bool,
    /// Whether a selection change clears the slot.
    pub clears_on_selection: bool,
}

impl ErrorSlot {
    /// An empty, hidden slot.
    pub fn hidden(clears_on_selection: bool) -> Self {
        Self {
            message: None,
            visible: false,
            clears_on_selection,
        }
    }

    /// The slot state after the user changes the selection.
    pub fn on_selection_changed(&self) -> Self {
        if self.clears_on_selection {
            Self {
                visible: false,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}

/// A single checkbox toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub label: String,
    /// Opaque tag holding the option value.
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxGroup {
    pub header: String,
    pub toggles: Vec<Toggle>,
    /// Static error line shown below the toggles.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    /// Option labels only; values are not recoverable from this widget.
    pub choices: Vec<String>,
    /// Prompt shown while nothing is selected.
    pub prompt: Option<String>,
}

/// A formatting button of the rich-text toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    Bold,
    Italic,
    Underline,
    Link,
}

impl ToolbarAction {
    /// Toolbar buttons, in display order.
    pub const ALL: [ToolbarAction; 4] = [Self::Bold, Self::Italic, Self::Underline, Self::Link];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::Link => "Link",
        }
    }

    /// Run this action against the selection `[start, end)` of `text`.
    pub fn apply(self, text: &mut RichText, start: usize, end: usize) -> Result<(), RichTextError> {
        match self {
            Self::Bold => text.apply_style(start, end, TextStyle::Bold),
            Self::Italic => text.apply_style(start, end, TextStyle::Italic),
            Self::Underline => text.apply_style(start, end, TextStyle::Underline),
            Self::Link => text.insert_link(start, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RichTextEditor {
    pub toolbar: Vec<ToolbarAction>,
    /// Initial content; hosts keep their own editable copy.
    pub content: RichText,
}

impl RichTextEditor {
    /// An editor with the full toolbar.
    pub fn new(content: RichText) -> Self {
        Self {
            toolbar: ToolbarAction::ALL.to_vec(),
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageScale {
    /// Scale to fit, preserving aspect ratio, centred.
    FitCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageWidget {
    pub src: String,
    /// Target width in pixels; height follows the aspect ratio.
    pub width: u32,
    pub scale: ImageScale,
    pub alignment: Alignment,
}

impl ImageWidget {
    pub fn new(src: impl Into<String>, width: u32) -> Self {
        Self {
            src: src.into(),
            width,
            scale: ImageScale::FitCenter,
            alignment: Alignment::Center,
        }
    }
}
