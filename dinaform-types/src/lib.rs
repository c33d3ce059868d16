//! Core types for the dinaform crate.
//!
//! This crate provides the foundational types for dynamic forms:
//! - `FormSchema`, `FieldSpec`, `SectionSpec` - The decoded JSON schema
//! - `Widget` and friends - Toolkit-agnostic widget descriptors
//! - `RenderedForm`, `RenderedSection`, `Cluster` - The output of a render pass
//! - `RichText` - Text with additive style spans for the description editor
//! - `FormHost` trait - For implementing hosts that materialize forms

mod schema;
pub use schema::{FieldKind, FieldSpec, FormSchema, OptionSpec, SectionSpec};

mod rich_text;
pub use rich_text::{PLACEHOLDER_LINK_URL, RichText, Span, SpanStyle, TextStyle};

mod widget;
pub use widget::{
    Alignment, CheckboxGroup, Dropdown, ErrorSlot, ImageScale, ImageWidget, InputMode,
    RadioGroup, RichTextEditor, TextInput, Toggle, ToolbarAction, Widget,
};

mod rendered_form;
pub use rendered_form::{Cluster, RenderedForm, RenderedSection};

mod error;
pub use error::{FormError, RichTextError};

mod traits;
pub use traits::FormHost;
