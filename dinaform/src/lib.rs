//! # dinaform
//!
//! Render input forms dynamically from a JSON schema. Toolkit-agnostic.
//!
//! A schema lists fields and sections; sections group fields by position
//! range and carry an HTML header. Rendering turns a schema into an immutable
//! tree of widget descriptors, which a host then materializes as native views,
//! an HTML document, or anything else.
//!
//! ## Usage
//!
//! ```rust
//! use dinaform::{FormScreen, Widget};
//!
//! let schema = r#"{
//!     "title": "Registration",
//!     "fields": [
//!         {"type": "text", "label": "Name", "name": "name", "required": true, "uuid": "f1"},
//!         {"type": "dropdown", "label": "State", "name": "state", "required": false, "uuid": "f2",
//!          "options": [{"label": "São Paulo", "value": "SP"}]}
//!     ],
//!     "sections": [
//!         {"title": "<h1>About you</h1>", "from": 0, "to": 1, "index": 0, "uuid": "s1"}
//!     ]
//! }"#;
//!
//! let form = FormScreen::new().render_source(Some(schema));
//! let first = form.widgets().next();
//! assert_eq!(first, Some(&Widget::Heading("About you".to_string())));
//! ```
//!
//! ## Field types
//!
//! - `text`, `email`, `password`, `number`, `date` - labelled single-line inputs
//! - `radio` - exclusive choice over option labels
//! - `checkbox` - one toggle per option, tagged with the option value
//! - `dropdown` - closed list of option labels
//! - `description` - rich-text editor seeded from the label as HTML
//! - anything else - treated as `text`
//!
//! ## Hosts
//!
//! Hosts implement `FormHost`:
//! - `dinaform-doc-html` - fillable HTML document
//! - `TestHost` - one outline line per widget, for tests

// Re-export all types from dinaform-types
pub use dinaform_types::*;

mod html;

mod header;
pub use header::{HeaderBlock, parse_section_header};

pub mod rich_text;

mod date;
pub use date::{display_date, pick_date, picker_initial_date};

mod loader;
pub use loader::{load_schema_file, parse_schema};

mod options;
pub use options::RenderOptions;

mod renderer;
pub use renderer::{FormRenderer, assign_sections, build_field, render, required_message};

mod screen;
pub use screen::FormScreen;

// Test host for checking rendered forms without a UI toolkit
mod test_host;
pub use test_host::{TestHost, outline};
