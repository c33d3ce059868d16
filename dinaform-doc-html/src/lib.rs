//! # dinaform-doc-html
//!
//! Materialize rendered dinaform forms as fillable HTML documents.
//!
//! ## Usage
//!
//! ```rust
//! use dinaform::{FormHost, FormScreen};
//! use dinaform_doc_html::{HtmlHost, HtmlOptions};
//!
//! let schema = r#"{
//!     "title": "Contato",
//!     "fields": [{"type": "email", "label": "E-mail", "name": "email", "required": true}],
//!     "sections": [{"title": "<h1>Fale conosco</h1>", "from": 0, "to": 0, "index": 0}]
//! }"#;
//!
//! let host = HtmlHost::with_options(HtmlOptions::new().full_document(false));
//! let html = FormScreen::new().present(Some(schema), &host).unwrap();
//!
//! assert!(html.starts_with("<form class=\"dinaform-form\">"));
//! assert!(html.contains("<h2 class=\"dinaform-heading\">Fale conosco</h2>"));
//! assert!(html.contains("type=\"email\" id=\"email\" name=\"email\""));
//! ```
//!
//! Every piece of schema text is escaped; section headers are rendered from
//! their parsed blocks, never passed through as raw markup.

mod generator;

pub use generator::{HtmlHost, HtmlOptions, escape_html, to_html, to_html_with_options};
