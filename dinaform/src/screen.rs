//! The load → parse → render pipeline a hosting screen runs once on creation.

use std::path::Path;

use dinaform_types::{FormError, FormHost, FormSchema, RenderedForm};
use tracing::{info, warn};

use crate::{FormRenderer, RenderOptions, load_schema_file, parse_schema};

/// Runs a whole render pass and absorbs load and parse failures.
///
/// A source that is missing, empty or undecodable renders as an empty form;
/// the failure is logged, never returned.
#[derive(Debug, Clone, Default)]
pub struct FormScreen {
    renderer: FormRenderer,
}

impl FormScreen {
    /// Create a screen with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a screen with the given render options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            renderer: FormRenderer::with_options(options),
        }
    }

    /// Render schema text. `None` means the source produced nothing.
    pub fn render_source(&self, raw: Option<&str>) -> RenderedForm {
        let Some(raw) = raw else {
            info!("no schema source, showing an empty form");
            return RenderedForm::empty();
        };
        self.render_loaded(parse_schema(raw))
    }

    /// Read and render a schema file.
    pub fn render_file(&self, path: impl AsRef<Path>) -> RenderedForm {
        self.render_loaded(load_schema_file(path))
    }

    /// Render schema text and hand the result to a host.
    pub fn present<H: FormHost>(&self, raw: Option<&str>, host: &H) -> Result<H::Output, H::Error> {
        host.materialize(&self.render_source(raw))
    }

    fn render_loaded(&self, loaded: Result<Option<FormSchema>, FormError>) -> RenderedForm {
        match loaded {
            Ok(Some(schema)) => self.renderer.render(&schema),
            Ok(None) => {
                info!("schema source is empty, showing an empty form");
                RenderedForm::empty()
            }
            Err(err) => {
                warn!(error = %err, "schema unavailable, showing an empty form");
                RenderedForm::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_source_renders_empty() {
        let screen = FormScreen::new();
        assert!(screen.render_source(Some("{ not json")).is_empty());
        assert!(screen.render_source(Some(r#"{"fields": 3}"#)).is_empty());
    }

    #[test]
    fn missing_source_renders_empty() {
        let screen = FormScreen::new();
        assert!(screen.render_source(None).is_empty());
        assert!(screen.render_source(Some("")).is_empty());
        assert!(screen.render_file("/no/such/schema.json").is_empty());
    }

    #[test]
    fn valid_source_renders() {
        let form = FormScreen::new().render_source(Some(
            r#"{"title":"T","fields":[{"type":"text","label":"A"}],
                "sections":[{"title":"<h1>S</h1>","from":0,"to":0,"index":0,"uuid":"s"}]}"#,
        ));
        assert_eq!(form.title, "T");
        assert_eq!(form.widgets().count(), 3);
    }
}
