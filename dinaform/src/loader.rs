//! Schema loading.

use std::path::Path;

use dinaform_types::{FormError, FormSchema};
use tracing::debug;

/// Decode a schema from JSON text.
///
/// Empty input, whitespace and the literal `null` decode to `None`: there is
/// nothing to render, which is not an error. Syntax and structure errors are
/// both reported as [`FormError::Parse`].
pub fn parse_schema(raw: &str) -> Result<Option<FormSchema>, FormError> {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        debug!("empty schema source");
        return Ok(None);
    }
    let schema: Option<FormSchema> = serde_json::from_str(trimmed)?;
    if let Some(schema) = &schema {
        debug!(
            title = %schema.title,
            fields = schema.fields.len(),
            sections = schema.sections.len(),
            "decoded schema"
        );
    }
    Ok(schema)
}

/// Read a UTF-8 schema file and decode it.
pub fn load_schema_file(path: impl AsRef<Path>) -> Result<Option<FormSchema>, FormError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| FormError::load(path, e))?;
    parse_schema(&raw)
}
