use std::path::PathBuf;

/// Error type for loading a form schema.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The schema source could not be read.
    #[error("Failed to load schema from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema text is not a valid form schema (syntax or structure).
    #[error("Failed to parse schema: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FormError {
    /// Create a load error for the given source path.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    /// Check if this error came from reading the source.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Check if this error came from decoding the schema.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Error type for rich-text editing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RichTextError {
    #[error("Selection {start}..{end} is outside text of length {len}")]
    SelectionOutOfBounds { start: usize, end: usize, len: usize },
}
