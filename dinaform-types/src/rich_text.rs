use crate::RichTextError;

/// Target of the link toolbar action. Not derived from user input.
pub const PLACEHOLDER_LINK_URL: &str = "https://www.exemplo.com";

/// A style annotation over a range of characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    Bold,
    Italic,
    Underline,
    Link(String),
}

/// The character styles the toolbar can toggle on a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
}

impl From<TextStyle> for SpanStyle {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Bold => Self::Bold,
            TextStyle::Italic => Self::Italic,
            TextStyle::Underline => Self::Underline,
        }
    }
}

/// An annotated half-open character range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(start: usize, end: usize, style: SpanStyle) -> Self {
        Self { start, end, style }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Plain text plus style spans.
///
/// Offsets count characters (not bytes). Spans may overlap; styling is
/// additive and spans are never merged or split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    text: String,
    spans: Vec<Span>,
}

impl RichText {
    /// Create unstyled rich text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Create rich text from already computed spans.
    ///
    /// Spans that reach past the end of the text or are empty are discarded.
    pub fn with_spans(text: impl Into<String>, spans: Vec<Span>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        let spans = spans
            .into_iter()
            .filter(|s| s.start < s.end && s.end <= len)
            .collect();
        Self { text, spans }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if there is no annotation at all.
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// The characters in `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// Styles covering the character at `offset`.
    pub fn styles_at(&self, offset: usize) -> Vec<&SpanStyle> {
        self.spans
            .iter()
            .filter(|s| s.start <= offset && offset < s.end)
            .map(|s| &s.style)
            .collect()
    }

    /// Apply a character style to the selection `[start, end)`.
    ///
    /// An empty selection is a no-op. A reversed selection is treated as if
    /// its ends were swapped.
    pub fn apply_style(
        &mut self,
        start: usize,
        end: usize,
        style: TextStyle,
    ) -> Result<(), RichTextError> {
        self.annotate(start, end, style.into())
    }

    /// Link the selection `[start, end)` to [`PLACEHOLDER_LINK_URL`].
    ///
    /// An empty selection leaves the text unannotated.
    pub fn insert_link(&mut self, start: usize, end: usize) -> Result<(), RichTextError> {
        self.annotate(start, end, SpanStyle::Link(PLACEHOLDER_LINK_URL.to_string()))
    }

    fn annotate(&mut self, start: usize, end: usize, style: SpanStyle) -> Result<(), RichTextError> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let len = self.len();
        if end > len {
            return Err(RichTextError::SelectionOutOfBounds { start, end, len });
        }
        if start == end {
            return Ok(());
        }
        self.spans.push(Span::new(start, end, style));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_bold() {
        let mut text = RichText::new("hello world");
        text.apply_style(0, 5, TextStyle::Bold).unwrap();
        assert_eq!(text.spans(), &[Span::new(0, 5, SpanStyle::Bold)]);
    }

    #[test]
    fn overlapping_styles_coexist() {
        let mut text = RichText::new("hello world");
        text.apply_style(0, 5, TextStyle::Bold).unwrap();
        text.apply_style(3, 8, TextStyle::Italic).unwrap();
        text.apply_style(3, 8, TextStyle::Italic).unwrap();
        assert_eq!(text.spans().len(), 3);
        assert_eq!(text.styles_at(4), vec![&SpanStyle::Bold, &SpanStyle::Italic, &SpanStyle::Italic]);
        assert_eq!(text.styles_at(8), Vec::<&SpanStyle>::new());
    }

    #[test]
    fn reversed_selection_is_normalised() {
        let mut text = RichText::new("abc");
        text.apply_style(3, 1, TextStyle::Underline).unwrap();
        assert_eq!(text.spans(), &[Span::new(1, 3, SpanStyle::Underline)]);
    }

    #[test]
    fn empty_style_selection_is_noop() {
        let mut text = RichText::new("abc");
        text.apply_style(2, 2, TextStyle::Bold).unwrap();
        assert!(text.is_plain());
    }

    #[test]
    fn link_uses_placeholder() {
        let mut text = RichText::new("see here");
        text.insert_link(4, 8).unwrap();
        assert_eq!(
            text.spans(),
            &[Span::new(4, 8, SpanStyle::Link(PLACEHOLDER_LINK_URL.to_string()))]
        );
        assert_eq!(text.slice(4, 8), "here");
    }

    #[test]
    fn empty_link_selection_leaves_text_unannotated() {
        let mut text = RichText::new("see here");
        text.insert_link(3, 3).unwrap();
        assert!(text.is_plain());
    }

    #[test]
    fn selection_past_end_is_rejected() {
        let mut text = RichText::new("abc");
        let err = text.apply_style(1, 9, TextStyle::Bold).unwrap_err();
        assert_eq!(
            err,
            RichTextError::SelectionOutOfBounds {
                start: 1,
                end: 9,
                len: 3
            }
        );
        assert!(text.is_plain());
    }

    #[test]
    fn offsets_count_characters() {
        let mut text = RichText::new("çãé!");
        text.apply_style(1, 3, TextStyle::Bold).unwrap();
        assert_eq!(text.len(), 4);
        assert_eq!(text.slice(1, 3), "ãé");
    }

    #[test]
    fn with_spans_discards_invalid() {
        let text = RichText::with_spans(
            "abc",
            vec![
                Span::new(0, 1, SpanStyle::Bold),
                Span::new(2, 2, SpanStyle::Italic),
                Span::new(1, 7, SpanStyle::Underline),
            ],
        );
        assert_eq!(text.spans(), &[Span::new(0, 1, SpanStyle::Bold)]);
    }
}
