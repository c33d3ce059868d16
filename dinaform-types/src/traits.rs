use crate::RenderedForm;

/// Trait for hosts that materialize a rendered form.
///
/// A host receives the immutable descriptor tree and turns it into something
/// concrete: native views, an HTML document, a test outline. It decides how
/// the form looks; the descriptor tree decides what is in it and in which
/// order.
pub trait FormHost {
    /// What the host produces.
    type Output;

    /// The error type for this host.
    type Error: Into<anyhow::Error>;

    /// Materialize the form.
    ///
    /// An empty form must materialize to the host's notion of "nothing shown",
    /// not to an error.
    fn materialize(&self, form: &RenderedForm) -> Result<Self::Output, Self::Error>;
}
