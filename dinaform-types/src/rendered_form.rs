use crate::Widget;

/// The widgets produced for a single field, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Position of the field in the schema's field list.
    pub position: usize,

    /// Form key of the field.
    pub name: String,

    pub uuid: String,

    pub widgets: Vec<Widget>,
}

/// A section header followed by the clusters of its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    /// Section identity from the schema.
    pub index: i64,

    pub uuid: String,

    /// Widgets parsed from the section's HTML title.
    pub header: Vec<Widget>,

    pub clusters: Vec<Cluster>,
}

impl RenderedSection {
    /// All widgets of this section, header first.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.header
            .iter()
            .chain(self.clusters.iter().flat_map(|c| c.widgets.iter()))
    }
}

/// The immutable output of one render pass.
///
/// Hosts walk `sections` in order, or use [`RenderedForm::widgets`] for the
/// flat widget sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedForm {
    pub title: String,
    pub sections: Vec<RenderedSection>,
}

impl RenderedForm {
    /// A form that shows nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if nothing would be shown.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every widget in display order.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.sections.iter().flat_map(|s| s.widgets())
    }

    /// Every cluster in display order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.sections.iter().flat_map(|s| s.clusters.iter())
    }

    /// Find the cluster rendered for the field at `position`.
    pub fn cluster_at(&self, position: usize) -> Option<&Cluster> {
        self.clusters().find(|c| c.position == position)
    }
}
