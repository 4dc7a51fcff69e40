//! The fixed set of files copied over the generated project.

use indexmap::IndexMap;

pub mod writer;

pub use writer::{write_templates, WriteReport};

/// Ordered mapping of file name (relative to `src/`) to template source.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    entries: IndexMap<String, String>,
}

impl TemplateSet {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Files shipped inside the binary.
    pub fn bundled() -> Self {
        Self::new([
            ("index.js", include_str!("../../templates/index.js.j2")),
            ("App.js", include_str!("../../templates/App.js.j2")),
            ("App.css", include_str!("../../templates/App.css")),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, source)| (name.as_str(), source.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
