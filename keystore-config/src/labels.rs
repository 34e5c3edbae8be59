//! Label lookup. Translation itself is the host's job; the workflow only
//! hands it keys.

use std::collections::HashMap;

/// Maps a label key to display text.
pub trait LabelLookup {
    fn label(&self, key: &str) -> String;
}

/// A fixed key → text table. Unknown keys are shown as the key itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCatalog(HashMap<String, String>);

impl LabelCatalog {
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let _ = self.0.insert(key.into(), text.into());
    }
}

impl From<HashMap<String, String>> for LabelCatalog {
    fn from(labels: HashMap<String, String>) -> Self {
        Self(labels)
    }
}

impl LabelLookup for LabelCatalog {
    fn label(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_key() {
        let mut catalog = LabelCatalog::default();
        catalog.insert("generate", "Generate");

        assert_eq!(catalog.label("generate"), "Generate");
        assert_eq!(catalog.label("cancel"), "cancel");
    }
}
