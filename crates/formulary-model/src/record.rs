use std::collections::BTreeMap;

/// A row projected onto the recognized catalog columns, keyed by display label.
///
/// Recognized fields absent from the source row are simply not present here;
/// a record may carry fewer columns than the schema declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogRecord {
    pub cells: BTreeMap<String, String>,
}

impl CatalogRecord {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells.get(label).map(String::as_str)
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.cells.contains_key(label)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A row interpreted as an unordered pair of drug identifiers plus any
/// additional descriptive fields carried through unchanged.
///
/// `drug_a` and `drug_b` hold the source text verbatim; comparison happens
/// on trimmed, case-folded forms at match time, so `(x, y)` and `(y, x)`
/// name the same interaction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InteractionRecord {
    pub drug_a: String,
    pub drug_b: String,
    pub details: BTreeMap<String, String>,
}
