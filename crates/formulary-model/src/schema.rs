use serde::{Deserialize, Serialize};

/// One recognized source field and the display label it is renamed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub source: String,
    pub label: String,
}

/// Ordered list of recognized catalog columns.
///
/// Projection iterates this declaration order, never the source row order,
/// so output column order is identical across all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub columns: Vec<SchemaColumn>,
}

impl CatalogSchema {
    pub fn new(columns: Vec<SchemaColumn>) -> Self {
        Self { columns }
    }

    /// The curated contraceptive catalog view: five recognized columns.
    #[must_use]
    pub fn standard() -> Self {
        let columns = [
            ("trade name", "Trade Name"),
            ("tablets", "Tablets"),
            ("group", "Drug Group"),
            ("compound", "Compound"),
            ("How to take medicine", "Administration"),
        ];
        Self {
            columns: columns
                .into_iter()
                .map(|(source, label)| SchemaColumn {
                    source: source.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// Display labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.label.as_str())
    }

    pub fn label_for(&self, source: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.source == source)
            .map(|column| column.label.as_str())
    }
}

/// Names of the two source fields holding an interaction's drug pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSchema {
    pub first: String,
    pub second: String,
}

impl InteractionSchema {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            first: "drug1".to_string(),
            second: "drug2".to_string(),
        }
    }
}
