use formulary_model::{CatalogRecord, CatalogSchema, Row};

/// Projects one row onto the recognized catalog columns.
///
/// Iterates the schema in declaration order, not the row's field order, so
/// column order is identical across records. A recognized field absent from
/// the row is skipped for that record: projection never fails, it only
/// narrows. The empty string is copied through as a present value.
#[must_use]
pub fn project(row: &Row, schema: &CatalogSchema) -> CatalogRecord {
    let mut record = CatalogRecord::default();
    for column in &schema.columns {
        if let Some(value) = row.get(&column.source) {
            record.cells.insert(column.label.clone(), value.to_string());
        }
    }
    record
}

#[must_use]
pub fn project_all(rows: &[Row], schema: &CatalogSchema) -> Vec<CatalogRecord> {
    rows.iter().map(|row| project(row, schema)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_recognized_fields_only() {
        let row = Row::from_pairs([
            ("trade name", "Yasmin"),
            ("group", "COC"),
            ("internal id", "42"),
        ]);
        let record = project(&row, &CatalogSchema::standard());
        assert_eq!(record.get("Trade Name"), Some("Yasmin"));
        assert_eq!(record.get("Drug Group"), Some("COC"));
        assert_eq!(record.cells.len(), 2);
    }

    #[test]
    fn missing_recognized_field_is_omitted_not_defaulted() {
        let row = Row::from_pairs([("trade name", "Cerazette")]);
        let record = project(&row, &CatalogSchema::standard());
        assert!(!record.has_column("Compound"));
        assert_eq!(record.get("Compound"), None);
    }

    #[test]
    fn empty_value_stays_present() {
        let row = Row::from_pairs([("compound", "")]);
        let record = project(&row, &CatalogSchema::standard());
        assert_eq!(record.get("Compound"), Some(""));
    }

    #[test]
    fn unrecognized_row_projects_to_empty_record() {
        let row = Row::from_pairs([("notes", "keep refrigerated")]);
        let record = project(&row, &CatalogSchema::standard());
        assert!(record.is_empty());
    }
}
