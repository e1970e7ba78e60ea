use formulary_model::Row;

/// Trims surrounding whitespace from every field name, case preserved.
///
/// Spreadsheet exports are inconsistent about header padding; trimming once
/// here makes lookups against the recognized-name lists reliable. Values
/// are untouched. Pure and total: a row with no recognized fields simply
/// projects to nothing downstream.
#[must_use]
pub fn normalize_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().map(normalize_row).collect()
}

fn normalize_row(row: Row) -> Row {
    let cells = row
        .cells
        .into_iter()
        .map(|(name, value)| (name.trim().to_string(), value))
        .collect();
    Row { cells }
}

/// Simple Unicode case folding via `str::to_lowercase`.
///
/// No diacritic folding and no locale tailoring; the upstream dataset mixes
/// Thai and Latin text and plain lowercasing is the documented behavior.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_field_names_and_keeps_values() {
        let rows = vec![Row::from_pairs([(" trade name ", "  Yasmin  ")])];
        let rows = normalize_rows(rows);
        assert_eq!(rows[0].get("trade name"), Some("  Yasmin  "));
        assert_eq!(rows[0].get(" trade name "), None);
    }

    #[test]
    fn case_of_field_names_is_preserved() {
        let rows = normalize_rows(vec![Row::from_pairs([("How to take medicine ", "with food")])]);
        assert_eq!(rows[0].get("How to take medicine"), Some("with food"));
    }

    #[test]
    fn fold_case_lowercases_without_trimming() {
        assert_eq!(fold_case("  WARFARIN "), "  warfarin ");
    }
}
