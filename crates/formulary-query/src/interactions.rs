use tracing::debug;

use formulary_model::{InteractionRecord, InteractionSchema, Row};

use crate::error::{QueryError, Result};
use crate::normalize::normalize_rows;

/// Interprets rows as interaction records using the schema's pair fields.
///
/// Rows lacking either pair field cannot match any query and are dropped.
/// Every other field on the row is carried through as descriptive detail.
#[must_use]
pub fn interpret_rows(rows: &[Row], schema: &InteractionSchema) -> Vec<InteractionRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for row in rows {
        let (Some(drug_a), Some(drug_b)) = (row.get(&schema.first), row.get(&schema.second))
        else {
            dropped += 1;
            continue;
        };
        let details = row
            .cells
            .iter()
            .filter(|(name, _)| **name != schema.first && **name != schema.second)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        records.push(InteractionRecord {
            drug_a: drug_a.to_string(),
            drug_b: drug_b.to_string(),
            details,
        });
    }
    if dropped > 0 {
        debug!(dropped, "rows without a complete drug pair");
    }
    records
}

/// Returns every record whose unordered pair equals the queried pair.
///
/// Both query terms and both stored slots are trimmed and case-folded
/// before comparison, so `(A, B)` and `(B, A)` queries are equivalent and a
/// record matches regardless of which slot held which drug. Record order is
/// preserved and duplicate entries are all returned. An empty result means
/// "no known interaction" and is not an error; an empty query term is.
pub fn match_interactions(
    records: &[InteractionRecord],
    query_a: &str,
    query_b: &str,
) -> Result<Vec<InteractionRecord>> {
    let query_a = query_term(query_a, "first drug")?;
    let query_b = query_term(query_b, "second drug")?;
    Ok(records
        .iter()
        .filter(|record| pair_matches(record, &query_a, &query_b))
        .cloned()
        .collect())
}

/// Full interaction lookup: normalize field names, interpret, match.
pub fn interaction_matches(
    rows: Vec<Row>,
    schema: &InteractionSchema,
    query_a: &str,
    query_b: &str,
) -> Result<Vec<InteractionRecord>> {
    let rows = normalize_rows(rows);
    let records = interpret_rows(&rows, schema);
    match_interactions(&records, query_a, query_b)
}

fn pair_matches(record: &InteractionRecord, query_a: &str, query_b: &str) -> bool {
    let stored_a = fold_term(&record.drug_a);
    let stored_b = fold_term(&record.drug_b);
    (stored_a == query_a && stored_b == query_b) || (stored_a == query_b && stored_b == query_a)
}

fn query_term(raw: &str, which: &str) -> Result<String> {
    let folded = fold_term(raw);
    if folded.is_empty() {
        return Err(QueryError::InvalidQuery {
            reason: format!("{which} must not be empty"),
        });
    }
    Ok(folded)
}

fn fold_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}
