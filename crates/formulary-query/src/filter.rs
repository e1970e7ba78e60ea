use formulary_model::{CatalogRecord, FilterCriteria, FilterPredicate};

use crate::normalize::fold_case;

/// Applies the criteria to a record sequence, preserving relative order.
#[must_use]
pub fn filter_records(
    records: Vec<CatalogRecord>,
    criteria: &FilterCriteria,
) -> Vec<CatalogRecord> {
    records
        .into_iter()
        .filter(|record| record_matches(record, criteria))
        .collect()
}

/// True iff the record satisfies every supplied predicate.
///
/// A record lacking a predicate's column is a non-match for that predicate,
/// never an error. Empty needles impose no constraint, so empty criteria
/// pass everything through.
#[must_use]
pub fn record_matches(record: &CatalogRecord, criteria: &FilterCriteria) -> bool {
    criteria
        .predicates
        .iter()
        .all(|predicate| predicate_matches(record, predicate))
}

fn predicate_matches(record: &CatalogRecord, predicate: &FilterPredicate) -> bool {
    if predicate.needle.is_empty() {
        return true;
    }
    match record.get(&predicate.column) {
        Some(value) => fold_case(value).contains(&fold_case(&predicate.needle)),
        None => false,
    }
}
