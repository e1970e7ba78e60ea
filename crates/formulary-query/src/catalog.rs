use tracing::debug;

use formulary_model::{CatalogPage, CatalogSchema, FilterCriteria, Row};

use crate::error::Result;
use crate::filter::filter_records;
use crate::normalize::normalize_rows;
use crate::paginate::paginate;
use crate::project::project_all;

/// The full catalog pipeline over one fetched row sequence:
/// normalize, project, filter, paginate.
///
/// Recomputed per request; the row sequence is consumed and nothing is
/// cached between calls.
pub fn catalog_page(
    rows: Vec<Row>,
    schema: &CatalogSchema,
    criteria: &FilterCriteria,
    page_size: usize,
    page_number: usize,
) -> Result<CatalogPage> {
    let rows = normalize_rows(rows);
    let records = project_all(&rows, schema);
    let filtered = filter_records(records, criteria);
    debug!(
        fetched = rows.len(),
        filtered = filtered.len(),
        page_number,
        page_size,
        "catalog query"
    );
    paginate(filtered, page_size, page_number)
}
