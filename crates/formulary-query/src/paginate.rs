use formulary_model::{CatalogPage, CatalogRecord};

use crate::error::{QueryError, Result};

/// Rows per catalog page in the reference view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slices the filtered sequence into the requested 1-indexed page.
///
/// `total_pages` is `max(ceil(len / page_size), 1)`: an empty sequence still
/// has one valid, empty page. A page number outside `[1, total_pages]` is a
/// [`QueryError::PageOutOfRange`] rather than a silent clamp, so callers can
/// tell "no results" apart from "bad page request".
pub fn paginate(
    records: Vec<CatalogRecord>,
    page_size: usize,
    page_number: usize,
) -> Result<CatalogPage> {
    if page_size == 0 {
        return Err(QueryError::InvalidQuery {
            reason: "page size must be at least 1".to_string(),
        });
    }
    let total_records = records.len();
    let total_pages = total_records.div_ceil(page_size).max(1);
    if page_number == 0 || page_number > total_pages {
        return Err(QueryError::PageOutOfRange {
            requested: page_number,
            total_pages,
        });
    }
    let start_index = (page_number - 1) * page_size;
    let end_index = (start_index + page_size).min(total_records);
    let records: Vec<CatalogRecord> = records
        .into_iter()
        .skip(start_index)
        .take(end_index - start_index)
        .collect();
    Ok(CatalogPage {
        records,
        page_number,
        page_size,
        total_records,
        total_pages,
        start_index,
        end_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<CatalogRecord> {
        (0..count)
            .map(|idx| {
                let mut record = CatalogRecord::default();
                record
                    .cells
                    .insert("Trade Name".to_string(), format!("Drug {idx}"));
                record
            })
            .collect()
    }

    #[test]
    fn empty_sequence_has_one_empty_page() {
        let page = paginate(Vec::new(), DEFAULT_PAGE_SIZE, 1).expect("page 1");
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
        assert_eq!(page.display_range(), None);
    }

    #[test]
    fn last_partial_page_is_short() {
        let page = paginate(records(23), 10, 3).expect("page 3");
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.display_range(), Some((21, 23)));
    }

    #[test]
    fn page_zero_and_past_the_end_are_out_of_range() {
        let error = paginate(records(23), 10, 4).expect_err("page 4");
        assert_eq!(
            error,
            QueryError::PageOutOfRange {
                requested: 4,
                total_pages: 3
            }
        );
        assert!(matches!(
            paginate(records(23), 10, 0),
            Err(QueryError::PageOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            paginate(records(5), 0, 1),
            Err(QueryError::InvalidQuery { .. })
        ));
    }
}
