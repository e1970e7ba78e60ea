use serde::{Deserialize, Serialize};

use crate::record::CatalogRecord;

/// One page of the filtered catalog, plus the window bookkeeping the
/// presentation layer needs for its row-range caption.
///
/// `start_index` and `end_index` are zero-based slice bounds into the
/// filtered sequence; the first display row is `start_index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub records: Vec<CatalogRecord>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl CatalogPage {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 1-based inclusive display rows covered by this page, if any.
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.start_index + 1, self.end_index))
        }
    }
}
