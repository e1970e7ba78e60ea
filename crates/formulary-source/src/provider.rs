use formulary_model::Row;

use crate::error::Result;

/// External collaborator that materializes the full row sequence for one
/// request cycle. Implementations own their own retry and timeout policy.
pub trait RowSource {
    fn fetch_rows(&self) -> Result<Vec<Row>>;
}

/// Fixed in-memory rows, mainly for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: Vec<Row>,
}

impl MemoryRowSource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl RowSource for MemoryRowSource {
    fn fetch_rows(&self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }
}
