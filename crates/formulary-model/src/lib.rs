#![deny(unsafe_code)]

pub mod criteria;
pub mod page;
pub mod record;
pub mod row;
pub mod schema;

pub use criteria::{FilterCriteria, FilterPredicate};
pub use page::CatalogPage;
pub use record::{CatalogRecord, InteractionRecord};
pub use row::Row;
pub use schema::{CatalogSchema, InteractionSchema, SchemaColumn};
