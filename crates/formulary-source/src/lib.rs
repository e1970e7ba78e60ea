#![deny(unsafe_code)]

pub mod csv_source;
pub mod error;
pub mod provider;

pub use csv_source::CsvRowSource;
pub use error::SourceError;
pub use provider::{MemoryRowSource, RowSource};
