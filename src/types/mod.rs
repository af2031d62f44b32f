//! All data types for the attribute index.

pub mod config;
pub mod error;
pub mod record;
pub mod signature;

pub use config::{DuplicatePolicy, IndexConfig};
pub use error::{IndexError, IndexResult};
pub use record::{Record, RecordId};
pub use signature::Signature;

/// Score of a record against a query: the number of query attributes it has.
pub type Score = usize;
