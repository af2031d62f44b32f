//! High-level operations — the index store and the query engine.

pub mod query;
pub mod store;

pub use query::{QueryEngine, QueryStats};
pub use store::IndexStore;
