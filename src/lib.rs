//! AttributeIndex — in-memory ranked lookup over attribute-tagged records.
//!
//! Given records that each carry a set of attributes, finds the record whose
//! attributes best overlap a query. Scoring walks per-attribute sorted
//! postings with a lazy ranked merge, and results are cached per query
//! signature. The cache is folded forward on every insert instead of being
//! recomputed, so cached answers always match a fresh computation.
//!
//! ```
//! use attribute_index::{IndexStore, QueryEngine, Record};
//!
//! let mut store = IndexStore::new();
//! store.add(Record::new("a", ["x", "y"])).unwrap();
//! store.add(Record::new("b", ["x", "y", "z"])).unwrap();
//!
//! let mut engine = QueryEngine::seeded(7);
//! let best = engine.search(&mut store, ["z", "x", "y"]).unwrap();
//! assert_eq!(best.id, "b");
//! ```

pub mod cache;
pub mod engine;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use cache::{CacheEntry, CacheStats, ResultCache, SearchCache};
pub use engine::{IndexStore, QueryEngine, QueryStats};
pub use index::{AttributeIndex, RankedMerge};
pub use types::{
    DuplicatePolicy, IndexConfig, IndexError, IndexResult, Record, RecordId, Score, Signature,
};
