//! Search result caching, kept coherent with the index on every insert.

pub mod entry;
pub mod result_cache;

pub use entry::{CacheEntry, Offer};
pub use result_cache::{CacheStats, ResultCache};

use crate::types::{Record, Signature};

/// A cache of best-score results keyed by query signature.
///
/// Implementations must keep every stored entry equal to what a fresh
/// computation over the current records would produce, by folding each newly
/// added record into every entry in `on_insert`.
pub trait SearchCache {
    /// Get the entry for a signature, if computed.
    fn lookup(&self, signature: &Signature) -> Option<&CacheEntry>;

    /// Store an entry, overwriting any previous one.
    fn store(&mut self, signature: Signature, entry: CacheEntry);

    /// Fold a newly added record into every cached entry.
    fn on_insert(&mut self, record: &Record);

    /// Number of cached signatures.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    fn clear(&mut self);
}
