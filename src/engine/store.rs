//! The index store — attribute postings, the ID registry, and the result cache.

use std::collections::HashMap;

use log::{trace, warn};

use crate::cache::{CacheEntry, ResultCache, SearchCache};
use crate::index::{AttributeIndex, RankedMerge};
use crate::types::{
    DuplicatePolicy, IndexConfig, IndexError, IndexResult, Record, RecordId, Signature,
};

/// Owns every indexed record and keeps the cache coherent as records arrive.
///
/// Not internally synchronized. Concurrent readers are fine, but `add` must be
/// exclusive with both `add` and searches; wrap the store in an `RwLock` (or
/// confine it to one thread) if shared.
pub struct IndexStore<C = ResultCache> {
    /// Attribute -> sorted record IDs.
    attributes: AttributeIndex,
    /// Record ID -> record.
    records: HashMap<RecordId, Record>,
    /// Best-score results per query signature.
    cache: C,
    /// Handling of re-added IDs.
    duplicate_policy: DuplicatePolicy,
}

impl IndexStore<ResultCache> {
    /// Create an empty store with the default cache and configuration.
    pub fn new() -> Self {
        Self::with_cache(ResultCache::new(), &IndexConfig::default())
    }

    /// Create an empty store with the default cache.
    pub fn with_config(config: &IndexConfig) -> Self {
        Self::with_cache(ResultCache::new(), config)
    }
}

impl Default for IndexStore<ResultCache> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SearchCache> IndexStore<C> {
    /// Create an empty store backed by the given cache.
    pub fn with_cache(cache: C, config: &IndexConfig) -> Self {
        Self {
            attributes: AttributeIndex::new(),
            records: HashMap::new(),
            cache,
            duplicate_policy: config.duplicate_policy,
        }
    }

    /// Add a record.
    ///
    /// Postings and the registry are updated before the cache is notified, so
    /// a search issued right after sees a consistent view.
    pub fn add(&mut self, record: Record) -> IndexResult<()> {
        if self.records.contains_key(&record.id) {
            return match self.duplicate_policy {
                DuplicatePolicy::Reject => Err(IndexError::DuplicateRecord(record.id)),
                DuplicatePolicy::Ignore => {
                    warn!("Ignoring duplicate record {}", record.id);
                    Ok(())
                }
            };
        }
        if record.attributes.is_empty() {
            return Err(IndexError::EmptyRecord(record.id));
        }

        self.attributes.add_record(&record);
        let record = self.records.entry(record.id.clone()).or_insert(record);
        trace!(
            "Added record {} with {} attributes",
            record.id,
            record.attributes.len()
        );
        self.cache.on_insert(record);
        Ok(())
    }

    /// Add several records. Each is processed independently: a rejected
    /// record does not stop the rest. Returns the first error, if any.
    pub fn add_all<I>(&mut self, records: I) -> IndexResult<()>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut first_err = None;
        for record in records {
            if let Err(err) = self.add(record) {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Compute the best-score result for a signature from the postings,
    /// bypassing the cache. Unknown attributes contribute nothing.
    pub fn query(&self, signature: &Signature) -> CacheEntry {
        let mut best = CacheEntry::miss();
        for (id, score) in RankedMerge::new(self.attributes.slice(signature)) {
            best.offer(id, score);
        }
        best
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Whether a record with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// All stored records, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Sorted IDs of records carrying an attribute.
    pub fn postings(&self, attribute: &str) -> &[RecordId] {
        self.attributes.get(attribute)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct attributes across all records.
    pub fn attribute_count(&self) -> usize {
        self.attributes.attribute_count()
    }

    /// The result cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Mutable access to the result cache.
    pub fn cache_mut(&mut self) -> &mut C {
        &mut self.cache
    }

    /// The attribute postings.
    pub fn attribute_index(&self) -> &AttributeIndex {
        &self.attributes
    }
}
