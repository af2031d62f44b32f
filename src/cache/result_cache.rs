//! In-memory result cache with incremental maintenance on insert.

use std::collections::HashMap;

use log::trace;
use serde::Serialize;

use super::{CacheEntry, Offer, SearchCache};
use crate::types::{Record, Signature};

/// Counters describing cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cached signatures.
    pub entries: usize,
    /// Number of `on_insert` passes run (one per added record).
    pub update_passes: u64,
    /// Entries whose best score was raised by an insert.
    pub promotions: u64,
    /// IDs appended to an existing tie set by an insert.
    pub ties_appended: u64,
}

/// Maps signatures to their best-score results.
///
/// Entries are never evicted. Every insert scans all entries, so an insert
/// costs O(entries x signature length); large query vocabularies make adds
/// proportionally slower.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<Signature, CacheEntry>,
    update_passes: u64,
    promotions: u64,
    ties_appended: u64,
}

impl ResultCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            update_passes: self.update_passes,
            promotions: self.promotions,
            ties_appended: self.ties_appended,
        }
    }

    /// Iterate cached signatures and their entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &CacheEntry)> + '_ {
        self.entries.iter()
    }
}

impl SearchCache for ResultCache {
    fn lookup(&self, signature: &Signature) -> Option<&CacheEntry> {
        self.entries.get(signature)
    }

    fn store(&mut self, signature: Signature, entry: CacheEntry) {
        self.entries.insert(signature, entry);
    }

    fn on_insert(&mut self, record: &Record) {
        self.update_passes += 1;
        for (signature, entry) in self.entries.iter_mut() {
            let score = record.overlap(signature);
            match entry.offer(&record.id, score) {
                Offer::Promoted => {
                    self.promotions += 1;
                    trace!("{} promoted {} to score {}", signature, record.id, score);
                }
                Offer::Tied => {
                    self.ties_appended += 1;
                    trace!("{} tied {} at score {}", signature, record.id, score);
                }
                Offer::Ignored => {}
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
