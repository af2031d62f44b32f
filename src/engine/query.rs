//! Query executor — normalize, consult the cache, merge on miss, break ties.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::IndexStore;
use crate::cache::{CacheEntry, SearchCache};
use crate::types::{IndexConfig, Record, Signature};

/// Counters describing query activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Total queries resolved.
    pub searches: u64,
    /// Queries answered from the cache.
    pub cache_hits: u64,
    /// Queries computed from the postings.
    pub cache_misses: u64,
    /// Searches that found no matching record.
    pub no_matches: u64,
}

/// The query engine. Owns the random source used to break ties.
pub struct QueryEngine<R = StdRng> {
    rng: R,
    stats: QueryStats,
}

impl QueryEngine<StdRng> {
    /// Create a query engine seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a query engine with a fixed tie-break seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a query engine from configuration.
    pub fn from_config(config: &IndexConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for QueryEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QueryEngine<R> {
    /// Create a query engine drawing ties from the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            stats: QueryStats::default(),
        }
    }

    /// Find a best-matching record, chosen uniformly among ties.
    ///
    /// Returns `None` when no record has any of the attributes, including for
    /// an empty query. A cached ID missing from the registry is logged and
    /// also yields `None`, without counting as a no-match.
    pub fn search<'s, C, I, S>(
        &mut self,
        store: &'s mut IndexStore<C>,
        attributes: I,
    ) -> Option<&'s Record>
    where
        C: SearchCache,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let signature = Signature::new(attributes);
        let chosen = self.with_entry(store, signature, |rng, entry| {
            if entry.is_miss() {
                None
            } else {
                entry.ids.choose(rng).cloned()
            }
        });

        let store: &'s IndexStore<C> = store;
        match chosen {
            Some(id) => {
                let record = store.get(&id);
                if record.is_none() {
                    warn!("Cached ID {} is not in the registry", id);
                }
                record
            }
            None => {
                self.stats.no_matches += 1;
                None
            }
        }
    }

    /// Resolve the full best-score result for a query: the score and every
    /// tied ID, in ascending order.
    pub fn resolve<C, I, S>(&mut self, store: &mut IndexStore<C>, attributes: I) -> CacheEntry
    where
        C: SearchCache,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let signature = Signature::new(attributes);
        self.with_entry(store, signature, |_, entry| entry.clone())
    }

    /// Snapshot of the activity counters.
    pub fn stats(&self) -> QueryStats {
        self.stats
    }

    /// Look the signature up in the cache, computing and storing it on a miss,
    /// then hand the entry to `f`.
    fn with_entry<C, T>(
        &mut self,
        store: &mut IndexStore<C>,
        signature: Signature,
        f: impl FnOnce(&mut R, &CacheEntry) -> T,
    ) -> T
    where
        C: SearchCache,
    {
        self.stats.searches += 1;

        if let Some(entry) = store.cache().lookup(&signature) {
            self.stats.cache_hits += 1;
            debug!(
                "Cache hit for {}: score {} ({} tied)",
                signature,
                entry.best_score,
                entry.ids.len()
            );
            return f(&mut self.rng, entry);
        }

        self.stats.cache_misses += 1;
        let entry = store.query(&signature);
        debug!(
            "Cache miss for {}: computed score {} ({} tied)",
            signature,
            entry.best_score,
            entry.ids.len()
        );
        let out = f(&mut self.rng, &entry);
        store.cache_mut().store(signature, entry);
        out
    }
}
