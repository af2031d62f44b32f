//! Phase 3 tests: Cache coherence under randomized workloads, tie-break distribution.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use attribute_index::cache::CacheEntry;
use attribute_index::engine::{IndexStore, QueryEngine};
use attribute_index::types::{Record, Signature};

// ==================== Helpers ====================

const VOCABULARY: [&str; 10] = [
    "golang", "rust", "k8s", "ruby", "nestjs", "kotlin", "sql", "aws", "react", "c++",
];

/// Pick a random subset of the vocabulary (possibly empty, possibly with repeats).
fn random_attributes(rng: &mut StdRng, max: usize) -> Vec<String> {
    let count = rng.gen_range(0..=max);
    (0..count)
        .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())].to_string())
        .collect()
}

/// Build `count` records with shuffled IDs and at least one attribute each.
fn random_records(rng: &mut StdRng, count: usize) -> Vec<Record> {
    let mut ids: Vec<usize> = (0..count).collect();
    ids.shuffle(rng);
    ids.into_iter()
        .map(|i| {
            let mut attrs = random_attributes(rng, 4);
            if attrs.is_empty() {
                attrs.push(VOCABULARY[i % VOCABULARY.len()].to_string());
            }
            Record::new(format!("r{:04}", i), attrs)
        })
        .collect()
}

/// Best-score result computed by scoring every record directly.
fn brute_force<'a>(records: impl IntoIterator<Item = &'a Record>, signature: &Signature) -> CacheEntry {
    let scored: Vec<(usize, &str)> = records
        .into_iter()
        .map(|r| (r.overlap(signature), r.id.as_str()))
        .collect();
    let best = scored.iter().map(|(s, _)| *s).max().unwrap_or(0);
    if best == 0 {
        return CacheEntry::miss();
    }
    let mut ids: Vec<String> = scored
        .iter()
        .filter(|(s, _)| *s == best)
        .map(|(_, id)| id.to_string())
        .collect();
    ids.sort();
    CacheEntry {
        best_score: best,
        ids,
    }
}

// ==================== Coherence Tests ====================

#[test]
fn test_incremental_cache_matches_recompute() {
    let mut rng = StdRng::seed_from_u64(2024);

    for round in 0..10 {
        let records = random_records(&mut rng, 150);
        let queries: Vec<Vec<String>> = (0..40).map(|_| random_attributes(&mut rng, 5)).collect();

        let mut store = IndexStore::new();
        let mut engine = QueryEngine::seeded(round);

        // Warm the cache before any data exists, then interleave adds and searches.
        for q in queries.iter().take(10) {
            engine.search(&mut store, q.iter().cloned());
        }
        for (i, record) in records.iter().enumerate() {
            store.add(record.clone()).unwrap();
            if i % 7 == 0 {
                let q = &queries[rng.gen_range(0..queries.len())];
                engine.search(&mut store, q.iter().cloned());
            }
        }

        let cached: Vec<(Signature, CacheEntry)> = store
            .cache()
            .iter()
            .map(|(sig, entry)| (sig.clone(), entry.clone()))
            .collect();
        assert!(!cached.is_empty());

        for (signature, entry) in cached {
            assert_eq!(
                entry,
                store.query(&signature),
                "round {} signature {}",
                round,
                signature
            );
        }

        let mut fresh = IndexStore::new();
        fresh.add_all(records.iter().cloned()).unwrap();
        let mut fresh_engine = QueryEngine::seeded(round);
        for q in &queries {
            assert_eq!(
                engine.resolve(&mut store, q.iter().cloned()),
                fresh_engine.resolve(&mut fresh, q.iter().cloned())
            );
        }
    }
}

#[test]
fn test_merge_path_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(77);
    let records = random_records(&mut rng, 300);

    let mut store = IndexStore::new();
    store.add_all(records.iter().cloned()).unwrap();

    for _ in 0..200 {
        let signature = Signature::new(random_attributes(&mut rng, 6));
        assert_eq!(
            store.query(&signature),
            brute_force(&records, &signature),
            "signature {}",
            signature
        );
    }
}

#[test]
fn test_unknown_and_empty_queries_never_match() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut store = IndexStore::new();
    store.add_all(random_records(&mut rng, 50)).unwrap();
    let mut engine = QueryEngine::seeded(5);

    for _ in 0..3 {
        assert!(engine.search(&mut store, ["haskell", "cobol"]).is_none());
        assert!(engine.search(&mut store, Vec::<String>::new()).is_none());
    }
    assert_eq!(engine.stats().no_matches, 6);
}

// ==================== Tie-break Tests ====================

#[test]
fn test_tie_break_is_uniform() {
    let mut store = IndexStore::new();
    for id in ["a", "b", "c", "d"] {
        store.add(Record::new(id, ["x", "y"])).unwrap();
    }
    store.add(Record::new("e", ["x"])).unwrap();

    let mut engine = QueryEngine::seeded(31337);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..4000 {
        let id = engine.search(&mut store, ["x", "y"]).unwrap().id.clone();
        *counts.entry(id).or_default() += 1;
    }

    assert_eq!(counts.len(), 4);
    assert!(!counts.contains_key("e"));
    for (id, count) in &counts {
        assert!(
            (800..1200).contains(count),
            "id {} chosen {} times",
            id,
            count
        );
    }
}
