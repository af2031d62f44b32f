//! Cached best-score results.

use std::cmp::Ordering;

use serde::Serialize;

use crate::types::{RecordId, Score};

/// The best score for a signature and every record ID achieving it.
///
/// A score of zero with no IDs is the "known miss" result: it is cacheable
/// and distinct from a signature that was never computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    /// Highest number of query attributes any record satisfies.
    pub best_score: Score,
    /// IDs sharing `best_score`, ascending.
    pub ids: Vec<RecordId>,
}

/// What `CacheEntry::offer` did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Below the best score, or zero. Entry unchanged.
    Ignored,
    /// Matched the best score; ID joined the tie set.
    Tied,
    /// Beat the best score; tie set reset to this ID.
    Promoted,
}

impl CacheEntry {
    /// The known-miss entry.
    pub fn miss() -> Self {
        Self::default()
    }

    /// Whether no record matches any query attribute.
    pub fn is_miss(&self) -> bool {
        self.best_score == 0
    }

    /// Fold a scored candidate into the running best.
    ///
    /// Zero scores never join the tie set, so a known miss stays empty.
    pub fn offer(&mut self, id: &str, score: Score) -> Offer {
        if score == 0 {
            return Offer::Ignored;
        }
        match score.cmp(&self.best_score) {
            Ordering::Less => Offer::Ignored,
            Ordering::Equal => {
                if let Err(pos) = self.ids.binary_search_by(|probe| probe.as_str().cmp(id)) {
                    self.ids.insert(pos, id.to_owned());
                }
                Offer::Tied
            }
            Ordering::Greater => {
                self.best_score = score;
                self.ids.clear();
                self.ids.push(id.to_owned());
                Offer::Promoted
            }
        }
    }
}
