//! Ranked merge over sorted postings lists.
//!
//! Walks several strictly increasing lists in lockstep and yields every
//! distinct ID once, in ascending order, with the number of lists that
//! contain it. No intersection or union is ever materialized; memory is
//! bounded by the number of lists.

use std::collections::BTreeMap;
use std::iter::FusedIterator;

use crate::types::Score;

/// Lazy, single-pass merge yielding `(id, score)` pairs in ascending ID order.
///
/// The frontier holds the IDs currently at the head of some still-active list,
/// each with the count of lists whose cursor points at it. The smallest
/// frontier ID is always safe to emit: every list containing it must already
/// be positioned on it, since smaller IDs are drained first.
pub struct RankedMerge<'a, T: Ord> {
    /// Unconsumed tail of each active list. Never empty.
    cursors: Vec<&'a [T]>,
    /// Head ID -> number of cursors positioned on it.
    frontier: BTreeMap<&'a T, Score>,
}

impl<'a, T: Ord> RankedMerge<'a, T> {
    /// Start a merge over the given lists. Each list must be strictly
    /// increasing. Empty lists are skipped.
    pub fn new<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [T]>,
    {
        let cursors: Vec<&'a [T]> = lists.into_iter().filter(|l| !l.is_empty()).collect();
        let mut frontier = BTreeMap::new();
        for &list in &cursors {
            *frontier.entry(&list[0]).or_insert(0) += 1;
        }
        Self { cursors, frontier }
    }

    /// Number of lists not yet exhausted.
    pub fn active_lists(&self) -> usize {
        self.cursors.len()
    }
}

impl<'a, T: Ord> Iterator for RankedMerge<'a, T> {
    type Item = (&'a T, Score);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, score) = self.frontier.pop_first()?;

        let frontier = &mut self.frontier;
        self.cursors.retain_mut(|list| {
            let current: &'a [T] = *list;
            if &current[0] != id {
                return true;
            }
            let rest = &current[1..];
            *list = rest;
            match rest.first() {
                Some(head) => {
                    *frontier.entry(head).or_insert(0) += 1;
                    true
                }
                None => false,
            }
        });

        Some((id, score))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self.cursors.iter().map(|l| l.len()).sum();
        (self.frontier.len(), Some(remaining))
    }
}

impl<T: Ord> FusedIterator for RankedMerge<'_, T> {}
