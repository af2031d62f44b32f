//! Index by attribute — maps each attribute to sorted record IDs.

use std::collections::HashMap;

use crate::types::{Record, RecordId, Signature};

/// Maps each attribute to a strictly increasing list of record IDs.
///
/// An ID appears in an attribute's list iff the record with that ID has the
/// attribute.
pub struct AttributeIndex {
    index: HashMap<String, Vec<RecordId>>,
}

impl AttributeIndex {
    /// Create a new, empty attribute index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Get all record IDs carrying an attribute.
    pub fn get(&self, attribute: &str) -> &[RecordId] {
        self.index
            .get(attribute)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The postings lists for the signature's attributes that exist in the
    /// index. Unknown attributes are dropped; every returned list is non-empty.
    pub fn slice(&self, signature: &Signature) -> Vec<&[RecordId]> {
        signature
            .iter()
            .filter_map(|attr| self.index.get(attr))
            .filter(|list| !list.is_empty())
            .map(|list| list.as_slice())
            .collect()
    }

    /// Incrementally add a record. Re-adding an ID to a list is a no-op.
    pub fn add_record(&mut self, record: &Record) {
        for attr in &record.attributes {
            let list = self.index.entry(attr.clone()).or_default();
            if let Err(pos) = list.binary_search(&record.id) {
                list.insert(pos, record.id.clone());
            }
        }
    }

    /// Number of distinct attributes.
    pub fn attribute_count(&self) -> usize {
        self.index.len()
    }

    /// Number of total entries across all attributes.
    pub fn len(&self) -> usize {
        self.index.values().map(|v| v.len()).sum()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over every posting. An ID repeats once per attribute it has.
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> + '_ {
        self.index.values().flatten()
    }
}

impl Default for AttributeIndex {
    fn default() -> Self {
        Self::new()
    }
}
