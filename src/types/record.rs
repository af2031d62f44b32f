//! The indexed record — an ID plus a set of attributes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Signature;

/// Record identifier. IDs order the postings lists, so their ordering is
/// plain byte-wise string ordering.
pub type RecordId = String;

/// A single record — the unit of data being indexed and retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, immutable once added.
    pub id: RecordId,
    /// The attributes this record possesses.
    pub attributes: BTreeSet<String>,
}

impl Record {
    /// Create a record from an ID and any collection of attributes.
    /// Repeated attributes collapse into one.
    pub fn new<I, S>(id: impl Into<RecordId>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this record has the given attribute.
    pub fn has(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    /// Number of the signature's attributes this record possesses.
    ///
    /// Computed by direct set intersection, independent of the postings lists.
    pub fn overlap(&self, signature: &Signature) -> usize {
        self.attributes
            .iter()
            .filter(|attr| signature.contains(attr))
            .count()
    }
}
