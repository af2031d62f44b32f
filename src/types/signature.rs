//! Canonical query signatures used as cache keys.

use serde::Serialize;

/// The canonical form of a query: attributes sorted and deduplicated.
///
/// Used directly as a composite map key, so attribute strings may contain any
/// character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Signature(Vec<String>);

impl Signature {
    /// Normalize an attribute list. Order and repetition are discarded.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut attrs: Vec<String> = attributes.into_iter().map(Into::into).collect();
        attrs.sort_unstable();
        attrs.dedup();
        Self(attrs)
    }

    /// Whether the signature contains an attribute.
    pub fn contains(&self, attribute: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(attribute))
            .is_ok()
    }

    /// Iterate attributes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Number of distinct attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The attributes as a sorted slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Signature {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
