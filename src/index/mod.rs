//! Index structures for ranked lookup. Postings are incrementally updateable.

pub mod attribute_index;
pub mod merge;

pub use attribute_index::AttributeIndex;
pub use merge::RankedMerge;
