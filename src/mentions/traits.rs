// Mention extractor trait: swap-ready abstraction.
//
// The graph builder only needs "which handles does this text mention". The
// default implementation is a pattern scan; a platform-specific extractor
// (e.g. one reading structured facets instead of raw text) can replace it
// without touching the builder.

use std::collections::BTreeSet;

/// Trait for finding the handles mentioned in a single text body.
pub trait MentionExtractor {
    /// Return every mentioned handle, deduplicated, with case as found in `text`.
    fn extract(&self, text: &str) -> BTreeSet<String>;
}
