// Pattern-based mention extraction.
//
// A mention is "@" followed by one or more handle characters (letters,
// digits, underscore, hyphen). The "@" must not directly follow a handle
// character, which keeps e-mail addresses like bitdiddle@mit.edu out.
// regex-lite has no look-behind, so the preceding character is matched
// (and discarded) as part of the pattern.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::traits::MentionExtractor;

static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z0-9_-])@([A-Za-z0-9_-]+)").expect("mention pattern is valid")
});

/// Default extractor: scans raw text for `@handle` tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternExtractor;

impl MentionExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> BTreeSet<String> {
        MENTION
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Convenience wrapper around [`PatternExtractor`].
pub fn extract_mentions(text: &str) -> BTreeSet<String> {
    PatternExtractor.extract(text)
}
