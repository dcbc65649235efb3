// Mention extraction: finding @handles inside post text.

pub mod pattern;
pub mod traits;
