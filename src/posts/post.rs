// Post: one authored message in the corpus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::handle::Handle;

/// A single post, as loaded from the corpus.
///
/// `author` keeps the spelling found in the source data; call
/// [`Post::author_handle`] for the normalized identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub body: String,
    /// When the post was made. Not used for graph inference.
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: u64,
        author: impl Into<String>,
        body: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            body: body.into(),
            timestamp,
        }
    }

    pub fn author_handle(&self) -> Handle {
        Handle::new(&self.author)
    }
}
