// FollowsGraph: author -> set of inferred followees.
//
// Backed by ordered collections so iteration, JSON output and rankings are
// reproducible run to run. Self-edges are dropped on every insertion path,
// including deserialization.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize, Serializer};

use crate::posts::Handle;

type Edges = BTreeMap<Handle, BTreeSet<Handle>>;

// Keys stay raw on load so "Alice" and "alice" entries union instead of
// one overwriting the other.
type RawEdges = BTreeMap<String, BTreeSet<Handle>>;

/// Directed "probably follows" graph inferred from mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEdges")]
pub struct FollowsGraph {
    edges: Edges,
}

impl FollowsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `followees` into `author`'s entry, creating the entry if needed.
    ///
    /// The entry is created even when `followees` is empty (or only contains
    /// `author`), so callers can register an author with no outgoing edges.
    pub fn follow_all<I>(&mut self, author: Handle, followees: I)
    where
        I: IntoIterator<Item = Handle>,
    {
        let followees: Vec<Handle> = followees.into_iter().filter(|f| *f != author).collect();
        self.edges.entry(author).or_default().extend(followees);
    }

    /// Record a single edge `author -> followee`. A self-edge is ignored,
    /// though the author entry is still created.
    pub fn follow(&mut self, author: Handle, followee: Handle) {
        self.follow_all(author, [followee]);
    }

    /// Union another graph into this one. Order of merging does not matter.
    pub fn merge(&mut self, other: FollowsGraph) {
        for (author, followees) in other.edges {
            self.edges.entry(author).or_default().extend(followees);
        }
    }

    /// Followees of `author`, if the author has an entry.
    pub fn followees(&self, author: &str) -> Option<&BTreeSet<Handle>> {
        self.edges.get(author)
    }

    pub fn contains_author(&self, author: &str) -> bool {
        self.edges.contains_key(author)
    }

    pub fn authors(&self) -> impl Iterator<Item = &Handle> {
        self.edges.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Handle, BTreeSet<Handle>> {
        self.edges.iter()
    }

    /// Number of author entries.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of distinct `author -> followee` edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Every handle that appears as an author or a followee.
    pub fn handles(&self) -> BTreeSet<&Handle> {
        self.edges
            .iter()
            .flat_map(|(author, followees)| std::iter::once(author).chain(followees))
            .collect()
    }
}

// Serialized as a plain JSON object: {"alice": ["bob", "carol"]}
impl Serialize for FollowsGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.edges.serialize(serializer)
    }
}

impl From<RawEdges> for FollowsGraph {
    fn from(raw: RawEdges) -> Self {
        raw.into_iter()
            .map(|(author, followees)| (Handle::from(author), followees))
            .collect()
    }
}

impl FromIterator<(Handle, BTreeSet<Handle>)> for FollowsGraph {
    fn from_iter<T: IntoIterator<Item = (Handle, BTreeSet<Handle>)>>(iter: T) -> Self {
        let mut graph = FollowsGraph::new();
        for (author, followees) in iter {
            graph.follow_all(author, followees);
        }
        graph
    }
}

impl<'a> IntoIterator for &'a FollowsGraph {
    type Item = (&'a Handle, &'a BTreeSet<Handle>);
    type IntoIter = btree_map::Iter<'a, Handle, BTreeSet<Handle>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
