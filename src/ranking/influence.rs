// Influence ranking: order every user in a follows graph by follower count.
//
// A user's follower count is the number of authors whose followee set
// contains them. Authors who nobody mentions still appear, with count 0.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::FollowsGraph;
use crate::posts::Handle;

/// A ranked user and how many authors appear to follow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Influencer {
    pub handle: Handle,
    pub followers: usize,
}

/// Count inferred followers for every handle in the graph.
///
/// Every author key gets an entry (default 0) before edges are counted, so
/// the table covers both keys and followees.
pub fn follower_counts(graph: &FollowsGraph) -> BTreeMap<Handle, usize> {
    let mut counts: BTreeMap<Handle, usize> = BTreeMap::new();

    for (author, followees) in graph {
        counts.entry(author.clone()).or_insert(0);
        for followee in followees {
            *counts.entry(followee.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Rank every handle in the graph by follower count, most followed first.
///
/// Tied handles come out in lexical order: the count table is ordered by
/// handle and the sort is stable. Only the grouping by count is guaranteed.
pub fn rank_with_counts(graph: &FollowsGraph) -> Vec<Influencer> {
    let mut ranked: Vec<Influencer> = follower_counts(graph)
        .into_iter()
        .map(|(handle, followers)| Influencer { handle, followers })
        .collect();

    ranked.sort_by(|a, b| b.followers.cmp(&a.followers));
    ranked
}

/// Handles ordered by descending inferred follower count.
pub fn rank_influencers(graph: &FollowsGraph) -> Vec<Handle> {
    rank_with_counts(graph)
        .into_iter()
        .map(|influencer| influencer.handle)
        .collect()
}
