// Graph construction: turns a post corpus into a FollowsGraph.
//
// Each post is reduced on its own to a partial edge set (author, followees),
// then the partials are folded together by set union. No state is shared
// between posts, so the map step can be split across workers and the
// resulting graphs combined with `FollowsGraph::merge`.

use std::collections::BTreeSet;

use tracing::debug;

use super::follows::FollowsGraph;
use crate::mentions::pattern::PatternExtractor;
use crate::mentions::traits::MentionExtractor;
use crate::posts::{Handle, Post};

/// Guess who follows whom from the mentions in `posts`.
///
/// An author is assumed to follow everyone they mention, other than
/// themselves. Authors who never mention anyone else get no entry.
pub fn build_follows_graph(posts: &[Post]) -> FollowsGraph {
    build_follows_graph_with(posts, &PatternExtractor)
}

/// Same as [`build_follows_graph`], with a caller-supplied mention extractor.
pub fn build_follows_graph_with(posts: &[Post], extractor: &dyn MentionExtractor) -> FollowsGraph {
    let graph = posts
        .iter()
        .filter_map(|post| post_edges(post, extractor))
        .fold(FollowsGraph::new(), |mut graph, (author, followees)| {
            graph.follow_all(author, followees);
            graph
        });

    debug!(
        posts = posts.len(),
        authors = graph.len(),
        edges = graph.edge_count(),
        "Built follows graph"
    );

    graph
}

/// The edges a single post contributes, or `None` if it mentions nobody
/// besides its own author.
pub fn post_edges(
    post: &Post,
    extractor: &dyn MentionExtractor,
) -> Option<(Handle, BTreeSet<Handle>)> {
    let author = post.author_handle();
    let followees: BTreeSet<Handle> = extractor
        .extract(&post.body)
        .iter()
        .map(|mention| Handle::new(mention))
        .filter(|mention| *mention != author)
        .collect();

    if followees.is_empty() {
        None
    } else {
        Some((author, followees))
    }
}
