// Unit tests for influencer ranking.
//
// Graphs are built by hand here so the ranker can be checked on shapes the
// builder never produces (authors with empty followee sets).

use std::collections::{BTreeMap, BTreeSet};

use mentiongraph::graph::FollowsGraph;
use mentiongraph::posts::Handle;
use mentiongraph::ranking::{follower_counts, rank_influencers, rank_with_counts};

fn graph(entries: &[(&str, &[&str])]) -> FollowsGraph {
    entries
        .iter()
        .map(|(author, followees)| {
            let set: BTreeSet<Handle> = followees.iter().map(|f| Handle::new(f)).collect();
            (Handle::new(author), set)
        })
        .collect()
}

fn names(ranked: &[Handle]) -> Vec<&str> {
    ranked.iter().map(Handle::as_str).collect()
}

fn position(ranked: &[Handle], handle: &str) -> usize {
    ranked
        .iter()
        .position(|h| h.as_str() == handle)
        .unwrap_or_else(|| panic!("{handle} missing from ranking"))
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn empty_graph_gives_empty_ranking() {
    assert!(rank_influencers(&FollowsGraph::new()).is_empty());
}

#[test]
fn single_author_without_followers() {
    let g = graph(&[("alice", &[])]);
    assert_eq!(names(&rank_influencers(&g)), vec!["alice"]);
}

#[test]
fn single_influencer() {
    let g = graph(&[("alice", &["bob"])]);
    assert_eq!(names(&rank_influencers(&g)), vec!["bob", "alice"]);
}

#[test]
fn two_followees_rank_above_author() {
    let g = graph(&[("alice", &["bob", "charlie"])]);
    let ranked = rank_influencers(&g);
    assert_eq!(ranked.len(), 3);
    assert_eq!(position(&ranked, "alice"), 2);
}

#[test]
fn multiple_influencers_ordered_by_count() {
    let g = graph(&[
        ("alice", &["bob", "charlie"]),
        ("bob", &["charlie"]),
        ("charlie", &[]),
    ]);
    assert_eq!(names(&rank_influencers(&g)), vec!["charlie", "bob", "alice"]);
}

#[test]
fn tied_influencers_rank_above_non_followed() {
    let g = graph(&[("alice", &["bob"]), ("charlie", &["david"])]);
    let ranked = rank_influencers(&g);

    assert_eq!(ranked.len(), 4);
    for leader in ["bob", "david"] {
        for trailer in ["alice", "charlie"] {
            assert!(
                position(&ranked, leader) < position(&ranked, trailer),
                "{leader} should rank above {trailer}: {ranked:?}"
            );
        }
    }
}

// ============================================================
// Properties
// ============================================================

fn sample() -> FollowsGraph {
    graph(&[
        ("ann", &["ben", "cat", "dan"]),
        ("ben", &["cat", "eve"]),
        ("cat", &["ann"]),
        ("dan", &[]),
        ("fay", &["cat", "ben", "gus"]),
    ])
}

#[test]
fn ranking_covers_keys_and_values_exactly_once() {
    let g = sample();
    let ranked = rank_influencers(&g);

    let unique: BTreeSet<&str> = ranked.iter().map(Handle::as_str).collect();
    assert_eq!(unique.len(), ranked.len(), "duplicate in {ranked:?}");

    let expected: BTreeSet<&str> = g.handles().into_iter().map(Handle::as_str).collect();
    assert_eq!(unique, expected);
}

#[test]
fn counts_match_inbound_edges() {
    let counts = follower_counts(&sample());
    let expected: BTreeMap<&str, usize> = [
        ("ann", 1),
        ("ben", 2),
        ("cat", 3),
        ("dan", 1),
        ("eve", 1),
        ("fay", 0),
        ("gus", 1),
    ]
    .into_iter()
    .collect();

    let actual: BTreeMap<&str, usize> = counts.iter().map(|(h, c)| (h.as_str(), *c)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn ranking_is_non_increasing() {
    let ranked = rank_with_counts(&sample());
    assert!(
        ranked.windows(2).all(|w| w[0].followers >= w[1].followers),
        "not sorted: {ranked:?}"
    );
    assert_eq!(ranked[0].handle.as_str(), "cat");
    assert_eq!(ranked.last().map(|i| i.followers), Some(0));
}

#[test]
fn ranking_with_counts_agrees_with_plain_ranking() {
    let g = sample();
    let with_counts: Vec<Handle> = rank_with_counts(&g).into_iter().map(|i| i.handle).collect();
    assert_eq!(with_counts, rank_influencers(&g));
}

#[test]
fn ranking_is_deterministic() {
    assert_eq!(rank_influencers(&sample()), rank_influencers(&sample()));
}
