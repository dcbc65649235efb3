// Colored terminal output for the follows graph and influencer ranking.
//
// main.rs decides what to show; this module decides how it looks.

use colored::Colorize;

use crate::graph::FollowsGraph;
use crate::posts::Post;
use crate::ranking::Influencer;

/// Display the top `limit` entries of a ranking.
pub fn display_ranking(ranked: &[Influencer], limit: usize) {
    if ranked.is_empty() {
        println!("No mentions found, nobody to rank.");
        return;
    }

    let shown = ranked.len().min(limit);
    println!(
        "\n{}",
        format!("=== Influencers (top {shown} of {}) ===", ranked.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<32} {:>9}",
        "Rank".dimmed(),
        "Handle".dimmed(),
        "Followers".dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    // Equal counts share a rank number
    let mut rank = 0;
    let mut previous: Option<usize> = None;
    for (i, influencer) in ranked.iter().take(limit).enumerate() {
        if previous != Some(influencer.followers) {
            rank = i + 1;
            previous = Some(influencer.followers);
        }
        println!(
            "  {:>4}. @{:<30} {:>9}",
            rank,
            influencer.handle,
            colorize_count(influencer.followers),
        );
    }

    if ranked.len() > shown {
        println!("  {}", format!("... {} more", ranked.len() - shown).dimmed());
    }
    println!();
}

/// Display the graph as one line per author.
pub fn display_graph(graph: &FollowsGraph) {
    if graph.is_empty() {
        println!("No follow relationships inferred.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Follows Graph ({} authors, {} edges) ===",
            graph.len(),
            graph.edge_count()
        )
        .bold()
    );
    println!();

    for (author, followees) in graph {
        let list = followees
            .iter()
            .map(|f| format!("@{f}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  @{} {} {}", author.as_str().bold(), "->".dimmed(), list);
    }
    println!();
}

/// Display each post's mentions, for checking what the extractor picks up.
pub fn display_post_mentions(post: &Post, mentions: &[String]) {
    let found = if mentions.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        mentions
            .iter()
            .map(|m| format!("@{m}").cyan().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("  #{:<6} @{:<24} {}", post.id, post.author, found);
}

fn colorize_count(count: usize) -> colored::ColoredString {
    let text = count.to_string();
    match count {
        0 => text.dimmed(),
        1 => text.normal(),
        2..=4 => text.yellow(),
        _ => text.green().bold(),
    }
}
