use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use mentiongraph::config::Config;
use mentiongraph::graph::build_follows_graph;
use mentiongraph::mentions::pattern::extract_mentions;
use mentiongraph::output::terminal;
use mentiongraph::posts::loader::load_posts;
use mentiongraph::posts::Post;
use mentiongraph::ranking::rank_with_counts;

/// mentiongraph: guess who follows whom from @-mentions.
///
/// Reads a corpus of posts, treats every @-mention as evidence that the
/// author follows the mentioned account, and ranks accounts by how many
/// authors appear to follow them.
#[derive(Parser)]
#[command(name = "mentiongraph", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the inferred follows graph
    Graph {
        /// Post corpus (.json array or .jsonl); defaults to MENTIONGRAPH_POSTS
        path: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank accounts by inferred follower count
    Rank {
        /// Post corpus (.json array or .jsonl); defaults to MENTIONGRAPH_POSTS
        path: Option<PathBuf>,

        /// How many accounts to show (default: MENTIONGRAPH_TOP or 20)
        #[arg(long)]
        top: Option<usize>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the mentions found in each post
    Mentions {
        /// Post corpus (.json array or .jsonl); defaults to MENTIONGRAPH_POSTS
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mentiongraph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Graph { path, json } => {
            let posts = read_corpus(&mut config, path).await?;
            let graph = build_follows_graph(&posts);
            info!(
                authors = graph.len(),
                edges = graph.edge_count(),
                "Inferred follows graph"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                terminal::display_graph(&graph);
            }
        }

        Commands::Rank { path, top, json } => {
            let posts = read_corpus(&mut config, path).await?;
            let graph = build_follows_graph(&posts);
            let ranked = rank_with_counts(&graph);
            let limit = top.unwrap_or(config.top);
            info!(users = ranked.len(), "Ranked influencers");

            if json {
                let shown = &ranked[..ranked.len().min(limit)];
                println!("{}", serde_json::to_string_pretty(shown)?);
            } else {
                terminal::display_ranking(&ranked, limit);
            }
        }

        Commands::Mentions { path } => {
            let posts = read_corpus(&mut config, path).await?;
            for post in &posts {
                let mentions: Vec<String> = extract_mentions(&post.body).into_iter().collect();
                terminal::display_post_mentions(post, &mentions);
            }
        }
    }

    Ok(())
}

/// Resolve the corpus path (CLI argument wins over config) and load it.
async fn read_corpus(config: &mut Config, path: Option<PathBuf>) -> Result<Vec<Post>> {
    if let Some(path) = path {
        config.posts_path = path;
    }
    config.require_posts()?;
    load_posts(&config.posts_path).await
}
