use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Number of ranked users shown when MENTIONGRAPH_TOP is unset.
pub const DEFAULT_TOP: usize = 20;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI
/// arguments override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Post corpus to read when no path is given on the command line
    pub posts_path: PathBuf,
    /// How many users `rank` prints by default
    pub top: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top = match env::var("MENTIONGRAPH_TOP") {
            Ok(raw) => parse_top(&raw)?,
            Err(_) => DEFAULT_TOP,
        };

        Ok(Self {
            posts_path: env::var("MENTIONGRAPH_POSTS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./posts.json")),
            top,
        })
    }

    /// Check that the post corpus exists.
    /// Call this before any command that reads posts.
    pub fn require_posts(&self) -> Result<()> {
        if !self.posts_path.exists() {
            anyhow::bail!(
                "Post corpus not found at {}\n\
                 Pass a path on the command line or set MENTIONGRAPH_POSTS in your .env file.",
                self.posts_path.display()
            );
        }
        Ok(())
    }
}

fn parse_top(raw: &str) -> Result<usize> {
    let top: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("MENTIONGRAPH_TOP must be a positive integer, got {raw:?}"))?;
    if top == 0 {
        anyhow::bail!("MENTIONGRAPH_TOP must be at least 1");
    }
    Ok(top)
}
