// Corpus loading: reads posts from a JSON array or a JSON Lines file.
//
// The format is picked by extension: `.jsonl` / `.ndjson` are read one post
// per line, anything else is expected to hold a single JSON array.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::post::Post;

/// On-disk layout of a post corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    JsonArray,
    JsonLines,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jsonl") | Some("ndjson") => CorpusFormat::JsonLines,
            _ => CorpusFormat::JsonArray,
        }
    }
}

/// Read and parse every post in the file at `path`.
pub async fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read post corpus at {}", path.display()))?;

    let format = CorpusFormat::from_path(path);
    debug!(path = %path.display(), ?format, bytes = content.len(), "Read post corpus");

    let posts = parse_posts(&content, format)
        .with_context(|| format!("Failed to parse post corpus at {}", path.display()))?;

    info!(count = posts.len(), path = %path.display(), "Loaded posts");
    Ok(posts)
}

/// Parse posts from an in-memory string.
pub fn parse_posts(content: &str, format: CorpusFormat) -> Result<Vec<Post>> {
    match format {
        CorpusFormat::JsonArray => {
            let posts: Vec<Post> =
                serde_json::from_str(content).context("Expected a JSON array of posts")?;
            Ok(posts)
        }
        CorpusFormat::JsonLines => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str::<Post>(line)
                    .with_context(|| format!("Malformed post on line {}", i + 1))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARRAY: &str = r#"[
        {"id": 1, "author": "alyssa", "body": "is it reasonable to talk about rivest so much? @bbitdiddle", "timestamp": "2016-02-17T10:00:00Z"},
        {"id": 2, "author": "bbitdiddle", "body": "rivest talk in 30 minutes #hype", "timestamp": "2016-02-17T11:00:00Z"}
    ]"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CorpusFormat::from_path(Path::new("posts.jsonl")),
            CorpusFormat::JsonLines
        );
        assert_eq!(
            CorpusFormat::from_path(Path::new("dump.ndjson")),
            CorpusFormat::JsonLines
        );
        assert_eq!(
            CorpusFormat::from_path(Path::new("posts.json")),
            CorpusFormat::JsonArray
        );
        assert_eq!(
            CorpusFormat::from_path(Path::new("posts")),
            CorpusFormat::JsonArray
        );
    }

    #[test]
    fn test_parse_array() {
        let posts = parse_posts(ARRAY, CorpusFormat::JsonArray).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author, "alyssa");
        assert_eq!(posts[1].id, 2);
    }

    #[test]
    fn test_parse_lines_skips_blank() {
        let content = concat!(
            r#"{"id": 1, "author": "a", "body": "hi @b", "timestamp": "2016-02-17T10:00:00Z"}"#,
            "\n\n",
            r#"{"id": 2, "author": "b", "body": "hi", "timestamp": "2016-02-17T10:05:00Z"}"#,
            "\n",
        );
        let posts = parse_posts(content, CorpusFormat::JsonLines).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_parse_lines_reports_line_number() {
        let content = concat!(
            r#"{"id": 1, "author": "a", "body": "hi", "timestamp": "2016-02-17T10:00:00Z"}"#,
            "\n",
            "{not json}\n",
        );
        let err = parse_posts(content, CorpusFormat::JsonLines).unwrap_err();
        assert!(format!("{err}").contains("line 2"), "got: {err}");
    }

    #[test]
    fn test_parse_array_rejects_object() {
        assert!(parse_posts("{}", CorpusFormat::JsonArray).is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(ARRAY.as_bytes()).unwrap();

        let posts = load_posts(file.path()).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author_handle().as_str(), "alyssa");
    }

    #[tokio::test]
    async fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_posts(&missing).await.unwrap_err();
        assert!(format!("{err}").contains("nope.json"));
    }
}
