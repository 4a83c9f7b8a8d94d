//! JSON dump of the scraped records.
//!
//! One `articles.json` per run, written only when a JSON output directory
//! is configured. Useful for inspecting what the fetcher extracted without
//! reading the rendered documents.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::ArticleRecord;

/// Serialize the records to `{json_output_dir}/articles.json`.
#[instrument(level = "info", skip_all, fields(%json_output_dir, count = articles.len()))]
pub async fn write_articles(
    articles: &[ArticleRecord],
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(articles)?;
    fs::create_dir_all(json_output_dir).await?;
    let path = Path::new(json_output_dir).join("articles.json");
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON dump");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawArticle;

    #[tokio::test]
    async fn test_write_articles_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("json");
        let out = out.to_str().unwrap();

        let record = ArticleRecord::from_raw(RawArticle {
            url: "https://g1.globo.com/x".to_string(),
            title: "Título".to_string(),
            description: "desc".to_string(),
            image_url: None,
            body_text: "cap\ncorpo".to_string(),
            video_embed_urls: vec![],
        });

        write_articles(&[record], out).await.unwrap();

        let written = std::fs::read_to_string(format!("{out}/articles.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["title"], "Título");
        assert_eq!(parsed[0]["imageCaption"], "cap");
    }
}
