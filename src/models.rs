//! Data models for scraped articles.
//!
//! Three shapes, in pipeline order:
//! - [`ArticleSummary`]: partial data off the listing page (url, title,
//!   description), all fields raw
//! - [`RawArticle`]: summary plus detail-page fields, still raw
//! - [`ArticleRecord`]: the immutable, sanitized record consumed by the
//!   renderer and the JSON output
//!
//! `ArticleRecord` is constructed exactly once per article via
//! [`ArticleRecord::from_raw`] and never mutated afterwards; sanitation
//! produces new values rather than editing in place so the pipeline stays
//! stateless and testable. An absent image is `None`, not an empty string.

use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::normalize::normalize;
use crate::sanitize::sanitize;

/// Partial article data extracted from a listing page entry.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    /// Absolute URL of the detail page.
    pub url: String,
    /// Raw headline text.
    pub title: String,
    /// Raw summary text shown under the headline.
    pub description: String,
}

/// A fully fetched but unprocessed article.
///
/// `body_text` holds the detail page's text content with one semantic line
/// per `\n`-separated entry; by site convention the first line is the main
/// image caption. `video_embed_urls` are the iframe sources of embedded
/// YouTube blocks, in document order.
#[derive(Debug)]
pub struct RawArticle {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub body_text: String,
    pub video_embed_urls: Vec<String>,
}

/// The sanitized, immutable article record.
///
/// `body_paragraphs` excludes the line consumed as `image_caption`.
/// `video_ids` may be shorter than the number of marker paragraphs in the
/// body; that is a data inconsistency on the page, not a fatal condition,
/// and the renderer degrades gracefully.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_caption: String,
    pub body_paragraphs: Vec<String>,
    pub video_ids: Vec<String>,
}

impl ArticleRecord {
    /// Build a clean record from a raw fetch result.
    ///
    /// Sanitizes title and description, splits the body into caption and
    /// paragraphs, and derives video IDs from the embed URLs. Embed URLs
    /// that do not parse are dropped with a warning.
    pub fn from_raw(raw: RawArticle) -> Self {
        let (image_caption, body_paragraphs) = normalize(&raw.body_text);
        let video_ids = raw
            .video_embed_urls
            .iter()
            .filter_map(|embed| match video_id_from_embed(embed) {
                Some(id) => Some(id),
                None => {
                    warn!(%embed, "Could not derive a video id from embed URL");
                    None
                }
            })
            .collect();

        Self {
            url: raw.url,
            title: sanitize(&raw.title),
            description: sanitize(&raw.description),
            image_url: raw.image_url,
            image_caption,
            body_paragraphs,
            video_ids,
        }
    }
}

/// Extract the video id from an embed URL.
///
/// The id is the final path segment; the query string is not part of it.
/// `https://www.youtube.com/embed/xyz987?rel=0` yields `xyz987`.
fn video_id_from_embed(embed_url: &str) -> Option<String> {
    let parsed = Url::parse(embed_url).ok()?;
    let id = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?;
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fixture() -> RawArticle {
        RawArticle {
            url: "https://g1.globo.com/pop-arte/games/noticia/jogo.ghtml".to_string(),
            title: "Leia mais: Jogo novo".to_string(),
            description: "desc".to_string(),
            image_url: None,
            body_text: "cap\n'Trailer'\nmore text".to_string(),
            video_embed_urls: vec!["https://yt/embed/xyz987?x=1".to_string()],
        }
    }

    #[test]
    fn test_from_raw_sanitizes_and_splits() {
        let record = ArticleRecord::from_raw(raw_fixture());
        assert_eq!(record.title, ": Jogo novo");
        assert_eq!(record.description, "desc");
        assert_eq!(record.image_caption, "cap");
        assert_eq!(record.body_paragraphs, vec!["'Trailer'", "more text"]);
        assert_eq!(record.video_ids, vec!["xyz987"]);
    }

    #[test]
    fn test_video_id_strips_query_string() {
        assert_eq!(
            video_id_from_embed("https://www.youtube.com/embed/abc123?rel=0&t=5"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_video_id_takes_last_path_segment() {
        assert_eq!(
            video_id_from_embed("https://yt/embed/nested/xyz"),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn test_unparseable_embed_is_dropped() {
        let mut raw = raw_fixture();
        raw.video_embed_urls = vec!["not a url".to_string()];
        let record = ArticleRecord::from_raw(raw);
        assert!(record.video_ids.is_empty());
    }

    #[test]
    fn test_empty_body_is_degenerate() {
        let mut raw = raw_fixture();
        raw.body_text = String::new();
        let record = ArticleRecord::from_raw(raw);
        assert_eq!(record.image_caption, "");
        assert!(record.body_paragraphs.is_empty());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ArticleRecord::from_raw(raw_fixture());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"imageCaption\":\"cap\""));
        assert!(json.contains("\"videoIds\":[\"xyz987\"]"));
        assert!(json.contains("\"imageUrl\":null"));
    }
}
