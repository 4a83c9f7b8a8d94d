//! G1 games-section scraper.
//!
//! Scrapes [G1](https://g1.globo.com/pop-arte/games/), Globo's news portal.
//! Listing entries live in `.feed-post-body` cards; detail pages are AMP
//! documents, so the main image is an `amp-img` element and embedded videos
//! sit inside `.block-youtube` iframes.

use futures::stream::{self, StreamExt};
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::models::{ArticleSummary, RawArticle};
use crate::session::Session;

/// Default listing page.
pub const DEFAULT_LISTING_URL: &str = "https://g1.globo.com/pop-arte/games/";

static POST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".feed-post-body").expect("post selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".gui-color-hover").expect("title selector"));
static DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".feed-post-body-resumo").expect("description selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector"));
static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("amp-img").expect("image selector"));
static VIDEO_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".block-youtube iframe").expect("video selector"));
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article p, article figcaption, article blockquote").expect("body selector")
});

/// Index a listing page into article summaries.
///
/// An unreachable or unparseable listing is logged and surfaces as an
/// empty index; the pipeline continues with whatever was collected.
#[instrument(level = "info", skip(session))]
pub async fn index_articles(session: &Session, listing_url: &str) -> Vec<ArticleSummary> {
    match index_listing(session, listing_url).await {
        Ok(summaries) => {
            info!(count = summaries.len(), "Indexed listing page");
            summaries
        }
        Err(e) => {
            error!(error = %e, %listing_url, "Listing fetch failed; continuing with empty index");
            Vec::new()
        }
    }
}

async fn index_listing(
    session: &Session,
    listing_url: &str,
) -> Result<Vec<ArticleSummary>, Box<dyn Error>> {
    let base_url = Url::parse(listing_url)?;
    let html = session.http().get(listing_url).send().await?.text().await?;
    let summaries = extract_summaries(&html, &base_url);
    debug!(urls = ?summaries.iter().map(|s| &s.url).collect::<Vec<_>>(), "Listing URLs");
    Ok(summaries)
}

/// Pull article summaries out of a listing page document.
///
/// Entries missing a link or a headline are skipped; duplicate links to
/// the same detail page are collapsed, keeping document order.
fn extract_summaries(html: &str, base_url: &Url) -> Vec<ArticleSummary> {
    let document = Html::parse_document(html);

    let mut summaries = Vec::new();
    for post in document.select(&POST_SELECTOR) {
        let Some(href) = post
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            warn!("Listing entry without a link; skipping");
            continue;
        };
        let Ok(url) = base_url.join(href) else {
            warn!(%href, "Listing entry with unresolvable link; skipping");
            continue;
        };

        let title = first_text(&post, &TITLE_SELECTOR).unwrap_or_default();
        let description = first_text(&post, &DESCRIPTION_SELECTOR).unwrap_or_default();
        if title.is_empty() {
            warn!(url = %url, "Listing entry without a headline; skipping");
            continue;
        }

        summaries.push(ArticleSummary {
            url: url.to_string(),
            title,
            description,
        });
    }

    summaries
        .into_iter()
        .unique_by(|summary| summary.url.clone())
        .collect()
}

/// Fetch detail pages for every summary, sequentially.
///
/// Failed fetches are logged and skipped without failing the batch.
#[instrument(level = "info", skip_all, fields(count = summaries.len()))]
pub async fn fetch_articles(session: &Session, summaries: Vec<ArticleSummary>) -> Vec<RawArticle> {
    let articles: Vec<RawArticle> = stream::iter(summaries)
        .then(|summary| async move {
            let url = summary.url.clone();
            match fetch_article(session, summary).await {
                Ok(article) => {
                    debug!(%url, "Fetched article");
                    Some(article)
                }
                Err(e) => {
                    error!(error = %e, %url, "Article fetch failed; skipping");
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = articles.len(), "Fetched article contents");
    articles
}

/// Fetch one detail page.
#[instrument(level = "info", skip_all, fields(url = %summary.url))]
async fn fetch_article(
    session: &Session,
    summary: ArticleSummary,
) -> Result<RawArticle, Box<dyn Error>> {
    let html = session.http().get(&summary.url).send().await?.text().await?;
    Ok(extract_detail(summary, &html))
}

/// Fill in a summary with the detail page's fields.
///
/// The image and video blocks are optional page elements; their absence
/// leaves the corresponding fields empty rather than erroring.
fn extract_detail(summary: ArticleSummary, html: &str) -> RawArticle {
    let document = Html::parse_document(html);

    let image_url = document
        .select(&IMAGE_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    let video_embed_urls = document
        .select(&VIDEO_SELECTOR)
        .filter_map(|iframe| iframe.value().attr("src"))
        .map(str::to_string)
        .collect::<Vec<_>>();

    let body_text = document
        .select(&BODY_SELECTOR)
        .filter_map(|element| {
            let line = element_text(&element);
            if line.is_empty() { None } else { Some(line) }
        })
        .join("\n");

    info!(
        bytes = body_text.len(),
        has_image = image_url.is_some(),
        videos = video_embed_urls.len(),
        "Parsed article"
    );

    RawArticle {
        url: summary.url,
        title: summary.title,
        description: summary.description,
        image_url,
        body_text,
        video_embed_urls,
    }
}

fn first_text(scope: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(|el| element_text(&el))
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
