//! Command-line interface definitions.

use clap::Parser;

use crate::outputs::render::{OutputFormat, RewriteFallback};
use crate::scrapers::g1::DEFAULT_LISTING_URL;

/// Command-line arguments.
///
/// Every flag has a default, so a bare invocation scrapes the default
/// listing and writes HTML files to `./tmp`. Rewriting is enabled by
/// supplying `--rewrite-endpoint`.
///
/// # Examples
///
/// ```sh
/// # Default run: HTML files into ./tmp
/// g1_news
///
/// # Markdown output in a custom directory
/// g1_news -f markdown -o ./out
///
/// # Paraphrase through a rewriting service, blanking failed fragments
/// g1_news --rewrite-endpoint http://localhost:8080/rewrite \
///         --rewrite-fallback blank
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the rendered article files
    #[arg(short, long, default_value = "./tmp")]
    pub output_dir: String,

    /// Output format for the rendered articles
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Listing page to scrape
    #[arg(short, long, default_value = DEFAULT_LISTING_URL)]
    pub listing_url: String,

    /// Omit the static style block from HTML output
    #[arg(long)]
    pub no_style: bool,

    /// Rewriting service endpoint; enables paraphrasing when set
    #[arg(long, env = "REWRITE_ENDPOINT")]
    pub rewrite_endpoint: Option<String>,

    /// Target language passed to the rewriting service
    #[arg(long, env = "REWRITE_LANGUAGE", default_value = "Portuguese")]
    pub rewrite_language: String,

    /// What to render when a rewrite is unavailable
    #[arg(long, value_enum, default_value_t = RewriteFallback::KeepOriginal)]
    pub rewrite_fallback: RewriteFallback,

    /// Also dump the scraped records as JSON into this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}
