//! # g1_news
//!
//! A scraping pipeline that pulls articles from G1's games listing page,
//! optionally paraphrases their text through a remote rewriting service,
//! and writes one HTML or Markdown file per article.
//!
//! ## Usage
//!
//! ```sh
//! g1_news                       # HTML files into ./tmp
//! g1_news -f markdown -o ./out  # Markdown into ./out
//! ```
//!
//! ## Pipeline
//!
//! 1. **Indexing**: collect article summaries from the listing page
//! 2. **Fetching**: download each detail page, sequentially
//! 3. **Cleaning**: sanitize text fields and split the body into caption
//!    and paragraphs
//! 4. **Rendering**: build the document, paraphrasing fragment by fragment
//!    when a rewrite endpoint is configured
//! 5. **Emission**: derive a file stem from the title and write the file
//!
//! Scrape and rewrite failures degrade to empty or skipped results; file
//! I/O failures in the emission step are fatal.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use g1_news::cli::Cli;
use g1_news::models::ArticleRecord;
use g1_news::outputs::render::{RenderOptions, render};
use g1_news::outputs::{files, json};
use g1_news::rewrite::RewriteClient;
use g1_news::scrapers::g1;
use g1_news::session::Session;
use g1_news::utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("g1_news starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.format, ?args.listing_url, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // One session handle, shared by the fetcher and the rewriter.
    let session = Session::new()?;
    let rewriter = args
        .rewrite_endpoint
        .clone()
        .map(|endpoint| RewriteClient::new(&session, endpoint, args.rewrite_language.clone()));
    if let Some(endpoint) = &args.rewrite_endpoint {
        info!(%endpoint, language = %args.rewrite_language, "Rewriting enabled");
    }

    let opts = RenderOptions {
        format: args.format,
        include_style: !args.no_style,
        fallback: args.rewrite_fallback,
    };

    // ---- Index and fetch ----
    let summaries = g1::index_articles(&session, &args.listing_url).await;
    let raw_articles = g1::fetch_articles(&session, summaries).await;

    let records: Vec<ArticleRecord> = raw_articles
        .into_iter()
        .map(ArticleRecord::from_raw)
        .collect();
    info!(count = records.len(), "Articles ready to render");

    if let Some(json_dir) = &args.json_output_dir {
        if let Err(e) = json::write_articles(&records, json_dir).await {
            error!(error = %e, path = %json_dir, "Failed to write JSON dump");
        }
    }

    // ---- Render and emit, one article at a time ----
    let mut written = 0usize;
    for record in &records {
        let document = render(record, &opts, rewriter.as_ref()).await;

        let stem = match files::derive_file_name(&document) {
            Some(stem) if !stem.is_empty() => stem,
            _ => {
                warn!(url = %record.url, "Rendered document has no usable title; skipping");
                continue;
            }
        };

        let path = files::save(&args.output_dir, &stem, opts.format.extension(), &document).await?;
        info!(path = %path.display(), url = %record.url, "Article file saved");
        written += 1;
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        total = records.len(),
        written,
        skipped = records.len() - written,
        "Execution complete"
    );

    Ok(())
}
