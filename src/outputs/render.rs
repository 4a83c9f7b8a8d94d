//! Format-independent article rendering.
//!
//! The walk is the same for both formats: level-1 title, level-3
//! description, optional image, then the body paragraphs in order. A
//! paragraph wrapped in single quotes is a video-callout marker; when the
//! article carries video ids, each marker becomes a level-2 heading plus an
//! embedded-video block, consuming the next id. Blocks are separated by a
//! blank line.
//!
//! Rewriting happens here, one fragment at a time in document order, so the
//! renderer owns the fallback policy for unavailable rewrites instead of
//! inheriting silent empty strings from the service.

use clap::ValueEnum;
use tracing::{instrument, warn};

use crate::models::ArticleRecord;
use crate::outputs::{html, markdown};
use crate::rewrite::{Rewrite, Rewritten};

/// Which markup tokens the walk emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Markdown,
}

impl OutputFormat {
    /// File extension for emitted documents, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
        }
    }
}

/// What to render when a rewrite comes back unavailable.
///
/// The original behavior (blank) is available but not the default; keeping
/// the source text is the safer policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RewriteFallback {
    /// Render the un-rewritten text.
    KeepOriginal,
    /// Render an empty fragment.
    Blank,
}

/// Rendering knobs, fixed per run.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Prepend the static style block (HTML only).
    pub include_style: bool,
    pub fallback: RewriteFallback,
}

/// True for paragraphs wrapped in literal single quotes.
fn is_video_marker(paragraph: &str) -> bool {
    paragraph.len() >= 2 && paragraph.starts_with('\'') && paragraph.ends_with('\'')
}

/// Render an article to a complete document.
///
/// `rewriter` is applied to the title, the description, and every ordinary
/// body paragraph, sequentially; marker headings are emitted verbatim.
/// Markers beyond the number of available video ids degrade to ordinary
/// paragraphs with a warning.
#[instrument(level = "debug", skip_all, fields(url = %article.url, format = ?opts.format))]
pub async fn render<R: Rewrite>(
    article: &ArticleRecord,
    opts: &RenderOptions,
    rewriter: Option<&R>,
) -> String {
    let format = opts.format;
    let mut blocks: Vec<String> = Vec::new();

    if opts.include_style && format == OutputFormat::Html {
        blocks.push(html::STYLE.to_string());
    }

    let title = rewritten_or(rewriter, &article.title, opts.fallback).await;
    blocks.push(heading(format, 1, &title));

    let description = rewritten_or(rewriter, &article.description, opts.fallback).await;
    blocks.push(heading(format, 3, &description));

    if let Some(src) = article.image_url.as_deref().filter(|s| !s.is_empty()) {
        blocks.push(image(format, src, &article.image_caption));
    }

    let mut video_counter = 0usize;
    for paragraph in &article.body_paragraphs {
        if !article.video_ids.is_empty() && is_video_marker(paragraph) {
            // Enclosing quotes are ASCII, so byte slicing is in bounds.
            let callout = &paragraph[1..paragraph.len() - 1];
            match article.video_ids.get(video_counter) {
                Some(id) => {
                    blocks.push(heading(format, 2, callout));
                    blocks.push(video(format, id, callout));
                    video_counter += 1;
                }
                None => {
                    warn!(
                        url = %article.url,
                        markers_seen = video_counter + 1,
                        ids = article.video_ids.len(),
                        "More video markers than video ids; rendering marker as body text"
                    );
                    let text = rewritten_or(rewriter, paragraph, opts.fallback).await;
                    blocks.push(body_paragraph(format, &text));
                }
            }
        } else {
            let text = rewritten_or(rewriter, paragraph, opts.fallback).await;
            blocks.push(body_paragraph(format, &text));
        }
    }

    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}

async fn rewritten_or<R: Rewrite>(
    rewriter: Option<&R>,
    text: &str,
    fallback: RewriteFallback,
) -> String {
    let Some(rewriter) = rewriter else {
        return text.to_string();
    };
    match rewriter.rewrite(text).await {
        Rewritten::Text(rewritten) => rewritten,
        Rewritten::Unavailable => match fallback {
            RewriteFallback::KeepOriginal => text.to_string(),
            RewriteFallback::Blank => String::new(),
        },
    }
}

fn heading(format: OutputFormat, level: u8, text: &str) -> String {
    match format {
        OutputFormat::Html => html::heading(level, text),
        OutputFormat::Markdown => markdown::heading(level, text),
    }
}

fn body_paragraph(format: OutputFormat, text: &str) -> String {
    match format {
        OutputFormat::Html => html::paragraph(text),
        OutputFormat::Markdown => markdown::paragraph(text),
    }
}

fn image(format: OutputFormat, src: &str, alt: &str) -> String {
    match format {
        OutputFormat::Html => html::image(src, alt),
        OutputFormat::Markdown => markdown::image(src, alt),
    }
}

fn video(format: OutputFormat, id: &str, title: &str) -> String {
    match format {
        OutputFormat::Html => html::video(id, title),
        OutputFormat::Markdown => markdown::video(id, title),
    }
}
