//! Scrape news articles from G1's games listing, optionally paraphrase
//! them through a remote rewriting service, and render each one to an HTML
//! or Markdown file.
//!
//! The reproducible core is the text pipeline: [`sanitize`] strips known
//! site noise, [`normalize`] splits a raw body into caption and
//! paragraphs, [`outputs::render`] walks a record into a document, and
//! [`outputs::files`] derives the file name and persists it. The fetcher
//! ([`scrapers::g1`]) and the rewriter ([`rewrite`]) are collaborators
//! behind narrow seams, sharing one explicit [`session::Session`] handle.

pub mod cli;
pub mod models;
pub mod normalize;
pub mod outputs;
pub mod rewrite;
pub mod sanitize;
pub mod scrapers;
pub mod session;
pub mod utils;

pub use models::{ArticleRecord, ArticleSummary, RawArticle};
pub use normalize::normalize;
pub use sanitize::sanitize;
