//! Site scrapers.
//!
//! Each scraper follows a two-phase pattern:
//!
//! 1. **Indexing**: collect article summaries (url, title, description)
//!    from a listing page
//! 2. **Fetching**: download each detail page and extract the remaining
//!    fields (image, body text, video embeds)
//!
//! Failures degrade rather than abort: an unreachable listing yields an
//! empty index, a failed detail fetch skips that one article, and a
//! missing optional element leaves its field empty.

pub mod g1;
