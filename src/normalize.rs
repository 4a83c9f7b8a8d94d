//! Splitting raw article bodies into a caption line and paragraphs.
//!
//! G1 detail pages place the main image caption as the first line of the
//! extracted body text. The normalizer separates that line from the rest
//! and runs every line through the sanitizer on the way out.

use crate::sanitize::sanitize;

/// Split raw body text into `(caption, paragraphs)`.
///
/// Lines are split on `\n`, each line is sanitized, the first line becomes
/// the caption and the remaining lines (in document order) become the
/// paragraphs. An empty input is a valid degenerate case and yields an
/// empty caption with no paragraphs.
pub fn normalize(raw_body_text: &str) -> (String, Vec<String>) {
    let mut lines = raw_body_text.split('\n').map(sanitize);
    let caption = lines.next().unwrap_or_default();
    (caption, lines.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_and_paragraphs_split() {
        let (caption, paragraphs) = normalize("Caption\nPara one\nPara two");
        assert_eq!(caption, "Caption");
        assert_eq!(paragraphs, vec!["Para one", "Para two"]);
    }

    #[test]
    fn test_empty_input_is_degenerate_not_error() {
        let (caption, paragraphs) = normalize("");
        assert_eq!(caption, "");
        assert!(paragraphs.is_empty());
    }

    #[test]
    fn test_single_line_has_no_paragraphs() {
        let (caption, paragraphs) = normalize("only a caption");
        assert_eq!(caption, "only a caption");
        assert!(paragraphs.is_empty());
    }

    #[test]
    fn test_every_line_is_sanitized() {
        let (caption, paragraphs) = normalize("Leia mais: legenda\ncorpo leia mais");
        assert_eq!(caption, ": legenda");
        assert_eq!(paragraphs, vec!["corpo "]);
    }

    #[test]
    fn test_blank_interior_lines_are_kept() {
        let (caption, paragraphs) = normalize("cap\n\nfim");
        assert_eq!(caption, "cap");
        assert_eq!(paragraphs, vec!["", "fim"]);
    }
}
