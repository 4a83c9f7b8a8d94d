//! Noise removal for text extracted from G1 article pages.
//!
//! G1 pages embed boilerplate phrases inside the article body ("Leia mais",
//! "Leia também", cross-links to interviews) that survive text extraction.
//! This module strips them with an ordered table of literal, case-sensitive
//! substring replacements. No regex, no trimming; the entries are disjoint
//! literals so table order does not affect the result.

/// Literal replacement table applied by [`sanitize`].
///
/// The duplicated lower/upper-case entries are intentional: matching is
/// strictly case-sensitive.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("Leia mais", ""),
    ("leia mais", ""),
    ("Leia também", ""),
    ("leia também", ""),
    ("; veja destaques", ""),
    (". .", "."),
    ("em entrevista ao g1", ""),
    (", .", "."),
];

/// Remove known noise substrings from a text fragment.
///
/// Applies every entry of the replacement table, replacing each occurrence
/// with the empty string or a shortened punctuation form. Whitespace is not
/// otherwise trimmed. Pure and total; there are no error conditions.
pub fn sanitize(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (needle, replacement) in REPLACEMENTS {
        cleaned = cleaned.replace(needle, replacement);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leia_mais_prefix() {
        assert_eq!(sanitize("Leia mais depois"), " depois");
    }

    #[test]
    fn test_strips_both_cases() {
        assert_eq!(sanitize("leia mais e Leia mais"), " e ");
        assert_eq!(sanitize("Leia também isso"), " isso");
        assert_eq!(sanitize("leia também isso"), " isso");
    }

    #[test]
    fn test_punctuation_shortening() {
        assert_eq!(sanitize("Fim. ."), "Fim.");
        assert_eq!(sanitize("disse, ."), "disse.");
    }

    #[test]
    fn test_interview_credit_removed() {
        assert_eq!(
            sanitize("afirmou em entrevista ao g1 ontem"),
            "afirmou  ontem"
        );
    }

    #[test]
    fn test_highlights_suffix_removed() {
        assert_eq!(sanitize("Jogo lançado; veja destaques"), "Jogo lançado");
    }

    #[test]
    fn test_case_sensitive_non_matches_survive() {
        assert_eq!(sanitize("LEIA MAIS"), "LEIA MAIS");
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(sanitize("  sem ruído  "), "  sem ruído  ");
    }

    #[test]
    fn test_idempotent_on_clean_output() {
        let inputs = [
            "Leia mais depois",
            "texto comum",
            "disse, . Fim. .",
            "Leia também; veja destaques",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }
}
