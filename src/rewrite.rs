//! Paraphrasing of article text through a remote rewriting service.
//!
//! The seam is the [`Rewrite`] trait: anything that can turn a text
//! fragment into a [`Rewritten`] outcome. The production implementation,
//! [`RewriteClient`], posts the fragment and a target language to an HTTP
//! endpoint. Rewrite unavailability is a typed state, never a silent empty
//! string; the renderer decides the fallback policy explicitly.
//!
//! Fragments are rewritten one at a time, in document order, with no
//! retries. A failed call degrades that one fragment, not the article.

use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::session::Session;
use crate::utils::truncate_for_log;

/// Outcome of a rewrite attempt.
///
/// `Unavailable` covers every failure mode of the remote tool: the
/// endpoint could not be reached, answered with an error status, or
/// produced no output. Callers choose what to render in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewritten {
    /// The service produced a paraphrased version of the input.
    Text(String),
    /// The service could not produce output for this fragment.
    Unavailable,
}

/// Capability to paraphrase a text fragment.
pub trait Rewrite {
    /// Rewrite one fragment. Implementations report failure through
    /// [`Rewritten::Unavailable`] rather than an error type, since the
    /// pipeline never aborts on a failed rewrite.
    async fn rewrite(&self, text: &str) -> Rewritten;
}

/// HTTP-backed rewriter.
///
/// Sends `text` and `language` as form fields to the configured endpoint
/// and expects the rewritten fragment as the plain-text response body.
#[derive(Debug, Clone)]
pub struct RewriteClient {
    http: reqwest::Client,
    endpoint: String,
    language: String,
}

impl RewriteClient {
    pub fn new(session: &Session, endpoint: String, language: String) -> Self {
        Self {
            http: session.http().clone(),
            endpoint,
            language,
        }
    }
}

impl Rewrite for RewriteClient {
    #[instrument(level = "debug", skip_all, fields(endpoint = %self.endpoint, bytes = text.len()))]
    async fn rewrite(&self, text: &str) -> Rewritten {
        let t0 = Instant::now();
        let mut form = HashMap::new();
        form.insert("text", text);
        form.insert("language", self.language.as_str());

        let response = match self.http.post(&self.endpoint).form(&form).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Rewrite request failed; fragment unavailable");
                return Rewritten::Unavailable;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "Rewrite service refused; fragment unavailable");
            return Rewritten::Unavailable;
        }

        match response.text().await {
            Ok(body) if !body.is_empty() => {
                debug!(
                    elapsed_ms = t0.elapsed().as_millis() as u64,
                    preview = %truncate_for_log(&body, 120),
                    "Fragment rewritten"
                );
                Rewritten::Text(body)
            }
            Ok(_) => {
                warn!("Rewrite service returned an empty body; fragment unavailable");
                Rewritten::Unavailable
            }
            Err(e) => {
                warn!(error = %e, "Could not read rewrite response; fragment unavailable");
                Rewritten::Unavailable
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Rewrite, Rewritten};

    /// Returns the input unchanged; stands in for a healthy service.
    #[derive(Debug)]
    pub struct EchoRewriter;

    impl Rewrite for EchoRewriter {
        async fn rewrite(&self, text: &str) -> Rewritten {
            Rewritten::Text(text.to_string())
        }
    }

    /// Fails every fragment; stands in for an unreachable service.
    #[derive(Debug)]
    pub struct DownRewriter;

    impl Rewrite for DownRewriter {
        async fn rewrite(&self, _text: &str) -> Rewritten {
            Rewritten::Unavailable
        }
    }

    /// Uppercases the input so tests can tell rewritten text apart.
    #[derive(Debug)]
    pub struct ShoutingRewriter;

    impl Rewrite for ShoutingRewriter {
        async fn rewrite(&self, text: &str) -> Rewritten {
            Rewritten::Text(text.to_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{DownRewriter, EchoRewriter};
    use super::*;

    #[tokio::test]
    async fn test_echo_rewriter_round_trips() {
        let out = EchoRewriter.rewrite("um parágrafo").await;
        assert_eq!(out, Rewritten::Text("um parágrafo".to_string()));
    }

    #[tokio::test]
    async fn test_down_rewriter_is_unavailable() {
        assert_eq!(DownRewriter.rewrite("qualquer").await, Rewritten::Unavailable);
    }

    #[tokio::test]
    async fn test_client_maps_connection_failure_to_unavailable() {
        let session = Session::new().unwrap();
        // Discard port on loopback: connection is refused immediately.
        let client = RewriteClient::new(
            &session,
            "http://127.0.0.1:9/rewrite".to_string(),
            "Portuguese".to_string(),
        );
        assert_eq!(client.rewrite("texto").await, Rewritten::Unavailable);
    }
}
