//! Shared HTTP session handle.
//!
//! One [`Session`] is built in `main` and passed explicitly to the fetcher
//! and the rewrite client; nothing holds ambient connection state. Dropping
//! the session releases its connection pool.

use std::error::Error;

/// An explicit handle to the HTTP client reused across all remote calls.
#[derive(Debug, Clone)]
pub struct Session {
    http: reqwest::Client,
}

impl Session {
    /// Build a session with the crate's user agent.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// The underlying client. `reqwest::Client` is internally reference
    /// counted, so cloning it shares the session's pool.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
