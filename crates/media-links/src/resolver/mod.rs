//! Redirect resolution for shortened links.

mod config;
mod http;

pub use config::{DEFAULT_USER_AGENT, ResolverConfig};
pub use http::HttpRedirectResolver;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid url `{input}`: {reason}")]
    InvalidUrl { input: String, reason: String },
    #[error("request timed out for {url}")]
    Timeout { url: String },
    #[error("too many redirects for {url}")]
    TooManyRedirects { url: String },
    #[error("http error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("no redirect target known for {url}")]
    Unknown { url: String },
}

/// Follows redirects of a URL to its final target.
///
/// A URL that does not redirect resolves to itself. Failures are returned to
/// the caller, never papered over with the input URL.
#[async_trait]
pub trait RedirectResolver: Send + Sync {
    async fn resolve(&self, url: &str) -> Result<String, ResolveError>;
}

/// Resolves every URL to itself without touching the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl RedirectResolver for NoopResolver {
    async fn resolve(&self, url: &str) -> Result<String, ResolveError> {
        Ok(url.to_owned())
    }
}

/// Resolves from a fixed table; URLs missing from the table fail with
/// [`ResolveError::Unknown`].
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    targets: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.targets.insert(from.into(), to.into());
        self
    }
}

#[async_trait]
impl RedirectResolver for StaticResolver {
    async fn resolve(&self, url: &str) -> Result<String, ResolveError> {
        self.targets
            .get(url)
            .cloned()
            .ok_or_else(|| ResolveError::Unknown {
                url: url.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_resolver() {
        let resolver = StaticResolver::new().with_target("https://youtu.be/a", "https://b");
        assert_eq!(resolver.resolve("https://youtu.be/a").await.unwrap(), "https://b");
        assert!(matches!(
            resolver.resolve("https://youtu.be/z").await,
            Err(ResolveError::Unknown { .. })
        ));
    }

    #[tokio::test]
    async fn test_noop_resolver() {
        assert_eq!(NoopResolver.resolve("https://x").await.unwrap(), "https://x");
    }
}
