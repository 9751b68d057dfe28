use async_trait::async_trait;

use crate::media::{Induction, StreamType};
use crate::record::UrlSource;

/// A per-platform URL recognizer.
///
/// Shape validation (`validate`) is cheap, local and synchronous. Track
/// induction (`induce`) may go to the network, so it only runs for URLs whose
/// shape already belongs to the platform.
#[async_trait]
pub trait UrlValidator: Send + Sync {
    /// Platform display name, e.g. "YouTube".
    fn name(&self) -> &'static str;

    fn stream_type(&self) -> StreamType;

    /// Whether the URL's shape belongs to this platform. Never touches the network.
    fn validate(&self, url: &str) -> bool;

    /// Derives the track shape of a URL that passed [`validate`](Self::validate).
    async fn induce(&self, url: &str) -> Induction;

    async fn induce_type(&self, url: &str) -> Induction {
        if !self.validate(url) {
            return Induction::Unrecognized;
        }
        self.induce(url).await
    }

    /// Like [`validate`](Self::validate), failing closed for sources without a URL string.
    fn validate_source(&self, source: &dyn UrlSource) -> bool {
        source.url_str().is_some_and(|url| self.validate(url))
    }

    async fn induce_source(&self, source: &(dyn UrlSource + Sync)) -> Induction {
        match source.url_str() {
            Some(url) => self.induce_type(url).await,
            None => Induction::Unrecognized,
        }
    }
}
