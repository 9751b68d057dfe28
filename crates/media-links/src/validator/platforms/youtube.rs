use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::media::{Induction, StreamType, TrackType};
use crate::resolver::RedirectResolver;
use crate::validator::UrlValidator;
use crate::validator::utils::{has_query_param, parse_lenient};

pub static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?(?:://)?)?(?:www\.)?(?:youtu\.be|youtube\.com)").unwrap()
});

pub static MUSIC_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://)?music.youtube.com/watch").unwrap());

/// Video platform validator.
///
/// The track shape comes from the query string (`v` for a single video,
/// `list` for a playlist). Short links such as `youtu.be/<id>` carry neither,
/// so they are resolved once and the resolved URL is inspected instead.
pub struct YouTube {
    resolver: Arc<dyn RedirectResolver>,
}

impl YouTube {
    pub fn new(resolver: Arc<dyn RedirectResolver>) -> Self {
        Self { resolver }
    }

    fn track_type(url: &str) -> Option<TrackType> {
        let url = parse_lenient(url).ok()?;
        if has_query_param(&url, "v") {
            Some(TrackType::Single)
        } else if has_query_param(&url, "list") {
            Some(TrackType::Playlist)
        } else {
            None
        }
    }
}

#[async_trait]
impl UrlValidator for YouTube {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    fn stream_type(&self) -> StreamType {
        StreamType::YouTube
    }

    fn validate(&self, url: &str) -> bool {
        URL_REGEX.is_match(url) || MUSIC_URL_REGEX.is_match(url)
    }

    async fn induce(&self, url: &str) -> Induction {
        if let Some(track) = Self::track_type(url) {
            return Induction::classified(StreamType::YouTube, track);
        }

        debug!(url = %url, "No track parameters, resolving redirects");
        let track = match self.resolver.resolve(url).await {
            Ok(resolved) => Self::track_type(&resolved),
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to resolve redirects");
                None
            }
        };
        Induction::from_track(StreamType::YouTube, track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{NoopResolver, ResolveError, StaticResolver};
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and answers from a fixed table.
    #[derive(Default)]
    struct CountingResolver {
        inner: StaticResolver,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RedirectResolver for CountingResolver {
        async fn resolve(&self, url: &str) -> Result<String, ResolveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.resolve(url).await
        }
    }

    fn counting(inner: StaticResolver) -> Arc<CountingResolver> {
        Arc::new(CountingResolver {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=CoTGzy51IjA", TrackType::Single)]
    #[case("https://www.youtube.com/watch?v=40d0p_Wb2no&list=PL1", TrackType::Single)]
    #[case("https://www.youtube.com/playlist?list=PLwg22VSCR0W5TcCcyhymD6g_a_6-DY74r", TrackType::Playlist)]
    #[case("youtube.com/watch?v=abc", TrackType::Single)]
    #[case("https://music.youtube.com/watch?v=abc", TrackType::Single)]
    #[case("https://youtu.be/abc?list=PL2", TrackType::Playlist)]
    #[tokio::test]
    async fn test_query_shapes_need_no_resolver(#[case] url: &str, #[case] track: TrackType) {
        let resolver = counting(StaticResolver::new());
        let youtube = YouTube::new(resolver.clone());
        assert!(youtube.validate(url));
        assert_eq!(
            youtube.induce_type(url).await,
            Induction::classified(StreamType::YouTube, track)
        );
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_short_link_resolves_once() {
        let resolver = counting(StaticResolver::new().with_target(
            "https://youtu.be/CoTGzy51IjA",
            "https://www.youtube.com/watch?v=CoTGzy51IjA&feature=youtu.be",
        ));
        let youtube = YouTube::new(resolver.clone());
        assert_eq!(
            youtube.induce_type("https://youtu.be/CoTGzy51IjA").await,
            Induction::classified(StreamType::YouTube, TrackType::Single)
        );
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolved_url_is_not_resolved_again() {
        let resolver = counting(
            StaticResolver::new()
                .with_target("https://youtu.be/a", "https://youtu.be/b")
                .with_target("https://youtu.be/b", "https://www.youtube.com/watch?v=b"),
        );
        let youtube = YouTube::new(resolver.clone());
        assert_eq!(
            youtube.induce_type("https://youtu.be/a").await,
            Induction::unresolved(StreamType::YouTube)
        );
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolver_failure_is_unresolved() {
        // the empty table fails every lookup
        let resolver = counting(StaticResolver::new());
        let youtube = YouTube::new(resolver.clone());
        assert_eq!(
            youtube.induce_type("https://youtu.be/abc").await,
            Induction::unresolved(StreamType::YouTube)
        );
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[case("google.com")]
    #[case("https://vimeo.com/123")]
    #[case("https://open.spotify.com/track/1")]
    #[case("https://m.youtube.com/watch?v=1")]
    #[case("see https://youtu.be/abc")]
    #[case("")]
    #[tokio::test]
    async fn test_rejects_without_network(#[case] url: &str) {
        let resolver = counting(StaticResolver::new());
        let youtube = YouTube::new(resolver.clone());
        assert!(!youtube.validate(url));
        assert_eq!(youtube.induce_type(url).await, Induction::Unrecognized);
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_noop_resolver_leaves_short_link_unresolved() {
        let youtube = YouTube::new(Arc::new(NoopResolver));
        assert_eq!(
            youtube.induce_type("https://youtu.be/abc").await,
            Induction::unresolved(StreamType::YouTube)
        );
    }
}
