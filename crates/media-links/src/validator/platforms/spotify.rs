use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::media::{Induction, StreamType, TrackType};
use crate::validator::UrlValidator;
use crate::validator::utils::named_group;

pub static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(spotify:|https://[a-z]+\.spotify\.com/)").unwrap());

static TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(spotify:|https://[a-z]+\.spotify\.com/)(?P<type>playlist|album|track)").unwrap()
});

/// Music platform validator. Links are never shortened, so there is no
/// redirect fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spotify;

impl Spotify {
    pub fn new() -> Self {
        Self
    }

    fn track_type(url: &str) -> Option<TrackType> {
        match named_group(&TYPE_REGEX, url, "type")? {
            "track" => Some(TrackType::Single),
            "playlist" => Some(TrackType::Playlist),
            "album" => Some(TrackType::Album),
            _ => None,
        }
    }
}

#[async_trait]
impl UrlValidator for Spotify {
    fn name(&self) -> &'static str {
        "Spotify"
    }

    fn stream_type(&self) -> StreamType {
        StreamType::Spotify
    }

    fn validate(&self, url: &str) -> bool {
        URL_REGEX.is_match(url)
    }

    async fn induce(&self, url: &str) -> Induction {
        Induction::from_track(StreamType::Spotify, Self::track_type(url))
    }
}
