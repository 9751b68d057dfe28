use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of the media item a URL addresses.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Single,
    Playlist,
    Album,
}

impl TrackType {
    pub fn as_str(&self) -> &str {
        match self {
            TrackType::Single => "single",
            TrackType::Playlist => "playlist",
            TrackType::Album => "album",
        }
    }

    pub fn from_str(track: &str) -> Option<Self> {
        match track.to_lowercase().as_str() {
            "single" => Some(TrackType::Single),
            "playlist" => Some(TrackType::Playlist),
            "album" => Some(TrackType::Album),
            _ => None,
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
