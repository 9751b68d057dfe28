use serde::{Deserialize, Serialize};
use std::fmt;

/// The media platform a URL belongs to.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    /// Video platform.
    YouTube,
    /// Music platform.
    Spotify,
}

impl StreamType {
    pub fn as_str(&self) -> &str {
        match self {
            StreamType::YouTube => "youtube",
            StreamType::Spotify => "spotify",
        }
    }

    pub fn from_str(stream: &str) -> Option<Self> {
        match stream.to_lowercase().as_str() {
            "youtube" => Some(StreamType::YouTube),
            "spotify" => Some(StreamType::Spotify),
            _ => None,
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
