use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StreamType, TrackType};

/// A successful classification: both the platform and the item shape are known.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub stream_type: StreamType,
    pub track_type: TrackType,
}

impl Classification {
    pub fn new(stream_type: StreamType, track_type: TrackType) -> Self {
        Self {
            stream_type,
            track_type,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.stream_type, self.track_type)
    }
}

/// Outcome of running a validator (or the whole registry) over one URL.
///
/// `Unresolved` is the "recognized platform, undetermined shape" state. It is
/// reported for diagnostics but never counts as a classification.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Induction {
    Classified(Classification),
    Unresolved { stream_type: StreamType },
    Unrecognized,
}

impl Induction {
    pub fn classified(stream_type: StreamType, track_type: TrackType) -> Self {
        Induction::Classified(Classification::new(stream_type, track_type))
    }

    pub fn unresolved(stream_type: StreamType) -> Self {
        Induction::Unresolved { stream_type }
    }

    /// Builds an outcome for `stream_type` from an optional track shape.
    pub fn from_track(stream_type: StreamType, track_type: Option<TrackType>) -> Self {
        match track_type {
            Some(track_type) => Self::classified(stream_type, track_type),
            None => Self::unresolved(stream_type),
        }
    }

    /// The terminal result: `Some` only for a full classification.
    pub fn classification(&self) -> Option<Classification> {
        match self {
            Induction::Classified(c) => Some(*c),
            _ => None,
        }
    }

    pub fn stream_type(&self) -> Option<StreamType> {
        match self {
            Induction::Classified(c) => Some(c.stream_type),
            Induction::Unresolved { stream_type } => Some(*stream_type),
            Induction::Unrecognized => None,
        }
    }

    /// The `(stream, track)` pair with `None` standing in for "void".
    pub fn as_pair(&self) -> (Option<StreamType>, Option<TrackType>) {
        (
            self.stream_type(),
            self.classification().map(|c| c.track_type),
        )
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, Induction::Classified(_))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Induction::Unrecognized)
    }
}

impl fmt::Display for Induction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Induction::Classified(c) => fmt::Display::fmt(c, f),
            Induction::Unresolved { stream_type } => write!(f, "{stream_type}/unresolved"),
            Induction::Unrecognized => f.write_str("unclassified"),
        }
    }
}
