pub mod classification;
pub mod stream_type;
pub mod track_type;

pub use classification::{Classification, Induction};
pub use stream_type::StreamType;
pub use track_type::TrackType;
