pub mod spotify;
pub mod youtube;

pub use spotify::Spotify;
pub use youtube::YouTube;
