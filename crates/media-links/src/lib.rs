//! Media link extraction and classification.
//!
//! Scans free-form text (post bodies, comments) for URLs and classifies each
//! one by media platform ([`StreamType`]) and addressed item shape
//! ([`TrackType`]). Shortened links are resolved through a pluggable
//! [`RedirectResolver`](resolver::RedirectResolver).
//!
//! ```rust,no_run
//! # async fn demo() -> media_links::Result<()> {
//! let registry = media_links::default_registry()?;
//! let classification = registry
//!     .classify("https://www.youtube.com/watch?v=CoTGzy51IjA")
//!     .await;
//! println!("{classification:?}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod media;
pub mod record;
pub mod resolver;
pub mod validator;

pub use error::{Error, Result};
pub use extract::extract_urls;
pub use media::{Classification, Induction, StreamType, TrackType};
pub use record::{ClassifiedRecord, FragmentKind, TextFragment, UrlRecord, UrlSource};
pub use validator::{ValidatorRegistry, default_registry};
