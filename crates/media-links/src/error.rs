use thiserror::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Setup failures. Per-URL resolution failures never surface here: they are
/// reported as [`crate::resolver::ResolveError`] by resolvers and folded into
/// an unresolved outcome by validators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
