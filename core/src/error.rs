use thiserror::Error;

pub use crate::fixture::FixtureError;
pub use crate::types::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `segment` is the first component of `path` that did not resolve.
    #[error("path not found: {path} (no `{segment}`)")]
    PathNotFound { path: String, segment: String },

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}
