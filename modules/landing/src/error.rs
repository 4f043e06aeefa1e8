use std::path::PathBuf;

use farmkit_http::HttpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("failed to read landing content from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid landing content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to fetch landing content: {0}")]
    Http(#[from] HttpError),
}
