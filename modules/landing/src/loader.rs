use std::path::Path;

use farmkit_http::HttpClient;
use tracing::{debug, instrument};

use crate::error::LandingError;
use crate::model::LandingContent;

impl LandingContent {
    /// # Errors
    /// Returns `LandingError::Json` when the document does not match the model.
    pub fn from_json_str(json: &str) -> Result<Self, LandingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    /// `LandingError::Io` when the file cannot be read, `LandingError::Json`
    /// when it does not parse.
    pub async fn load_file(path: impl AsRef<Path>) -> Result<Self, LandingError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LandingError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let content = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), products = content.products.len(), "landing content loaded");
        Ok(content)
    }

    /// Download the document from where the site serves it
    /// (usually `/assets/data.json`).
    ///
    /// # Errors
    /// `LandingError::Http` on transport failures and non-2xx responses,
    /// `LandingError::Json` when the body does not parse.
    #[instrument(skip(client))]
    pub async fn fetch(client: &HttpClient, url: &str) -> Result<Self, LandingError> {
        let body = client.get(url).send().await?.checked_bytes().await?;
        let content: Self = serde_json::from_slice(&body)?;
        debug!(products = content.products.len(), "landing content fetched");
        Ok(content)
    }
}
