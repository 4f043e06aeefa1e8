use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::ui::DEFAULT_PAGE_SIZE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Settings of the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminConsoleConfig {
    /// Platform API root; resource paths are appended to it.
    pub base_url: String,
    /// Rows per table page.
    pub page_size: usize,
}

impl Default for AdminConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl AdminConsoleConfig {
    /// Parse the base URL, which must be an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBaseUrl` otherwise.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() {
            Ok(url)
        } else {
            Err(invalid(format!("unsupported scheme '{}'", url.scheme())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let cfg = AdminConsoleConfig::default();
        assert_eq!(cfg.parsed_base_url().unwrap().as_str(), "http://localhost:8080/");
        assert_eq!(cfg.page_size, 10);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: AdminConsoleConfig = serde_json::from_str(r#"{"page_size": 25}"#).unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.page_size, 25);

        let unknown: Result<AdminConsoleConfig, _> = serde_json::from_str(r#"{"pageSize": 5}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn rejects_relative_and_foreign_urls() {
        for bad in ["/api", "ftp://farm.example", "not a url"] {
            let cfg = AdminConsoleConfig {
                base_url: bad.to_owned(),
                ..AdminConsoleConfig::default()
            };
            assert!(
                matches!(cfg.parsed_base_url(), Err(ConfigError::InvalidBaseUrl { .. })),
                "{bad} accepted"
            );
        }
    }
}
