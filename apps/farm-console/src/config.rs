//! Layered configuration for the console.
//!
//! Sources, lowest to highest priority:
//! 1) built-in defaults
//! 2) YAML file (`--config`)
//! 3) environment (`FARM__SECTION__KEY`, e.g. `FARM__API__BASE_URL`)
//! 4) command-line overrides

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use admin_console::{AdminConsoleConfig, DEFAULT_BASE_URL};
use admin_console::ui::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};
use farmkit_http::{DEFAULT_USER_AGENT, HttpClient, TransportSecurity};
use farmkit_utils::SecretString;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use url::{Host, Url};

pub const ENV_PREFIX: &str = "FARM__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub console: ConsoleConfig,
    pub landing: LandingConfig,
}

/// Platform REST API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,

    #[serde(with = "farmkit_utils::humantime_serde")]
    pub request_timeout: Duration,

    pub user_agent: String,

    /// Sent as `Authorization: Bearer <token>`. Printed redacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<SecretString>,

    /// Plain HTTP to non-loopback hosts. Loopback hosts are always allowed.
    pub allow_insecure_http: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("farm-console/", env!("CARGO_PKG_VERSION")).to_owned(),
            bearer_token: None,
            allow_insecure_http: false,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn transport(&self) -> TransportSecurity {
        if self.allow_insecure_http || is_loopback_url(&self.base_url) {
            TransportSecurity::AllowInsecureHttp
        } else {
            TransportSecurity::TlsOnly
        }
    }

    /// Build the shared HTTP client. Needs a running Tokio runtime.
    ///
    /// # Errors
    /// Fails when TLS setup fails or the token is not a valid header value.
    pub fn http_client(&self) -> Result<HttpClient> {
        let user_agent = if self.user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            self.user_agent.as_str()
        };
        let mut builder = HttpClient::builder()
            .timeout(self.request_timeout)
            .user_agent(user_agent)
            .transport(self.transport());
        if let Some(token) = self.bearer_token.as_ref().filter(|t| !t.is_empty()) {
            builder = builder.bearer_token(token.expose());
        }
        builder.build().context("failed to build HTTP client")
    }
}

fn is_loopback_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub page_size: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    /// Local `data.json`. When unset, the fixture is fetched from
    /// `<base_url>/assets/data.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,
}

/// Command-line values layered over the loaded configuration.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the YAML file, then `FARM__*` environment variables.
    ///
    /// # Errors
    /// Fails when the file does not parse or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides<'_>) {
        if let Some(base_url) = overrides.base_url {
            base_url.clone_into(&mut self.api.base_url);
        }
        let level = match overrides.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
    }

    #[must_use]
    pub fn admin_console(&self) -> AdminConsoleConfig {
        AdminConsoleConfig {
            base_url: self.api.base_url.clone(),
            page_size: self.console.page_size,
        }
    }

    /// Validate what `load` cannot: the base URL and the landing fixture path.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.admin_console()
            .parsed_base_url()
            .context("invalid api.base_url")?;
        if let Some(fixture) = &self.landing.fixture
            && !fixture.is_file()
        {
            anyhow::bail!("landing fixture does not exist: {}", fixture.display());
        }
        Ok(())
    }

    /// # Errors
    /// Fails if the configuration cannot be rendered.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| anyhow::anyhow!("failed to render configuration as YAML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        temp_env::with_vars_unset(["FARM__API__BASE_URL", "FARM__CONSOLE__PAGE_SIZE"], || {
            let config = AppConfig::load(None).unwrap();
            assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.api.request_timeout, Duration::from_secs(30));
            assert_eq!(config.console.page_size, DEFAULT_PAGE_SIZE);
            assert_eq!(config.logging.level, "warn");
            assert!(config.api.bearer_token.is_none());
        });
    }

    #[test]
    fn yaml_then_env_then_cli() {
        let file = write_yaml(
            r"
api:
  base_url: https://yaml.example
  request_timeout: 5s
  bearer_token: s3cret
console:
  page_size: 25
",
        );

        temp_env::with_var("FARM__CONSOLE__PAGE_SIZE", Some("7"), || {
            let mut config = AppConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.api.base_url, "https://yaml.example");
            assert_eq!(config.api.request_timeout, Duration::from_secs(5));
            assert_eq!(config.console.page_size, 7);
            assert_eq!(
                config.api.bearer_token.as_ref().map(SecretString::expose),
                Some("s3cret")
            );

            config.apply_cli_overrides(&CliOverrides {
                base_url: Some("https://cli.example"),
                verbose: 2,
            });
            assert_eq!(config.api.base_url, "https://cli.example");
            assert_eq!(config.logging.level, "debug");
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_yaml("api:\n  base_uri: https://typo.example\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn yaml_output_redacts_token() {
        let mut config = AppConfig::default();
        config.api.bearer_token = Some(SecretString::new("s3cret"));
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("[REDACTED]"));
        assert!(!yaml.contains("s3cret"));
        assert!(yaml.contains("30s"));
    }

    #[test]
    fn plain_http_only_for_loopback_unless_allowed() {
        let mut api = ApiConfig::default();
        assert_eq!(api.transport(), TransportSecurity::AllowInsecureHttp);

        api.base_url = "http://127.0.0.1:9000".to_owned();
        assert_eq!(api.transport(), TransportSecurity::AllowInsecureHttp);

        api.base_url = "http://farm.example".to_owned();
        assert_eq!(api.transport(), TransportSecurity::TlsOnly);

        api.allow_insecure_http = true;
        assert_eq!(api.transport(), TransportSecurity::AllowInsecureHttp);
    }

    #[test]
    fn validate_rejects_bad_base_url_and_missing_fixture() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.api.base_url = "ftp://farm.example".to_owned();
        assert!(config.validate().is_err());

        config.api.base_url = DEFAULT_BASE_URL.to_owned();
        config.landing.fixture = Some(PathBuf::from("/nonexistent/data.json"));
        assert!(config.validate().is_err());
    }
}
