#![warn(warnings)]

//! HTTP client used by the smart farming console.
//!
//! A hyper-based client wrapped in a small tower stack:
//! - TLS via rustls (HTTPS only unless insecure HTTP is explicitly allowed)
//! - Connection pooling
//! - Per-request timeout
//! - Default headers (User-Agent, optional bearer token) on every request
//! - Transparent response decompression (gzip, brotli, deflate)
//! - Size-limited body reads
//!
//! # Example
//!
//! ```ignore
//! use farmkit_http::HttpClient;
//! use std::time::Duration;
//!
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .bearer_token("secret")
//!     .build()?;
//!
//! let body = client
//!     .get("https://api.smartfarm.example/api/v1/tenants")
//!     .send()
//!     .await?
//!     .bytes()
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod error;
mod layers;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity};
pub use error::{HttpError, InvalidUriKind};
pub use layers::{DefaultHeadersLayer, DefaultHeadersService};
pub use request::RequestBuilder;
pub use response::{ERROR_BODY_PREVIEW_LIMIT, HttpResponse, ResponseBody};
