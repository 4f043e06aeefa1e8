use crate::builder::HttpClientBuilder;
use crate::config::TransportSecurity;
use crate::error::HttpError;
use crate::request::RequestBuilder;
use crate::response::ResponseBody;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use std::future::Future;
use std::pin::Pin;
use tower::Service;
use tower::buffer::Buffer;

/// Future type of the boxed inner service
pub type ServiceFuture =
    Pin<Box<dyn Future<Output = Result<Response<ResponseBody>, HttpError>> + Send>>;

/// Buffered service shared by all clones of an [`HttpClient`]
pub type BufferedService = Buffer<Request<Full<Bytes>>, ServiceFuture>;

/// HTTP client over a tower service stack.
///
/// `HttpClient` is `Clone + Send + Sync`; clones share one connection pool
/// through the internal `tower::buffer::Buffer`, so it can be stored directly
/// in several stores without a mutex.
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) service: BufferedService,
    pub(crate) max_body_size: usize,
    pub(crate) transport_security: TransportSecurity,
}

impl HttpClient {
    /// Create a client with the default configuration
    ///
    /// # Errors
    /// Returns an error if TLS initialization fails
    pub fn new() -> Result<Self, HttpError> {
        HttpClientBuilder::new().build()
    }

    /// Create a builder for configuring the client
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    fn request(&self, method: http::Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.service.clone(),
            self.max_body_size,
            method,
            url.to_owned(),
            self.transport_security,
        )
    }

    /// GET request builder. `url` must be absolute.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::GET, url)
    }

    /// POST request builder
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::POST, url)
    }

    /// PUT request builder
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::PUT, url)
    }

    /// DELETE request builder
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(http::Method::DELETE, url)
    }
}

/// Map buffer errors to `HttpError`
pub fn map_buffer_error(err: tower::BoxError) -> HttpError {
    match err.downcast::<HttpError>() {
        Ok(http_err) => *http_err,
        Err(err) => {
            tracing::error!(error = %err, "request buffer closed unexpectedly");
            HttpError::ServiceClosed
        }
    }
}

/// Reserve a buffer slot, failing fast with `Overloaded` when the buffer is full.
pub async fn try_acquire_buffer_slot(service: &mut BufferedService) -> Result<(), HttpError> {
    use std::task::Poll;

    let poll_result = std::future::poll_fn(|cx| match service.poll_ready(cx) {
        Poll::Ready(result) => Poll::Ready(Some(result)),
        Poll::Pending => Poll::Ready(None),
    })
    .await;

    match poll_result {
        Some(Ok(())) => Ok(()),
        Some(Err(e)) => Err(map_buffer_error(e)),
        None => Err(HttpError::Overloaded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn test_client() -> HttpClient {
        HttpClientBuilder::new().allow_insecure_http().build().unwrap()
    }

    #[tokio::test]
    async fn test_get_reads_json_body() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/tenants")
                .header("accept", "application/json");
            then.status(200)
                .json_body(json!({"success": true, "data": []}));
        });

        let url = format!("{}/api/v1/tenants", server.base_url());
        let body: serde_json::Value = test_client().get(&url).send().await.unwrap().json().await.unwrap();

        assert_eq!(body, json!({"success": true, "data": []}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/tenants")
                .header("content-type", "application/json")
                .json_body(json!({"name": "Acme"}));
            then.status(201).json_body(json!({"success": true}));
        });

        let url = format!("{}/api/v1/tenants", server.base_url());
        let resp = test_client()
            .post(&url)
            .json(&json!({"name": "Acme"}))
            .unwrap()
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), http::StatusCode::CREATED);
        m.assert();
    }

    #[tokio::test]
    async fn test_put_and_delete_methods() {
        let server = MockServer::start();
        let put = server.mock(|when, then| {
            when.method(PUT).path("/api/v1/tenants/7");
            then.status(200).json_body(json!({"success": true}));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/tenants/7");
            then.status(200).json_body(json!({"success": true}));
        });

        let client = test_client();
        let url = format!("{}/api/v1/tenants/7", server.base_url());
        client
            .put(&url)
            .json(&json!({"active": false}))
            .unwrap()
            .send()
            .await
            .unwrap();
        client.delete(&url).send().await.unwrap();

        put.assert();
        delete.assert();
    }

    #[tokio::test]
    async fn test_non_2xx_is_not_a_send_error() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/api/v1/subscription-plans");
            then.status(503)
                .json_body(json!({"success": false, "message": "db unavailable"}));
        });

        let url = format!("{}/api/v1/subscription-plans", server.base_url());
        let resp = test_client().get(&url).send().await.unwrap();
        assert_eq!(resp.status(), http::StatusCode::SERVICE_UNAVAILABLE);

        let body = resp.bytes().await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "db unavailable");
    }

    #[tokio::test]
    async fn test_default_headers_reach_server() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/tenants")
                .header("authorization", "Bearer token-1")
                .header("user-agent", "farm-console/test");
            then.status(200).json_body(json!({"success": true, "data": []}));
        });

        let client = HttpClientBuilder::new()
            .allow_insecure_http()
            .user_agent("farm-console/test")
            .bearer_token("token-1")
            .build()
            .unwrap();
        let url = format!("{}/api/v1/tenants", server.base_url());
        client.get(&url).send().await.unwrap();

        m.assert();
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start();
        let _m = server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_millis(500));
        });

        let client = HttpClientBuilder::new()
            .allow_insecure_http()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let url = format!("{}/slow", server.base_url());
        let err = client.get(&url).send().await.unwrap_err();

        assert!(matches!(err, HttpError::Timeout(_)), "got {err:?}");
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{addr}/api/v1/tenants/7");
        let err = test_client().delete(&url).send().await.unwrap_err();

        assert!(err.is_transport(), "got {err:?}");
    }
}
