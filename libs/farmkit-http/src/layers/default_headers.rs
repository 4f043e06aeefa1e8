use crate::error::HttpError;
use http::header::{HeaderName, HeaderValue};
use http::{Request, Response};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer that adds a fixed set of headers to every request.
///
/// Headers already present on a request are left untouched, so a caller can
/// override the User-Agent or the `Authorization` header per request.
#[derive(Clone)]
pub struct DefaultHeadersLayer {
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl DefaultHeadersLayer {
    /// Create the layer from a User-Agent and extra `(name, value)` pairs.
    ///
    /// # Errors
    /// Returns `HttpError::InvalidHeaderName` / `InvalidHeaderValue` when a
    /// pair cannot be represented as an HTTP header.
    pub fn try_new(user_agent: &str, extra: &[(String, String)]) -> Result<Self, HttpError> {
        let mut headers = Vec::with_capacity(extra.len() + 1);
        headers.push((
            http::header::USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(HttpError::InvalidHeaderValue)?,
        ));
        for (name, value) in extra {
            let name = HeaderName::try_from(name.as_str())?;
            let mut value = HeaderValue::try_from(value.as_str())?;
            if name == http::header::AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.push((name, value));
        }
        Ok(Self {
            headers: Arc::new(headers),
        })
    }
}

impl<S> Layer<S> for DefaultHeadersLayer {
    type Service = DefaultHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DefaultHeadersService {
            inner,
            headers: Arc::clone(&self.headers),
        }
    }
}

/// Service produced by [`DefaultHeadersLayer`]
#[derive(Clone)]
pub struct DefaultHeadersService<S> {
    inner: S,
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for DefaultHeadersService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        for (name, value) in self.headers.iter() {
            if !req.headers().contains_key(name) {
                req.headers_mut().insert(name.clone(), value.clone());
            }
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{Method, StatusCode};
    use http_body_util::Full;
    use tower::ServiceExt;

    /// Echoes the request headers back in the response.
    #[derive(Clone)]
    struct EchoHeaders;

    impl Service<Request<Full<Bytes>>> for EchoHeaders {
        type Response = Response<http::HeaderMap>;
        type Error = Box<dyn std::error::Error + Send + Sync>;
        type Future = std::future::Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: Request<Full<Bytes>>) -> Self::Future {
            let (parts, _) = req.into_parts();
            std::future::ready(Ok(Response::builder()
                .status(StatusCode::OK)
                .body(parts.headers)
                .unwrap()))
        }
    }

    fn request(builder: http::request::Builder) -> Request<Full<Bytes>> {
        builder
            .method(Method::GET)
            .uri("http://localhost/api/v1/tenants")
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_adds_user_agent_and_bearer_token() {
        let layer = DefaultHeadersLayer::try_new(
            "farm-console/0.1",
            &[("authorization".to_owned(), "Bearer abc".to_owned())],
        )
        .unwrap();
        let service = layer.layer(EchoHeaders);

        let headers = service
            .oneshot(request(Request::builder()))
            .await
            .unwrap()
            .into_body();

        assert_eq!(headers.get(http::header::USER_AGENT).unwrap(), "farm-console/0.1");
        let auth = headers.get(http::header::AUTHORIZATION).unwrap();
        assert_eq!(auth, "Bearer abc");
        assert!(auth.is_sensitive());
    }

    #[tokio::test]
    async fn test_request_headers_win() {
        let layer = DefaultHeadersLayer::try_new("farm-console/0.1", &[]).unwrap();
        let service = layer.layer(EchoHeaders);

        let headers = service
            .oneshot(request(
                Request::builder().header(http::header::USER_AGENT, "custom/2.0"),
            ))
            .await
            .unwrap()
            .into_body();

        assert_eq!(headers.get(http::header::USER_AGENT).unwrap(), "custom/2.0");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(DefaultHeadersLayer::try_new("bad\x00agent", &[]).is_err());
        assert!(
            DefaultHeadersLayer::try_new("ok", &[("bad header".to_owned(), "x".to_owned())])
                .is_err()
        );
    }
}
