use std::marker::PhantomData;

use admin_console_sdk::{AdminError, ApiEnvelope, ApiOutcome, Resource, ResourceApi, ResourceId};
use async_trait::async_trait;
use farmkit_http::{HttpClient, HttpError, RequestBuilder};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::instrument;
use url::Url;

/// REST adapter implementing `ResourceApi<R>` against `/api/v1/<collection>`.
///
/// `HttpClient` is `Clone + Send + Sync`, so one client is shared by the
/// adapters of every resource.
pub struct HttpResourceClient<R> {
    client: HttpClient,
    base: Url,
    _resource: PhantomData<fn() -> R>,
}

/// Error bodies of non-2xx responses; only the message is of interest.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl<R: Resource> HttpResourceClient<R> {
    #[must_use]
    pub fn new(client: HttpClient, base: Url) -> Self {
        Self {
            client,
            base,
            _resource: PhantomData,
        }
    }

    /// `<base>/api/v1/<collection>[/<id>]`
    fn url(&self, id: Option<ResourceId>) -> Result<Url, AdminError> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                AdminError::transport(format!("invalid API base URL: {}", self.base))
            })?;
            segments.pop_if_empty().extend(["api", "v1", R::COLLECTION]);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        request: Result<RequestBuilder, HttpError>,
    ) -> Result<ApiOutcome<Option<T>>, AdminError> {
        let response = request
            .map_err(map_http_error)?
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_http_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            tracing::warn!(status = status.as_u16(), ?message, "API rejected request");
            return Err(AdminError::rejected(status.as_u16(), message));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "response is not an API envelope");
            AdminError::decode(e.to_string())
        })?;
        Ok(envelope.into_outcome())
    }
}

fn map_http_error(err: HttpError) -> AdminError {
    match err {
        HttpError::Json(e) => AdminError::decode(e.to_string()),
        e @ HttpError::BodyTooLarge { .. } => AdminError::decode(e.to_string()),
        e => {
            tracing::warn!(error = %e, "API request failed");
            AdminError::transport(e.to_string())
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for HttpResourceClient<R> {
    #[instrument(skip_all, fields(base = %self.base, collection = R::COLLECTION))]
    async fn list(&self) -> Result<ApiOutcome<Vec<R>>, AdminError> {
        let url = self.url(None)?;
        match self.exchange::<Vec<R>>(Ok(self.client.get(url.as_str()))).await? {
            ApiOutcome::Success(Some(items)) => {
                tracing::debug!(count = items.len(), "listed resources");
                Ok(ApiOutcome::Success(items))
            }
            ApiOutcome::Success(None) => Err(AdminError::decode(
                "successful list response without data",
            )),
            ApiOutcome::Failure { message } => Ok(ApiOutcome::Failure { message }),
        }
    }

    #[instrument(skip_all, fields(base = %self.base, collection = R::COLLECTION))]
    async fn create(&self, new: &R::New) -> Result<ApiOutcome<()>, AdminError> {
        let url = self.url(None)?;
        let request = self.client.post(url.as_str()).json(new);
        Ok(self.exchange::<IgnoredAny>(request).await?.discard())
    }

    #[instrument(skip_all, fields(base = %self.base, collection = R::COLLECTION, id = id))]
    async fn update(
        &self,
        id: ResourceId,
        patch: &R::Patch,
    ) -> Result<ApiOutcome<()>, AdminError> {
        let url = self.url(Some(id))?;
        let request = self.client.put(url.as_str()).json(patch);
        Ok(self.exchange::<IgnoredAny>(request).await?.discard())
    }

    #[instrument(skip_all, fields(base = %self.base, collection = R::COLLECTION, id = id))]
    async fn delete(&self, id: ResourceId) -> Result<ApiOutcome<()>, AdminError> {
        let url = self.url(Some(id))?;
        Ok(self
            .exchange::<IgnoredAny>(Ok(self.client.delete(url.as_str())))
            .await?
            .discard())
    }
}
