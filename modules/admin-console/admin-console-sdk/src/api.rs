//! `ResourceApi` trait definition.
//!
//! One implementation per backend; the REST adapter in the admin console
//! module is the production one, tests use hand-written fakes.

use async_trait::async_trait;

use crate::envelope::ApiOutcome;
use crate::errors::AdminError;
use crate::resource::{Resource, ResourceId};

/// CRUD access to one resource collection.
///
/// `Ok(ApiOutcome::Failure { .. })` means the server answered with
/// `success: false`; `Err` means no envelope could be obtained.
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    /// `GET /api/v1/<collection>`. Items keep the server order.
    async fn list(&self) -> Result<ApiOutcome<Vec<R>>, AdminError>;

    /// `POST /api/v1/<collection>`.
    async fn create(&self, new: &R::New) -> Result<ApiOutcome<()>, AdminError>;

    /// `PUT /api/v1/<collection>/{id}`.
    async fn update(&self, id: ResourceId, patch: &R::Patch)
    -> Result<ApiOutcome<()>, AdminError>;

    /// `DELETE /api/v1/<collection>/{id}`.
    async fn delete(&self, id: ResourceId) -> Result<ApiOutcome<()>, AdminError>;
}
