//! Admin console SDK
//!
//! This crate provides the public contract of the admin console:
//! - Resource models (`Tenant`, `SubscriptionPlan` and their create/patch payloads)
//! - The `Resource` trait tying a model to its REST collection and labels
//! - The API envelope and its decoded form (`ApiEnvelope`, `ApiOutcome`)
//! - Error type (`AdminError`)
//! - `ResourceApi`, the async trait every backend adapter implements
//!
//! ```ignore
//! let api: Arc<dyn ResourceApi<Tenant>> = Arc::new(HttpResourceClient::new(client, base));
//! match api.list().await? {
//!     ApiOutcome::Success(tenants) => render(tenants),
//!     ApiOutcome::Failure { message } => report(message),
//! }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod envelope;
pub mod errors;
pub mod models;
pub mod resource;

pub use api::ResourceApi;
pub use envelope::{ApiEnvelope, ApiOutcome};
pub use errors::AdminError;
pub use models::{
    NewSubscriptionPlan, NewTenant, SubscriptionPlan, SubscriptionPlanPatch, Tenant, TenantPatch,
};
pub use resource::{Resource, ResourceId};
