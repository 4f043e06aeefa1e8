//! The `Resource` trait binds a model to its REST collection and UI labels.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Server-assigned identifier of a resource.
pub type ResourceId = i64;

/// A record managed through `/api/v1/<COLLECTION>`.
pub trait Resource: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Creation payload (the resource minus id and timestamps).
    type New: Serialize + Clone + Send + Sync + 'static;
    /// Partial update payload.
    type Patch: Serialize + Clone + Send + Sync + 'static;

    /// Path segment of the collection, e.g. `subscription-plans`.
    const COLLECTION: &'static str;
    /// Lower-case singular label used in messages, e.g. `subscription plan`.
    const SINGULAR: &'static str;
    /// Lower-case plural label, e.g. `subscription plans`.
    const PLURAL: &'static str;
    /// Title-case label used in headings, e.g. `Subscription Plan`.
    const TITLE: &'static str;

    fn id(&self) -> ResourceId;

    fn display_name(&self) -> &str;
}
