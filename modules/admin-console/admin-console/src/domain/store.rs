use std::sync::Arc;

use admin_console_sdk::{AdminError, ApiOutcome, Resource, ResourceApi, ResourceId};
use tokio::sync::watch;
use tracing::instrument;

use super::notify::Notifier;

// ============================================================================
// State
// ============================================================================

/// Observable state of one resource collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<R> {
    /// Server order, replaced wholesale by every successful fetch.
    pub items: Vec<R>,
    /// True exactly while a request of this store is in flight.
    pub loading: bool,
    /// Message of the last failure; cleared when a new request starts.
    pub error: Option<String>,
}

impl<R> Default for StoreState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Self::Fetch => "fetched",
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }

    fn fallback_message<R: Resource>(self) -> String {
        let label = if self == Self::Fetch {
            R::PLURAL
        } else {
            R::SINGULAR
        };
        format!("Failed to {} {label}", self.verb())
    }

    fn success_message<R: Resource>(self) -> String {
        format!("{} {} successfully!", sentence_case(R::SINGULAR), self.past())
    }
}

fn sentence_case(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

// ============================================================================
// Store
// ============================================================================

/// Client-side copy of one resource collection with CRUD operations.
///
/// Every operation marks the store as loading and clears the previous error
/// on entry. Failures end up in `error` and are reported through the
/// notifier; operations never return them. A successful mutation is followed
/// by exactly one full re-fetch.
pub struct ResourceStore<R: Resource> {
    api: Arc<dyn ResourceApi<R>>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<StoreState<R>>,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(api: Arc<dyn ResourceApi<R>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: watch::Sender::new(StoreState::default()),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreState<R> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn items(&self) -> Vec<R> {
        self.state.borrow().items.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    #[must_use]
    pub fn find(&self, id: ResourceId) -> Option<R> {
        self.state.borrow().items.iter().find(|r| r.id() == id).cloned()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<R>> {
        self.state.subscribe()
    }

    #[instrument(skip_all, fields(resource = R::PLURAL))]
    pub async fn fetch_all(&self) {
        self.begin(Operation::Fetch);
        match self.api.list().await {
            Ok(ApiOutcome::Success(items)) => {
                tracing::debug!(count = items.len(), "store refreshed");
                self.state.send_modify(|s| {
                    s.items = items;
                    s.loading = false;
                });
            }
            Ok(ApiOutcome::Failure { message }) => self.fail(Operation::Fetch, message),
            Err(err) => self.fail_with(Operation::Fetch, &err),
        }
    }

    #[instrument(skip_all, fields(resource = R::PLURAL))]
    pub async fn create(&self, new: &R::New) {
        self.begin(Operation::Create);
        let result = self.api.create(new).await;
        self.complete(Operation::Create, result).await;
    }

    #[instrument(skip_all, fields(resource = R::PLURAL, id = id))]
    pub async fn update(&self, id: ResourceId, patch: &R::Patch) {
        self.begin(Operation::Update);
        let result = self.api.update(id, patch).await;
        self.complete(Operation::Update, result).await;
    }

    #[instrument(skip_all, fields(resource = R::PLURAL, id = id))]
    pub async fn delete(&self, id: ResourceId) {
        self.begin(Operation::Delete);
        let result = self.api.delete(id).await;
        self.complete(Operation::Delete, result).await;
    }

    fn begin(&self, op: Operation) {
        tracing::debug!(operation = op.verb(), "request started");
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    async fn complete(&self, op: Operation, result: Result<ApiOutcome<()>, AdminError>) {
        match result {
            Ok(ApiOutcome::Success(())) => {
                self.notifier.notify_success(&op.success_message::<R>());
                self.fetch_all().await;
            }
            Ok(ApiOutcome::Failure { message }) => self.fail(op, message),
            Err(err) => self.fail_with(op, &err),
        }
    }

    fn fail_with(&self, op: Operation, err: &AdminError) {
        tracing::warn!(operation = op.verb(), error = %err, "request failed");
        self.fail(op, err.server_message().map(str::to_owned));
    }

    fn fail(&self, op: Operation, message: Option<String>) {
        let message = message.unwrap_or_else(|| op.fallback_message::<R>());
        tracing::debug!(operation = op.verb(), %message, "store error set");
        self.state.send_modify(|s| {
            s.error = Some(message.clone());
            s.loading = false;
        });
        self.notifier.notify_error(&message);
    }
}
