//! Admin console for the smart farming platform.
//!
//! - `infra`: REST adapter implementing `ResourceApi` over `farmkit-http`
//! - `domain`: resource stores and the notifier seam
//! - `ui`: form modals, delete confirmation and paginated list pages
//!
//! [`AdminConsole`] wires one store per resource and hands out pages:
//!
//! ```ignore
//! let console = AdminConsole::new(client, &AdminConsoleConfig::default(), notifier)?;
//! let mut page = console.tenant_page();
//! page.mount().await;
//! render(page.view());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;

use std::sync::Arc;

use admin_console_sdk::{ResourceApi, SubscriptionPlan, Tenant};
use farmkit_http::HttpClient;

pub use config::{AdminConsoleConfig, ConfigError, DEFAULT_BASE_URL};
pub use domain::{
    Notification, Notifier, RecordingNotifier, ResourceStore, StoreState, TracingNotifier,
};
pub use infra::HttpResourceClient;
pub use ui::{
    DeleteConfirmation, Draft, FormModal, ListPage, PageView, Submission, SubscriptionPlanDraft,
    TenantDraft,
};

/// Composition root: the tenant and subscription plan stores, shared by
/// every page handed out.
pub struct AdminConsole {
    tenants: Arc<ResourceStore<Tenant>>,
    plans: Arc<ResourceStore<SubscriptionPlan>>,
    page_size: usize,
}

impl AdminConsole {
    /// Build the console against the platform REST API.
    ///
    /// # Errors
    /// Returns `ConfigError` when the configured base URL is unusable.
    pub fn new(
        client: HttpClient,
        config: &AdminConsoleConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ConfigError> {
        let base = config.parsed_base_url()?;
        tracing::debug!(base_url = %base, "admin console configured");
        Ok(Self::with_apis(
            Arc::new(HttpResourceClient::<Tenant>::new(client.clone(), base.clone())),
            Arc::new(HttpResourceClient::<SubscriptionPlan>::new(client, base)),
            notifier,
            config.page_size,
        ))
    }

    /// Build the console over arbitrary backends.
    pub fn with_apis(
        tenants: Arc<dyn ResourceApi<Tenant>>,
        plans: Arc<dyn ResourceApi<SubscriptionPlan>>,
        notifier: Arc<dyn Notifier>,
        page_size: usize,
    ) -> Self {
        Self {
            tenants: Arc::new(ResourceStore::new(tenants, notifier.clone())),
            plans: Arc::new(ResourceStore::new(plans, notifier)),
            page_size,
        }
    }

    #[must_use]
    pub fn tenants(&self) -> &Arc<ResourceStore<Tenant>> {
        &self.tenants
    }

    #[must_use]
    pub fn plans(&self) -> &Arc<ResourceStore<SubscriptionPlan>> {
        &self.plans
    }

    #[must_use]
    pub fn tenant_page(&self) -> ListPage<TenantDraft> {
        ListPage::new(self.tenants.clone(), self.page_size)
    }

    #[must_use]
    pub fn plan_page(&self) -> ListPage<SubscriptionPlanDraft> {
        ListPage::new(self.plans.clone(), self.page_size)
    }
}
