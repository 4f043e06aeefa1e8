//! List page: loading/error/table view over a store, plus the modals that
//! drive its mutations.

use std::ops::Range;
use std::sync::Arc;

use admin_console_sdk::{Resource, ResourceId, SubscriptionPlan, Tenant};
use farmkit_utils::format_rupiah;
use validator::ValidationErrors;

use super::delete::DeleteConfirmation;
use super::form::{Draft, FormModal, Submission};
use crate::domain::store::ResourceStore;

pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Rows
// ============================================================================

/// Table rendering of a resource.
pub trait TableRow: Resource {
    fn columns() -> &'static [&'static str];

    /// Cell texts in column order. `ordinal` is the 1-based position in the
    /// whole list, not just the current page.
    fn cells(&self, ordinal: usize) -> Vec<String>;
}

impl TableRow for Tenant {
    fn columns() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Email",
            "Domain",
            "Subdomain",
            "Phone Number",
            "Active",
        ]
    }

    fn cells(&self, _ordinal: usize) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.domain.clone(),
            self.subdomain.clone(),
            self.phone_number.clone(),
            if self.active { "Active" } else { "Inactive" }.to_owned(),
        ]
    }
}

impl TableRow for SubscriptionPlan {
    fn columns() -> &'static [&'static str] {
        &[
            "No",
            "Name",
            "Price Monthly",
            "Price Yearly",
            "Max Users",
            "Max Devices",
            "Description",
        ]
    }

    fn cells(&self, ordinal: usize) -> Vec<String> {
        vec![
            ordinal.to_string(),
            self.name.clone(),
            format_rupiah(self.price_monthly),
            format_rupiah(self.price_yearly),
            self.max_users.to_string(),
            self.max_devices.to_string(),
            self.description.clone(),
        ]
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Fixed-size pages over a list whose length may change between calls.
/// The current page is clamped to the pages available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Current 1-based page, clamped to `total`.
    #[must_use]
    pub fn current(&self, total: usize) -> usize {
        self.page.clamp(1, self.page_count(total))
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total));
    }

    pub fn next_page(&mut self, total: usize) {
        self.set_page(self.current(total).saturating_add(1), total);
    }

    pub fn prev_page(&mut self, total: usize) {
        self.set_page(self.current(total).saturating_sub(1), total);
    }

    /// Index range of the current page.
    #[must_use]
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.current(total) - 1) * self.page_size;
        start.min(total)..(start + self.page_size).min(total)
    }
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ResourceId,
    pub ordinal: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// What the page shows. Loading wins over an error, an error over the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Loading(String),
    Error(String),
    Table(TableView),
}

// ============================================================================
// Page
// ============================================================================

pub struct ListPage<D: Draft>
where
    D::Resource: TableRow,
{
    store: Arc<ResourceStore<D::Resource>>,
    modal: FormModal<D>,
    confirmation: DeleteConfirmation,
    paginator: Paginator,
}

impl<D: Draft> ListPage<D>
where
    D::Resource: TableRow,
{
    pub fn new(store: Arc<ResourceStore<D::Resource>>, page_size: usize) -> Self {
        Self {
            store,
            modal: FormModal::new(),
            confirmation: DeleteConfirmation::new(),
            paginator: Paginator::new(page_size),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<ResourceStore<D::Resource>> {
        &self.store
    }

    #[must_use]
    pub fn modal(&self) -> &FormModal<D> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut FormModal<D> {
        &mut self.modal
    }

    #[must_use]
    pub fn confirmation(&self) -> &DeleteConfirmation {
        &self.confirmation
    }

    #[must_use]
    pub fn title() -> String {
        format!("{}s", <D::Resource as Resource>::TITLE)
    }

    /// Initial load.
    pub async fn mount(&self) {
        self.store.fetch_all().await;
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        let state = self.store.snapshot();
        if state.loading {
            return PageView::Loading(format!(
                "Loading {}...",
                <D::Resource as Resource>::PLURAL
            ));
        }
        if let Some(error) = state.error {
            return PageView::Error(error);
        }

        let total = state.items.len();
        let range = self.paginator.range(total);
        let start = range.start;
        let rows = state.items[range]
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let ordinal = start + i + 1;
                RowView {
                    id: item.id(),
                    ordinal,
                    cells: item.cells(ordinal),
                }
            })
            .collect();

        PageView::Table(TableView {
            title: Self::title(),
            columns: <D::Resource as TableRow>::columns()
                .iter()
                .map(|c| (*c).to_owned())
                .collect(),
            rows,
            page: self.paginator.current(total),
            page_count: self.paginator.page_count(total),
            total,
        })
    }

    pub fn next_page(&mut self) {
        let total = self.store.snapshot().items.len();
        self.paginator.next_page(total);
    }

    pub fn prev_page(&mut self) {
        let total = self.store.snapshot().items.len();
        self.paginator.prev_page(total);
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.store.snapshot().items.len();
        self.paginator.set_page(page, total);
    }

    pub fn begin_create(&mut self) {
        self.modal.open_create();
    }

    /// Open the modal for an item of the current list. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: ResourceId) -> bool {
        match self.store.find(id) {
            Some(item) => {
                self.modal.open_edit(&item);
                true
            }
            None => {
                tracing::debug!(id, "edit requested for unknown item");
                false
            }
        }
    }

    pub fn request_delete(&mut self, id: ResourceId) {
        let name = self.store.find(id).map_or_else(
            || <D::Resource as Resource>::SINGULAR.to_owned(),
            |item| item.display_name().to_owned(),
        );
        self.confirmation.open(id, name);
    }

    pub fn cancel_delete(&mut self) {
        self.confirmation.close();
    }

    /// Delete the pending item, then close the confirmation.
    /// Returns false when nothing was pending.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirmation.pending_id() else {
            return false;
        };
        self.store.delete(id).await;
        self.confirmation.close();
        true
    }

    /// Submit the modal.
    ///
    /// A valid draft is sent to the store and the modal closes, whatever
    /// the store outcome; failures are visible through the store state.
    ///
    /// # Errors
    /// Returns the validation errors and leaves the modal open when the
    /// draft is invalid. Nothing reaches the store in that case.
    pub async fn save(&mut self) -> Result<(), ValidationErrors> {
        match self.modal.submit()? {
            Submission::Create(new) => self.store.create(&new).await,
            Submission::Update { id, patch } => self.store.update(id, &patch).await,
        }
        self.modal.close();
        Ok(())
    }
}
