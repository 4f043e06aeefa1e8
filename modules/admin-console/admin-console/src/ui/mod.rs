pub mod delete;
pub mod drafts;
pub mod form;
pub mod page;

pub use delete::DeleteConfirmation;
pub use drafts::{SubscriptionPlanDraft, TenantDraft};
pub use form::{Draft, FormModal, Submission, error_messages};
pub use page::{DEFAULT_PAGE_SIZE, ListPage, PageView, Paginator, RowView, TableRow, TableView};
