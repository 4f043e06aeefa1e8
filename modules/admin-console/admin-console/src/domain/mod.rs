pub mod notify;
pub mod store;

pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use store::{ResourceStore, StoreState};
