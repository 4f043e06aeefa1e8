use admin_console_sdk::ResourceId;

/// Pending delete awaiting user confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pending: Option<(ResourceId, String)>,
}

impl DeleteConfirmation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: ResourceId, display_name: impl Into<String>) {
        self.pending = Some((id, display_name.into()));
    }

    pub fn close(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_id(&self) -> Option<ResourceId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// `Are you sure you want to delete "<name>"? This action cannot be undone.`
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        self.pending.as_ref().map(|(_, name)| {
            format!("Are you sure you want to delete \"{name}\"? This action cannot be undone.")
        })
    }

    /// Take the pending id, leaving the confirmation closed.
    pub fn confirm(&mut self) -> Option<ResourceId> {
        self.pending.take().map(|(id, _)| id)
    }
}
