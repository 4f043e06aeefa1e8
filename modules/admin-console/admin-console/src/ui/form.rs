//! Create/edit form modal, generic over the draft being edited.

use admin_console_sdk::{Resource, ResourceId};
use validator::{Validate, ValidationErrors};

/// Editable field set of a form modal.
///
/// `Default` is the blank template shown when creating.
pub trait Draft: Validate + Default + Clone + Send + Sync {
    type Resource: Resource;

    fn from_resource(resource: &Self::Resource) -> Self;

    /// Id of the record being edited; `None` (or 0) means a new record.
    fn id(&self) -> Option<ResourceId>;

    fn to_new(&self) -> <Self::Resource as Resource>::New;

    fn to_patch(&self) -> <Self::Resource as Resource>::Patch;
}

/// What a valid draft asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<R: Resource> {
    Create(R::New),
    Update { id: ResourceId, patch: R::Patch },
}

#[derive(Debug, Clone)]
pub struct FormModal<D: Draft> {
    open: bool,
    editing: Option<ResourceId>,
    draft: D,
    errors: Option<ValidationErrors>,
}

impl<D: Draft> Default for FormModal<D> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            draft: D::default(),
            errors: None,
        }
    }
}

impl<D: Draft> FormModal<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with the blank template.
    pub fn open_create(&mut self) {
        self.reset(None, D::default());
    }

    /// Open pre-filled from an existing record.
    pub fn open_edit(&mut self, resource: &D::Resource) {
        self.reset(Some(resource.id()), D::from_resource(resource));
    }

    /// Hide without submitting. Pending edits are discarded on the next open.
    pub fn close(&mut self) {
        self.open = false;
        self.errors = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Field errors of the last rejected submit, for inline display.
    #[must_use]
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    #[must_use]
    pub fn title(&self) -> String {
        let verb = if self.is_editing() { "Edit" } else { "Add" };
        format!("{verb} {}", <D::Resource as Resource>::TITLE)
    }

    #[must_use]
    pub fn submit_label(&self) -> String {
        let verb = if self.is_editing() { "Update" } else { "Add" };
        format!("{verb} {}", <D::Resource as Resource>::TITLE)
    }

    /// Validate the draft and turn it into a submission.
    ///
    /// # Errors
    /// Returns the field errors when the draft fails validation; they are
    /// also kept on the modal until the next open or submit.
    pub fn submit(&mut self) -> Result<Submission<D::Resource>, ValidationErrors> {
        if let Err(errors) = self.draft.validate() {
            let fields: Vec<_> = errors.field_errors().into_keys().collect();
            tracing::debug!(?fields, "draft rejected");
            self.errors = Some(errors.clone());
            return Err(errors);
        }
        self.errors = None;

        Ok(match self.draft.id().filter(|id| *id != 0) {
            Some(id) => Submission::Update {
                id,
                patch: self.draft.to_patch(),
            },
            None => Submission::Create(self.draft.to_new()),
        })
    }

    fn reset(&mut self, editing: Option<ResourceId>, draft: D) {
        self.open = true;
        self.editing = editing;
        self.draft = draft;
        self.errors = None;
    }
}

/// Messages of every failing field, sorted by field name.
#[must_use]
pub fn error_messages(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string);
                (field.to_string(), message)
            })
        })
        .collect();
    out.sort();
    out
}
