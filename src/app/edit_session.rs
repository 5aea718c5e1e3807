//! Add/edit workflow state machine.

use crate::domain::{Note, NoteDraft, NoteId, Tag, ValidationError};

/// Mutable form the user fills in before submitting a note.
///
/// Opening an edit copies the target note's fields into the form by
/// value; editing the form never touches the note itself. The collection
/// only changes once the service confirms the submission and a reload
/// completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub tags: Vec<Tag>,
}

impl NoteForm {
    /// Creates an empty form, as used by the add workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies a note's fields into a fresh form.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: note.content().to_string(),
            tags: note.tags().to_vec(),
        }
    }

    /// Validates the form into a submission payload.
    ///
    /// # Errors
    ///
    /// Returns the first applicable `ValidationError`; no network call is
    /// made for an invalid form.
    pub fn validate(&self) -> Result<NoteDraft, ValidationError> {
        NoteDraft::new(self.title.clone(), self.content.clone(), self.tags.clone())
    }
}

/// The add/edit modal lifecycle.
///
/// Transient and never persisted: the session starts `Closed`, opens for
/// an add or for editing a specific note, and returns to `Closed` on
/// explicit close or successful submission. A failed submission leaves
/// the session open so the user can correct the form and retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    AddOpen(NoteForm),
    EditOpen { target: NoteId, form: NoteForm },
}

impl EditSession {
    /// Creates a closed session.
    pub fn new() -> Self {
        Self::Closed
    }

    /// Opens the add workflow with an empty form.
    pub fn open_add(&mut self) {
        *self = Self::AddOpen(NoteForm::new());
    }

    /// Opens the edit workflow for the given note, copying its fields.
    pub fn open_edit(&mut self, note: &Note) {
        *self = Self::EditOpen {
            target: note.id().clone(),
            form: NoteForm::from_note(note),
        };
    }

    /// Closes the session, discarding any form state. No server call.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Returns whether a workflow is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the open form, if any.
    pub fn form(&self) -> Option<&NoteForm> {
        match self {
            Self::Closed => None,
            Self::AddOpen(form) => Some(form),
            Self::EditOpen { form, .. } => Some(form),
        }
    }

    /// Returns the open form mutably, if any.
    pub fn form_mut(&mut self) -> Option<&mut NoteForm> {
        match self {
            Self::Closed => None,
            Self::AddOpen(form) => Some(form),
            Self::EditOpen { form, .. } => Some(form),
        }
    }

    /// Returns the edit target, when editing.
    pub fn target(&self) -> Option<&NoteId> {
        match self {
            Self::EditOpen { target, .. } => Some(target),
            _ => None,
        }
    }
}
