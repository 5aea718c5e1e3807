//! NoteGateway trait and result types.

use crate::domain::{Note, NoteDraft, NoteId};
use crate::session::UserIdentity;
use thiserror::Error;

/// Errors that can occur when talking to the remote note service.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The service rejected the caller's identity.
    #[error("not authorized: {0}")]
    Unauthorized(String),

    /// The service returned an envelope with `success: false`.
    /// The message is surfaced to the user verbatim.
    #[error("{0}")]
    Service(String),

    /// The request never produced a usable envelope (network failure,
    /// unexpected status, undecodable body).
    #[error("request failed: {0}")]
    Transport(String),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Acknowledgement of a delete or pin mutation.
///
/// Carries the service's human-readable message, when it sent one, for
/// surfacing as a success notification.
#[derive(Debug, Clone)]
pub struct Ack {
    message: Option<String>,
}

impl Ack {
    /// Creates an acknowledgement with an optional service message.
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    /// Returns the service's message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// A successfully created or updated note, plus the service's message.
#[derive(Debug, Clone)]
pub struct Saved {
    note: Note,
    message: Option<String>,
}

impl Saved {
    /// Creates a saved-note result.
    pub fn new(note: Note, message: Option<String>) -> Self {
        Self { note, message }
    }

    /// Returns the note as the service stored it.
    pub fn note(&self) -> &Note {
        &self.note
    }

    /// Returns the service's message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Gateway to the remote note service.
///
/// This trait defines the five operations the client performs against the
/// service. Implementations translate their own failure modes into the
/// `GatewayError` taxonomy; callers never see transport details.
///
/// Only `list_notes` is idempotent. Resubmitting a create produces a
/// duplicate note; the client does not deduplicate or debounce.
pub trait NoteGateway {
    /// Fetches every note belonging to the given identity.
    fn list_notes(&self, identity: &UserIdentity) -> GatewayResult<Vec<Note>>;

    /// Creates a note from the draft. The service assigns id and creation
    /// timestamp.
    fn create_note(&self, identity: &UserIdentity, draft: &NoteDraft) -> GatewayResult<Saved>;

    /// Replaces the title, content, and tags of an existing note.
    fn update_note(
        &self,
        id: &NoteId,
        identity: &UserIdentity,
        draft: &NoteDraft,
    ) -> GatewayResult<Saved>;

    /// Sets a note's pinned flag to the desired state.
    fn set_pinned(&self, id: &NoteId, pinned: bool) -> GatewayResult<Ack>;

    /// Deletes a note by id.
    fn delete_note(&self, id: &NoteId) -> GatewayResult<Ack>;
}
