//! In-memory implementation of the note gateway.
//!
//! Stands in for the remote service in tests: notes live in a `Vec`,
//! failures can be injected per call, and every operation is counted so
//! tests can assert how often the service was reached.

use crate::domain::{Note, NoteDraft, NoteId};
use crate::remote::{Ack, GatewayError, GatewayResult, NoteGateway, Saved};
use crate::session::UserIdentity;
use chrono::Utc;
use std::cell::{Cell, RefCell};

/// Per-operation call counts, for asserting gateway traffic in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub create: usize,
    pub update: usize,
    pub pin: usize,
    pub delete: usize,
}

impl CallCounts {
    /// Total calls across all operations.
    pub fn total(&self) -> usize {
        self.list + self.create + self.update + self.pin + self.delete
    }
}

/// Gateway backed by an in-process `Vec` of notes.
///
/// Single-threaded by design, like the client itself.
pub struct MemoryGateway {
    notes: RefCell<Vec<Note>>,
    next_id: Cell<u64>,
    fail_next: RefCell<Option<GatewayError>>,
    fail_next_list: RefCell<Option<GatewayError>>,
    calls: RefCell<CallCounts>,
}

impl MemoryGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self {
            notes: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_next: RefCell::new(None),
            fail_next_list: RefCell::new(None),
            calls: RefCell::new(CallCounts::default()),
        }
    }

    /// Creates a gateway pre-populated with the given notes.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let gateway = Self::new();
        *gateway.notes.borrow_mut() = notes;
        gateway
    }

    /// Makes the next operation fail with the given error.
    pub fn fail_next(&self, error: GatewayError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    /// Makes the next list operation fail, leaving mutations untouched.
    ///
    /// Lets tests fail the reload that follows a successful mutation.
    pub fn fail_next_list(&self, error: GatewayError) {
        *self.fail_next_list.borrow_mut() = Some(error);
    }

    /// Returns a snapshot of the stored notes.
    pub fn stored_notes(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    /// Returns how many times each operation was called.
    pub fn calls(&self) -> CallCounts {
        *self.calls.borrow()
    }

    fn take_failure(&self) -> GatewayResult<()> {
        match self.fail_next.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn mint_id(&self) -> NoteId {
        let n = self.next_id.get();
        self.next_id.set(n + 1);
        format!("{:024x}", n)
            .parse()
            .expect("generated ids are valid")
    }

    fn not_found() -> GatewayError {
        GatewayError::Service("Note not found".to_string())
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteGateway for MemoryGateway {
    fn list_notes(&self, _identity: &UserIdentity) -> GatewayResult<Vec<Note>> {
        self.calls.borrow_mut().list += 1;
        self.take_failure()?;
        if let Some(error) = self.fail_next_list.borrow_mut().take() {
            return Err(error);
        }
        Ok(self.notes.borrow().clone())
    }

    fn create_note(&self, _identity: &UserIdentity, draft: &NoteDraft) -> GatewayResult<Saved> {
        self.calls.borrow_mut().create += 1;
        self.take_failure()?;

        let note = Note::builder(self.mint_id(), draft.title(), draft.content(), Utc::now())
            .tags(draft.tags().to_vec())
            .build()
            .map_err(|e| GatewayError::Service(e.to_string()))?;

        self.notes.borrow_mut().push(note.clone());
        Ok(Saved::new(
            note,
            Some("Note added successfully".to_string()),
        ))
    }

    fn update_note(
        &self,
        id: &NoteId,
        _identity: &UserIdentity,
        draft: &NoteDraft,
    ) -> GatewayResult<Saved> {
        self.calls.borrow_mut().update += 1;
        self.take_failure()?;

        let mut notes = self.notes.borrow_mut();
        let existing = notes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(Self::not_found)?;

        let updated = Note::builder(
            existing.id().clone(),
            draft.title(),
            draft.content(),
            existing.created_at(),
        )
        .tags(draft.tags().to_vec())
        .pinned(existing.is_pinned())
        .build()
        .map_err(|e| GatewayError::Service(e.to_string()))?;

        *existing = updated.clone();
        Ok(Saved::new(
            updated,
            Some("Note updated successfully".to_string()),
        ))
    }

    fn set_pinned(&self, id: &NoteId, pinned: bool) -> GatewayResult<Ack> {
        self.calls.borrow_mut().pin += 1;
        self.take_failure()?;

        let mut notes = self.notes.borrow_mut();
        let existing = notes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(Self::not_found)?;

        let updated = Note::builder(
            existing.id().clone(),
            existing.title(),
            existing.content(),
            existing.created_at(),
        )
        .tags(existing.tags().to_vec())
        .pinned(pinned)
        .build()
        .map_err(|e| GatewayError::Service(e.to_string()))?;

        *existing = updated;
        Ok(Ack::new(Some("Note updated successfully".to_string())))
    }

    fn delete_note(&self, id: &NoteId) -> GatewayResult<Ack> {
        self.calls.borrow_mut().delete += 1;
        self.take_failure()?;

        let mut notes = self.notes.borrow_mut();
        let before = notes.len();
        notes.retain(|n| n.id() != id);
        if notes.len() == before {
            return Err(Self::not_found());
        }

        Ok(Ack::new(Some("Note deleted successfully".to_string())))
    }
}
