//! The note client core: collection, search, and the add/edit workflow.

mod edit_session;
mod notify;

pub use edit_session::{EditSession, NoteForm};
pub use notify::{ConsoleNotifier, Notifier};

use crate::domain::{Note, NoteId, ValidationError};
use crate::remote::{GatewayError, GatewayResult, NoteGateway};
use crate::session::UserIdentity;
use crate::store::{NoteCollection, SearchState, filter_notes};
use thiserror::Error;

/// Error returned when an action names a note that is not in the loaded
/// collection.
#[derive(Debug, Clone, Error)]
#[error("no note with id '{0}' in the loaded collection")]
pub struct UnknownNote(String);

/// The result of submitting the add/edit form.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The service accepted the submission; the session is closed and the
    /// collection reloaded.
    Saved,
    /// The form failed client-side validation. No network call was made;
    /// the session stays open.
    Invalid(ValidationError),
    /// The service rejected the submission. The session stays open so the
    /// user can correct the form and retry.
    Rejected(GatewayError),
    /// No workflow was open.
    NotOpen,
}

/// The client core, composed of the note collection, the search state,
/// and the edit session.
///
/// Owns the authoritative local copy of the user's notes and drives every
/// state change: user actions go through the gateway, and each successful
/// mutation is followed by a full reload. The identity is injected at
/// construction and passed to every gateway call that needs it.
///
/// Single-threaded and blocking: one gateway call at a time, so a stale
/// reload can never overwrite a newer one.
pub struct NotesApp<G> {
    gateway: G,
    identity: UserIdentity,
    collection: NoteCollection,
    search: SearchState,
    session: EditSession,
}

impl<G: NoteGateway> NotesApp<G> {
    /// Creates a client core for the given gateway and identity.
    ///
    /// The collection starts empty; call [`reload`](Self::reload) to load
    /// it.
    pub fn new(gateway: G, identity: UserIdentity) -> Self {
        Self {
            gateway,
            identity,
            collection: NoteCollection::new(),
            search: SearchState::new(),
            session: EditSession::new(),
        }
    }

    /// Returns the injected identity.
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Returns the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Replaces the collection with a fresh listing from the service.
    ///
    /// On failure the previous collection is left untouched.
    pub fn reload(&mut self) -> GatewayResult<()> {
        self.collection.reload(&self.gateway, &self.identity)
    }

    /// Returns the full collection in gateway order.
    pub fn notes(&self) -> &[Note] {
        self.collection.notes()
    }

    /// Looks up a note in the collection.
    pub fn get_note(&self, id: &NoteId) -> Option<&Note> {
        self.collection.get(id)
    }

    /// Returns the displayed view: the collection filtered by the current
    /// search state.
    pub fn displayed(&self) -> Vec<&Note> {
        filter_notes(self.collection.notes(), &self.search)
    }

    /// Activates the search with the given query.
    pub fn search(&mut self, query: impl Into<String>) {
        self.search.activate(query);
    }

    /// Clears the search, restoring the full view. Idempotent.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Returns the current search state.
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Returns the current edit session.
    pub fn edit_session(&self) -> &EditSession {
        &self.session
    }

    /// Opens the add workflow with an empty form.
    pub fn open_add(&mut self) {
        self.session.open_add();
    }

    /// Opens the edit workflow for a note in the collection.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNote` if the id is not in the loaded collection;
    /// the session is left unchanged.
    pub fn open_edit(&mut self, id: &NoteId) -> Result<(), UnknownNote> {
        let note = self
            .collection
            .get(id)
            .ok_or_else(|| UnknownNote(id.to_string()))?;
        let note = note.clone();
        self.session.open_edit(&note);
        Ok(())
    }

    /// Closes the open workflow, discarding form state. No server call.
    pub fn close_session(&mut self) {
        self.session.close();
    }

    /// Returns the open form for filling in, if a workflow is open.
    pub fn form_mut(&mut self) -> Option<&mut NoteForm> {
        self.session.form_mut()
    }

    /// Submits the open form.
    ///
    /// Validation runs first: an invalid form produces zero gateway calls
    /// and leaves the session open. A validated form is routed to create
    /// (add workflow) or update (edit workflow). On success the service's
    /// message is surfaced through the notifier, the collection is
    /// reloaded, and the session closes. On rejection the session stays
    /// open for a corrected retry.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> SubmitOutcome {
        let (target, form) = match &self.session {
            EditSession::Closed => return SubmitOutcome::NotOpen,
            EditSession::AddOpen(form) => (None, form),
            EditSession::EditOpen { target, form } => (Some(target.clone()), form),
        };

        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(err) => return SubmitOutcome::Invalid(err),
        };

        let result = match &target {
            Some(id) => self.gateway.update_note(id, &self.identity, &draft),
            None => self.gateway.create_note(&self.identity, &draft),
        };

        match result {
            Ok(saved) => {
                notifier.success(saved.message().unwrap_or("Note saved"));
                self.refresh_after_mutation(notifier);
                self.session.close();
                SubmitOutcome::Saved
            }
            Err(err) => SubmitOutcome::Rejected(err),
        }
    }

    /// Deletes a note by id.
    ///
    /// On success the service's message is surfaced and the collection
    /// reloaded; on failure the collection is untouched and the error
    /// returned.
    pub fn delete(&mut self, id: &NoteId, notifier: &mut dyn Notifier) -> GatewayResult<()> {
        let ack = self.gateway.delete_note(id)?;
        notifier.success(ack.message().unwrap_or("Note deleted"));
        self.refresh_after_mutation(notifier);
        Ok(())
    }

    /// Sets a note's pinned flag to the desired state.
    pub fn set_pinned(
        &mut self,
        id: &NoteId,
        pinned: bool,
        notifier: &mut dyn Notifier,
    ) -> GatewayResult<()> {
        let ack = self.gateway.set_pinned(id, pinned)?;
        notifier.success(ack.message().unwrap_or("Note updated"));
        self.refresh_after_mutation(notifier);
        Ok(())
    }

    /// Reloads after a confirmed mutation.
    ///
    /// The mutation already succeeded, so a failed reload is reported as
    /// an event rather than an error; the local view stays stale until
    /// the next successful reload.
    fn refresh_after_mutation(&mut self, notifier: &mut dyn Notifier) {
        if let Err(err) = self.reload() {
            notifier.error(&format!("failed to refresh notes: {}", err));
        }
    }
}
