//! The authoritative local copy of the user's notes.

use crate::domain::{Note, NoteId};
use crate::remote::{GatewayResult, NoteGateway};
use crate::session::UserIdentity;

/// The local note collection, kept consistent with the remote store.
///
/// Exactly one collection is live per running client. `reload` is the
/// only writer: every successful mutation is followed by a fresh
/// `list_notes` call that replaces the whole collection. There is no
/// merging and no local patching; until the reload completes, the local
/// copy does not reflect the mutation.
#[derive(Debug, Default)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Replaces the collection with a fresh listing from the gateway.
    ///
    /// On failure the previous contents are left untouched and the error
    /// is returned to the caller.
    pub fn reload<G>(&mut self, gateway: &G, identity: &UserIdentity) -> GatewayResult<()>
    where
        G: NoteGateway + ?Sized,
    {
        let notes = gateway.list_notes(identity)?;
        self.notes = notes;
        Ok(())
    }

    /// Returns the notes in gateway order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by id.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteDraft;
    use crate::remote::{GatewayError, MemoryGateway};
    use pretty_assertions::assert_eq;

    fn identity() -> UserIdentity {
        "user@example.com".parse().unwrap()
    }

    fn draft(title: &str) -> NoteDraft {
        NoteDraft::new(title, "content", vec![]).unwrap()
    }

    #[test]
    fn starts_empty() {
        let collection = NoteCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn reload_replaces_the_whole_collection() {
        let gateway = MemoryGateway::new();
        gateway.create_note(&identity(), &draft("First")).unwrap();

        let mut collection = NoteCollection::new();
        collection.reload(&gateway, &identity()).unwrap();
        assert_eq!(collection.len(), 1);

        // Server-side changes only become visible through another reload.
        let second = gateway.create_note(&identity(), &draft("Second")).unwrap();
        gateway.delete_note(collection.notes()[0].id()).unwrap();
        assert_eq!(collection.len(), 1);

        collection.reload(&gateway, &identity()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.notes()[0].id(), second.note().id());
    }

    #[test]
    fn failed_reload_leaves_previous_contents_untouched() {
        let gateway = MemoryGateway::new();
        gateway.create_note(&identity(), &draft("Keep me")).unwrap();

        let mut collection = NoteCollection::new();
        collection.reload(&gateway, &identity()).unwrap();

        gateway.fail_next(GatewayError::Transport("connection reset".to_string()));
        let err = collection.reload(&gateway, &identity()).unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.notes()[0].title(), "Keep me");
    }

    #[test]
    fn get_finds_notes_by_id() {
        let gateway = MemoryGateway::new();
        let saved = gateway.create_note(&identity(), &draft("Find me")).unwrap();

        let mut collection = NoteCollection::new();
        collection.reload(&gateway, &identity()).unwrap();

        let found = collection.get(saved.note().id()).unwrap();
        assert_eq!(found.title(), "Find me");

        let missing: NoteId = "ffffffffffffffffffffffff".parse().unwrap();
        assert!(collection.get(&missing).is_none());
    }

    #[test]
    fn preserves_gateway_order() {
        let created = chrono::DateTime::parse_from_rfc3339("2024-06-01T10:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let seeded: Vec<Note> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let id: NoteId = format!("{:024x}", i + 1).parse().unwrap();
                Note::new(id, *title, "content", created).unwrap()
            })
            .collect();
        let gateway = MemoryGateway::with_notes(seeded);

        let mut collection = NoteCollection::new();
        collection.reload(&gateway, &identity()).unwrap();

        let titles: Vec<_> = collection.notes().iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
