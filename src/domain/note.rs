//! Note struct mirroring a record held by the remote notes service.

use crate::domain::tag::deduplicate_tags;
use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
    EmptyContent,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
            ParseNoteErrorKind::EmptyContent => write!(f, "invalid note: content cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A note as held by the remote service.
///
/// The identifier and creation timestamp are assigned server-side; the
/// client only ever receives them. Title and content are never empty in a
/// note that exists: the constructor enforces it, and deserialization of
/// wire data goes through the constructor.
///
/// Wire format (JSON): `_id`, `title`, `content`, `tags`, `isPinned`,
/// `createdAt`. Tags default to empty and `isPinned` to false when the
/// service omits them.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let id: NoteId = "665f1c9be4a5d20017c0a1b2".parse().unwrap();
/// let note = Note::new(id, "Groceries", "milk, eggs", Utc::now()).unwrap();
/// assert_eq!(note.title(), "Groceries");
/// assert!(!note.is_pinned());
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    is_pinned: bool,
    created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new Note with required fields only.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title or content is empty or
    /// whitespace-only.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(id, title, content, created_at).build()
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder {
            id,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            is_pinned: false,
            created_at,
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns whether the note is pinned.
    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    /// Returns when the note was created, per the service.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.short())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("tags", &self.tags)
            .field("is_pinned", &self.is_pinned)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    is_pinned: bool,
    created_at: DateTime<Utc>,
}

impl NoteBuilder {
    /// Sets the note's tags.
    ///
    /// Duplicates are removed case-insensitively (first occurrence kept).
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = deduplicate_tags(tags);
        self
    }

    /// Sets whether the note is pinned.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = pinned;
        self
    }

    /// Builds the Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title or content is empty or
    /// whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        if self.content.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyContent,
            });
        }

        Ok(Note {
            id: self.id,
            title: title.to_string(),
            content: self.content,
            tags: self.tags,
            is_pinned: self.is_pinned,
            created_at: self.created_at,
        })
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("_id", &self.id)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("tags", &self.tags)?;
        map.serialize_entry("isPinned", &self.is_pinned)?;
        map.serialize_entry("createdAt", &self.created_at)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            #[serde(rename = "_id")]
            id: NoteId,
            title: String,
            content: String,
            #[serde(default)]
            tags: Vec<Tag>,
            #[serde(rename = "isPinned", default)]
            is_pinned: bool,
            #[serde(rename = "createdAt")]
            created_at: DateTime<Utc>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;

        Note::builder(helper.id, helper.title, helper.content, helper.created_at)
            .tags(helper.tags)
            .pinned(helper.is_pinned)
            .build()
            .map_err(serde::de::Error::custom)
    }
}
