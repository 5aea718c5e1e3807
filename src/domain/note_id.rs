//! Server-assigned note identifier with serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A unique identifier for notes, assigned by the remote service.
///
/// Identifiers are opaque strings: the client never generates or inspects
/// them beyond equality. The service this client was written against hands
/// out 24-character hex ids, but nothing here depends on that shape.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id: NoteId = "665f1c9be4a5d20017c0a1b2".parse().unwrap();
/// assert_eq!(id.to_string(), "665f1c9be4a5d20017c0a1b2");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short form of the identifier for compact display.
    ///
    /// At most the first 8 characters. Display only; never use the short
    /// form to address a note.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid note identifier.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot be empty".to_string(),
            });
        }
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot contain whitespace or control characters".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn parse_valid_id() {
        let id: NoteId = "665f1c9be4a5d20017c0a1b2".parse().unwrap();
        assert_eq!(id.as_str(), "665f1c9be4a5d20017c0a1b2");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id: NoteId = "  abc123  ".parse().unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<NoteId>().is_err());
        assert!("   ".parse::<NoteId>().is_err());
    }

    #[test]
    fn parse_rejects_inner_whitespace() {
        assert!("abc 123".parse::<NoteId>().is_err());
        assert!("abc\t123".parse::<NoteId>().is_err());
    }

    #[test]
    fn short_truncates_long_ids() {
        let id: NoteId = "665f1c9be4a5d20017c0a1b2".parse().unwrap();
        assert_eq!(id.short(), "665f1c9b");
    }

    #[test]
    fn short_keeps_small_ids_whole() {
        let id: NoteId = "ab12".parse().unwrap();
        assert_eq!(id.short(), "ab12");
    }

    #[test]
    fn equality_and_hash() {
        let a: NoteId = "abc123".parse().unwrap();
        let b: NoteId = "abc123".parse().unwrap();
        let c: NoteId = "def456".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));
        set.insert(c);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let id: NoteId = "665f1c9be4a5d20017c0a1b2".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"665f1c9be4a5d20017c0a1b2\"");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serde_rejects_invalid_on_deserialize() {
        let result: Result<NoteId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "abc123".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"abc123\")");
    }

    #[test]
    fn parse_error_contains_invalid_value() {
        let err = "a b".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "a b");
        assert!(err.to_string().contains("'a b'"));
    }
}
