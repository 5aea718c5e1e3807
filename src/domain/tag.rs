//! Free-form tag type for labelling notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum tag length in characters.
const MAX_TAG_LEN: usize = 64;

/// A short free-form label attached to a note.
///
/// Tags are supplied by the user and stored as given, apart from trimming.
/// Case is preserved; deduplication at the form boundary compares
/// case-insensitively so `Errands` and `errands` do not both survive.
///
/// # Validation Rules
/// - Non-empty after trimming
/// - At most 64 characters
/// - No newlines or other control characters
///
/// # Examples
///
/// ```
/// use jot::domain::Tag;
///
/// let tag = Tag::new("errands").unwrap();
/// assert_eq!(tag.as_str(), "errands");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only,
    /// longer than 64 characters, or contains control characters.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if trimmed.chars().count() > MAX_TAG_LEN {
            return Err(ParseTagError(format!(
                "tag is too long (max {} characters)",
                MAX_TAG_LEN
            )));
        }

        if trimmed.chars().any(|c| c.is_control()) {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot contain control characters",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another tag.
    pub fn matches(&self, other: &Tag) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Removes duplicate tags, comparing case-insensitively.
/// The first occurrence is kept; order is otherwise preserved.
pub(crate) fn deduplicate_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut result: Vec<Tag> = Vec::new();
    for tag in tags {
        if !result.iter().any(|t| t.matches(&tag)) {
            result.push(tag);
        }
    }
    result
}
