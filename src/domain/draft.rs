//! Validated submission payload for create and update calls.

use crate::domain::Tag;
use crate::domain::tag::deduplicate_tags;
use thiserror::Error;

/// Error returned when a note submission fails client-side validation.
///
/// Validation runs before any network call; the messages are surfaced to
/// the user exactly as written here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter the title")]
    EmptyTitle,

    #[error("Please enter the content")]
    EmptyContent,
}

/// A validated note payload ready to be sent to the remote service.
///
/// Construction is the validation step: a `NoteDraft` always has a
/// non-empty title and content. Tags are deduplicated case-insensitively,
/// first occurrence kept.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    title: String,
    content: String,
    tags: Vec<Tag>,
}

impl NoteDraft {
    /// Validates the given fields into a draft.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTitle` if the title is empty or
    /// whitespace-only, then `ValidationError::EmptyContent` for the
    /// content. The title is always checked first.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        Ok(Self {
            title: trimmed_title.to_string(),
            content,
            tags: deduplicate_tags(tags),
        })
    }

    /// Returns the draft's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the draft's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}
