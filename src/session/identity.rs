//! User identity value passed explicitly to every component that needs it.

use std::fmt;
use std::str::FromStr;

/// The signed-in user's identity: an email address.
///
/// The identity is injected wherever it is needed; nothing reads it from
/// ambient state. The gateway sends it with list/create/edit calls, and
/// the session store persists it between invocations.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity(String);

impl UserIdentity {
    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserIdentity(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid identity.
#[derive(Debug, Clone)]
pub struct ParseIdentityError(String);

impl fmt::Display for ParseIdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseIdentityError {}

impl FromStr for UserIdentity {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseIdentityError(
                "email address cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().any(|c| c.is_whitespace()) {
            return Err(ParseIdentityError(format!(
                "invalid email address '{}': whitespace is not allowed",
                trimmed
            )));
        }

        if !trimmed.contains('@') {
            return Err(ParseIdentityError(format!(
                "invalid email address '{}'",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }
}
