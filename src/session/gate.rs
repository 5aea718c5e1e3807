//! Entry gate: a usable identity must exist before any gateway work.

use crate::session::UserIdentity;
use thiserror::Error;

/// Error returned when no identity is available.
///
/// The CLI surfaces this as the sign-in hint; no gateway call is made.
#[derive(Debug, Clone, Error)]
#[error("not signed in: run `jot login <email>` first")]
pub struct NotSignedIn;

/// Admits the caller if an identity is present.
///
/// A pure function of the injected value: callers load the stored session
/// (or obtain an identity however they like) and pass it in. Absent
/// identity means no further work happens.
pub fn require_identity(identity: Option<UserIdentity>) -> Result<UserIdentity, NotSignedIn> {
    identity.ok_or(NotSignedIn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn present_identity_is_admitted() {
        let identity: UserIdentity = "user@example.com".parse().unwrap();
        let admitted = require_identity(Some(identity.clone())).unwrap();
        assert_eq!(admitted, identity);
    }

    #[test]
    fn absent_identity_is_rejected() {
        let err = require_identity(None).unwrap_err();
        assert!(err.to_string().contains("not signed in"));
        assert!(err.to_string().contains("jot login"));
    }
}
