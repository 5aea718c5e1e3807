//! Wire envelope types for the remote service's JSON responses.
//!
//! Every call returns a `{success, message, ...}` wrapper. A `success:
//! false` envelope is a domain failure, not a transport error; its message
//! is surfaced to the user verbatim.

use crate::domain::Note;
use crate::remote::{Ack, GatewayError, GatewayResult, Saved};
use serde::Deserialize;

fn service_failure(message: Option<String>) -> GatewayError {
    GatewayError::Service(message.unwrap_or_else(|| "the service reported a failure".to_string()))
}

/// Envelope for the list operation.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    notes: Vec<Note>,
}

impl ListEnvelope {
    pub(crate) fn into_result(self) -> GatewayResult<Vec<Note>> {
        if self.success {
            Ok(self.notes)
        } else {
            Err(service_failure(self.message))
        }
    }
}

/// Envelope for create and update operations, carrying the saved note.
#[derive(Debug, Deserialize)]
pub(crate) struct NoteEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    note: Option<Note>,
}

impl NoteEnvelope {
    pub(crate) fn into_result(self) -> GatewayResult<Saved> {
        if !self.success {
            return Err(service_failure(self.message));
        }
        match self.note {
            Some(note) => Ok(Saved::new(note, self.message)),
            None => Err(GatewayError::Transport(
                "service response did not include the saved note".to_string(),
            )),
        }
    }
}

/// Envelope for delete and pin operations.
#[derive(Debug, Deserialize)]
pub(crate) struct AckEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl AckEnvelope {
    pub(crate) fn into_result(self) -> GatewayResult<Ack> {
        if self.success {
            Ok(Ack::new(self.message))
        } else {
            Err(service_failure(self.message))
        }
    }
}
