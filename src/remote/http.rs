//! HTTP implementation of the note gateway.
//!
//! Speaks the remote service's REST-style JSON contract. The identity
//! travels in the `Authorization` header for the list call and as a
//! `user_mail` body field for create/edit; pin and delete carry no
//! identity at all.

use crate::domain::{Note, NoteDraft, NoteId, Tag};
use crate::remote::envelope::{AckEnvelope, ListEnvelope, NoteEnvelope};
use crate::remote::{Ack, GatewayError, GatewayResult, NoteGateway, Saved};
use crate::session::UserIdentity;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const LIST_PATH: &str = "/api/note/all";
const ADD_PATH: &str = "/api/note/add";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn edit_path(id: &NoteId) -> String {
    format!("/api/note/edit/{}", id)
}

fn pin_path(id: &NoteId) -> String {
    format!("/api/note/update-note-pinned/{}", id)
}

fn delete_path(id: &NoteId) -> String {
    format!("/api/note/delete/{}", id)
}

/// Body for create and edit calls.
#[derive(Debug, Serialize)]
struct SavePayload<'a> {
    title: &'a str,
    content: &'a str,
    tags: &'a [Tag],
    user_mail: &'a str,
}

impl<'a> SavePayload<'a> {
    fn new(draft: &'a NoteDraft, identity: &'a UserIdentity) -> Self {
        Self {
            title: draft.title(),
            content: draft.content(),
            tags: draft.tags(),
            user_mail: identity.as_str(),
        }
    }
}

/// Body for the pin call.
#[derive(Debug, Serialize)]
struct PinPayload {
    #[serde(rename = "isPinned")]
    is_pinned: bool,
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Decodes a response body into an envelope type.
///
/// The service wraps failures in an envelope even on error statuses, so
/// decoding is attempted regardless of the status code; the status only
/// matters when no envelope can be read.
fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(GatewayError::Unauthorized(format!(
            "the service rejected the request ({})",
            status
        )));
    }

    match response.json::<T>() {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(GatewayError::Transport(format!(
            "service returned {}",
            status
        ))),
        Err(err) => Err(transport(err)),
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Gateway backed by the remote service over HTTP.
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    /// Creates a gateway for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(transport)?;

        Ok(Self {
            base_url: normalize_base_url(base_url.into()),
            client,
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl NoteGateway for HttpGateway {
    fn list_notes(&self, identity: &UserIdentity) -> GatewayResult<Vec<Note>> {
        let response = self
            .client
            .get(self.url(LIST_PATH))
            .header(reqwest::header::AUTHORIZATION, identity.as_str())
            .send()
            .map_err(transport)?;

        decode::<ListEnvelope>(response)?.into_result()
    }

    fn create_note(&self, identity: &UserIdentity, draft: &NoteDraft) -> GatewayResult<Saved> {
        let response = self
            .client
            .post(self.url(ADD_PATH))
            .json(&SavePayload::new(draft, identity))
            .send()
            .map_err(transport)?;

        decode::<NoteEnvelope>(response)?.into_result()
    }

    fn update_note(
        &self,
        id: &NoteId,
        identity: &UserIdentity,
        draft: &NoteDraft,
    ) -> GatewayResult<Saved> {
        let response = self
            .client
            .post(self.url(&edit_path(id)))
            .json(&SavePayload::new(draft, identity))
            .send()
            .map_err(transport)?;

        decode::<NoteEnvelope>(response)?.into_result()
    }

    fn set_pinned(&self, id: &NoteId, pinned: bool) -> GatewayResult<Ack> {
        let response = self
            .client
            .put(self.url(&pin_path(id)))
            .json(&PinPayload { is_pinned: pinned })
            .send()
            .map_err(transport)?;

        decode::<AckEnvelope>(response)?.into_result()
    }

    fn delete_note(&self, id: &NoteId) -> GatewayResult<Ack> {
        let response = self
            .client
            .delete(self.url(&delete_path(id)))
            .send()
            .map_err(transport)?;

        decode::<AckEnvelope>(response)?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_id() -> NoteId {
        "665f1c9be4a5d20017c0a1b2".parse().unwrap()
    }

    #[test]
    fn paths_embed_the_note_id() {
        assert_eq!(edit_path(&test_id()), "/api/note/edit/665f1c9be4a5d20017c0a1b2");
        assert_eq!(
            pin_path(&test_id()),
            "/api/note/update-note-pinned/665f1c9be4a5d20017c0a1b2"
        );
        assert_eq!(
            delete_path(&test_id()),
            "/api/note/delete/665f1c9be4a5d20017c0a1b2"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let gateway = HttpGateway::new("https://example.com/").unwrap();
        assert_eq!(gateway.base_url(), "https://example.com");
        assert_eq!(gateway.url(LIST_PATH), "https://example.com/api/note/all");
    }

    #[test]
    fn save_payload_carries_identity_in_body() {
        let identity: UserIdentity = "user@example.com".parse().unwrap();
        let draft = NoteDraft::new("Groceries", "milk", vec![Tag::new("errands").unwrap()])
            .unwrap();

        let value = serde_json::to_value(SavePayload::new(&draft, &identity)).unwrap();
        assert_eq!(value["title"], "Groceries");
        assert_eq!(value["content"], "milk");
        assert_eq!(value["tags"][0], "errands");
        assert_eq!(value["user_mail"], "user@example.com");
    }

    #[test]
    fn pin_payload_uses_wire_field_name() {
        let value = serde_json::to_value(PinPayload { is_pinned: true }).unwrap();
        assert_eq!(value["isPinned"], true);
        assert!(value.get("is_pinned").is_none());
    }
}
