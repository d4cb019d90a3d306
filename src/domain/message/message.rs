//! Message module.
//!
//! This module contains the normalized message record built from the
//! message currently open in the host client. The record is plain
//! data: it is handed to the UI, serialized into event payloads and
//! posted to the backend service.

use log::{info, trace};
use serde::{Deserialize, Serialize};
use std::result;
use thiserror::Error;

use crate::{
    host::{self, HostClient},
    AccountConfig, Attachment, Contact,
};

use super::attachment;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    HostError(#[from] host::client::Error),
    #[error(transparent)]
    AttachmentError(#[from] attachment::Error),
    #[error("cannot parse message from json")]
    ParseJsonError(#[source] serde_json::Error),
    #[error("cannot serialize message to json")]
    SerializeJsonError(#[source] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// Represents the message currently open in the host client,
/// normalized down to the fields the add-in works with. The contact
/// fields always reflect a single header: the recipient header when
/// the operator sent the message, the sender header otherwise.
///
/// Serialized field names follow the add-in payload convention.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: String,
    pub subject: String,
    pub body: String,
    pub contact_email: String,
    pub contact_full_email: String,
    pub contact_name: String,
}

impl Message {
    /// Gets the message matching the given identifier from the host
    /// client and normalizes it using the operator identity of the
    /// given config.
    pub fn get<C: HostClient>(client: &C, config: &AccountConfig, id: &str) -> Result<Self> {
        info!("begin: getting message {}", id);

        let msg = client.get_message(id)?;

        // The operator sent the message when their own address shows
        // up in the From header, no matter the case. An address
        // nested in an unrelated display name also matches: the
        // check is a substring approximation.
        let operator_email = config.email.to_lowercase();
        let sent = msg.from.to_lowercase().contains(&operator_email);
        trace!("message sent by the operator: {}", sent);

        let contact_full_email = if sent { msg.to } else { msg.from };
        let contact = Contact::parse(&contact_full_email);
        trace!("contact: {:?}", contact);

        info!("end: getting message {}", id);
        Ok(Self {
            message_id: id.to_owned(),
            subject: msg.subject,
            body: msg.body,
            contact_email: contact.addr,
            contact_full_email,
            contact_name: contact.display_name,
        })
    }

    /// Lists the attachments of the message, base64 encoded, within
    /// the attachments size limit of the given config.
    ///
    /// Done on demand and not at construction time: the record
    /// travels through serialized event payloads, and big attachment
    /// contents must not tag along. Returns either every attachment
    /// or the size-exceeded error, never a partial list.
    pub fn attachments<C: HostClient>(
        &self,
        client: &C,
        config: &AccountConfig,
    ) -> Result<Vec<Attachment>> {
        info!("begin: getting attachments of message {}", self.message_id);

        let handles = client.get_attachments(&self.message_id)?;
        let attachments = Attachment::collect(handles, config.attachments_size_limit())?;

        info!("end: getting attachments of message {}", self.message_id);
        Ok(attachments)
    }

    /// Serializes the message into the json payload exchanged with
    /// the UI and the backend service.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::SerializeJsonError)
    }

    /// Rebuilds a message from a previously serialized payload. The
    /// fields are copied as-is, nothing is parsed again, so no access
    /// to the host client is needed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::ParseJsonError)
    }
}


#[cfg(test)]
mod test_message_json {
    use crate::Message;

    fn message() -> Message {
        Message {
            message_id: "42".into(),
            subject: "subject".into(),
            body: "body".into(),
            contact_email: "alice@example.com".into(),
            contact_full_email: "\"Alice\" <alice@example.com>".into(),
            contact_name: "Alice".into(),
        }
    }

    #[test]
    fn test_round_trip() {
        let msg = message();

        assert_eq!(msg, Message::from_json(&msg.to_json().unwrap()).unwrap());
    }

    #[test]
    fn test_payload_field_names() {
        let json = message().to_json().unwrap();

        assert!(json.contains("\"messageId\""));
        assert!(json.contains("\"contactEmail\""));
        assert!(json.contains("\"contactFullEmail\""));
        assert!(json.contains("\"contactName\""));
    }
}
