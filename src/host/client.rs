//! Host client module.
//!
//! This module exposes the host client trait, which abstracts the
//! mail application hosting the add-in. Implementations bind a
//! concrete host API (webmail, desktop client) to the library.

use std::{error, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find message {0} in host client")]
    FindMessageError(String),
    #[error("cannot fetch content of attachment {0}")]
    FetchAttachmentContentError(String),
    #[error("cannot communicate with host client")]
    ClientError(#[source] Box<dyn error::Error + Send + Sync + 'static>),
}

pub type Result<T> = result::Result<T, Error>;

/// Represents the raw message data returned by the host client:
/// subject, body and the unparsed From and To header values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HostMessage {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: String,
}

/// Represents an attachment handle exposed by the host client. The
/// byte size is known up front, the content is fetched on demand so
/// that callers can give up before paying for the bytes.
pub trait HostAttachment {
    fn filename(&self) -> String;
    fn size(&self) -> usize;
    fn content(&self) -> Result<Vec<u8>>;
}

pub trait HostClient {
    fn get_message(&self, id: &str) -> Result<HostMessage>;
    fn get_attachments(&self, id: &str) -> Result<Vec<Box<dyn HostAttachment>>>;
}
