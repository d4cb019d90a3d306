//! Attachment module.
//!
//! This module contains the attachment record sent to the backend
//! and the collector enforcing the cumulative size limit.

use base64::{engine::general_purpose::STANDARD, Engine};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::result;
use thiserror::Error;

use crate::host::{self, HostAttachment};

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot collect attachments: total size exceeds {0} bytes")]
    AttachmentsSizeExceededError(usize),
    #[error(transparent)]
    HostError(#[from] host::client::Error),
}

pub type Result<T> = result::Result<T, Error>;

/// Represents an attachment collected from the host client, its
/// content base64 encoded.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
}

impl Attachment {
    /// Collects all the attachments behind the given handles, in
    /// order, as long as their cumulative raw size stays within the
    /// given limit.
    ///
    /// The raw size of each attachment is added to the running total
    /// before its content is fetched. As soon as the total passes the
    /// limit the collect aborts, so the remaining contents are never
    /// fetched nor encoded and the peak memory stays bounded (base64
    /// grows the in-memory footprint by ~33%). Either every
    /// attachment is returned or none is.
    pub fn collect(
        handles: Vec<Box<dyn HostAttachment>>,
        size_limit: usize,
    ) -> Result<Vec<Attachment>> {
        let mut total_size = 0;
        let mut attachments = Vec::with_capacity(handles.len());

        for handle in handles {
            total_size += handle.size();
            trace!(
                "attachment {}: {} bytes, {} bytes in total",
                handle.filename(),
                handle.size(),
                total_size,
            );

            if total_size > size_limit {
                warn!(
                    "total attachments size exceeds {} bytes, aborting",
                    size_limit
                );
                return Err(Error::AttachmentsSizeExceededError(size_limit));
            }

            attachments.push(Attachment {
                filename: handle.filename(),
                content: STANDARD.encode(handle.content()?),
            });
        }

        Ok(attachments)
    }
}
