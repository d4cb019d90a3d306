//! Account config module.
//!
//! This module contains everything related to the operator account,
//! mostly the identity used to tell sent messages from received ones.

use mailparse::MailAddr;
use std::result;
use thiserror::Error;

/// The backend caps POST requests at 50 MiB, so the cumulative
/// attachments size is limited to 40 MiB to leave room for the JSON
/// and base64 overhead.
pub const DEFAULT_ATTACHMENTS_SIZE_LIMIT: usize = 40 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse account address {0}")]
    ParseAccountAddrError(#[source] mailparse::MailParseError, String),
    #[error("cannot find account address in {0}")]
    ParseAccountAddrNotFoundError(String),
}

pub type Result<T> = result::Result<T, Error>;

/// Represents the configuration of the operator account.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AccountConfig {
    /// Represents the email address of the operator.
    pub email: String,
    /// Represents the display name of the operator.
    pub display_name: Option<String>,
    /// Represents the cumulative attachments size limit, in raw bytes
    /// before base64 encoding.
    pub attachments_size_limit: Option<usize>,
}

impl AccountConfig {
    /// Builds the full RFC822 compliant address of the operator.
    pub fn address(&self) -> Result<MailAddr> {
        let display_name = self
            .display_name
            .as_ref()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        let has_special_chars = display_name.chars().any(|c| "()<>[]:;@.,".contains(c));

        let addr = if display_name.is_empty() {
            self.email.clone()
        } else if has_special_chars {
            format!("\"{}\" <{}>", display_name, &self.email)
        } else {
            format!("{} <{}>", display_name, &self.email)
        };

        let addr = mailparse::addrparse(&addr)
            .map_err(|err| Error::ParseAccountAddrError(err, addr.to_owned()))?
            .first()
            .ok_or_else(|| Error::ParseAccountAddrNotFoundError(addr.to_owned()))?
            .to_owned();

        Ok(addr)
    }

    /// Gets the attachments size limit, in bytes.
    pub fn attachments_size_limit(&self) -> usize {
        self.attachments_size_limit
            .unwrap_or(DEFAULT_ATTACHMENTS_SIZE_LIMIT)
    }
}


#[cfg(test)]
mod test_account_config_attachments_size_limit {
    use crate::{AccountConfig, DEFAULT_ATTACHMENTS_SIZE_LIMIT};

    #[test]
    fn test_default_limit() {
        let config = AccountConfig::default();

        assert_eq!(40 * 1024 * 1024, DEFAULT_ATTACHMENTS_SIZE_LIMIT);
        assert_eq!(
            DEFAULT_ATTACHMENTS_SIZE_LIMIT,
            config.attachments_size_limit()
        );
    }

    #[test]
    fn test_custom_limit() {
        let config = AccountConfig {
            attachments_size_limit: Some(1024),
            ..AccountConfig::default()
        };

        assert_eq!(1024, config.attachments_size_limit());
    }
}
