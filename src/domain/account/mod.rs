pub mod config;

pub use self::config::{AccountConfig, Error as AccountError, DEFAULT_ATTACHMENTS_SIZE_LIMIT};
