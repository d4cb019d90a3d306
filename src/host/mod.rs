pub mod client;

pub use self::client::{Error as HostError, HostAttachment, HostClient, HostMessage};
