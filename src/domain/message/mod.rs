pub mod attachment;
pub mod message;

pub use self::attachment::{Attachment, Error as AttachmentError};
pub use self::message::{Error as MessageError, Message};
