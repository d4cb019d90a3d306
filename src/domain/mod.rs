pub mod account;
pub use account::*;

pub mod contact;
pub use contact::*;

pub mod message;
pub use message::*;

pub mod project;
pub use project::*;
