pub mod contact;

pub use self::contact::Contact;
