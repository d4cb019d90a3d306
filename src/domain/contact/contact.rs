//! Contact module.
//!
//! This module contains the parser turning a raw From or To header
//! value into a display name and an address.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Represents the contact extracted from a raw header value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub display_name: String,
    pub addr: String,
}

impl Contact {
    /// Parses a raw header value into a display name and an address.
    ///
    /// ```text
    /// "BOB" <bob@example.com> => (BOB, bob@example.com)
    /// bob@example.com         => (bob@example.com, bob@example.com)
    /// ```
    ///
    /// The first angle-bracketed pair found is taken as the address.
    /// When no such pair exists, or when either part is empty, the
    /// input stripped of its angle brackets is returned as both the
    /// display name and the address. The address is not validated.
    /// This function never fails.
    pub fn parse<H: AsRef<str>>(header: H) -> Self {
        let header = header.as_ref();

        let captures = Regex::new(r"(.*?)\s*<(.*?)>")
            .unwrap()
            .captures(header)
            .and_then(|captures| {
                let display_name = captures.get(1)?.as_str();
                let addr = captures.get(2)?.as_str();
                if display_name.is_empty() || addr.is_empty() {
                    None
                } else {
                    Some((display_name.to_owned(), addr.to_owned()))
                }
            });

        match captures {
            Some((display_name, addr)) => Self {
                display_name: display_name.replace('"', ""),
                addr,
            },
            None => {
                let stripped = header.replace('<', "").replace('>', "");
                Self {
                    display_name: stripped.clone(),
                    addr: stripped,
                }
            }
        }
    }
}

#[cfg(test)]
mod test_contact_parse {
    use crate::Contact;

    #[test]
    fn test_quoted_display_name() {
        let contact = Contact::parse("\"BOB\" <bob@example.com>");

        assert_eq!("BOB", contact.display_name);
        assert_eq!("bob@example.com", contact.addr);
    }

    #[test]
    fn test_unquoted_display_name() {
        let contact = Contact::parse("Bob Smith <bob@example.com>");

        assert_eq!("Bob Smith", contact.display_name);
        assert_eq!("bob@example.com", contact.addr);
    }

    #[test]
    fn test_bare_address() {
        let contact = Contact::parse("bob@example.com");

        assert_eq!("bob@example.com", contact.display_name);
        assert_eq!("bob@example.com", contact.addr);
    }

    #[test]
    fn test_empty_brackets() {
        let contact = Contact::parse("<>");

        assert_eq!("", contact.display_name);
        assert_eq!("", contact.addr);
    }

    #[test]
    fn test_empty_header() {
        let contact = Contact::parse("");

        assert_eq!("", contact.display_name);
        assert_eq!("", contact.addr);
    }

    #[test]
    fn test_bracketed_address_without_name() {
        let contact = Contact::parse("<bob@example.com>");

        assert_eq!("bob@example.com", contact.display_name);
        assert_eq!("bob@example.com", contact.addr);
    }

    #[test]
    fn test_multiple_bracketed_pairs_takes_the_first() {
        let contact = Contact::parse("\"A\" <a@x.com> \"B\" <b@y.com>");

        assert_eq!("A", contact.display_name);
        assert_eq!("a@x.com", contact.addr);
    }

    #[test]
    fn test_address_not_validated() {
        let contact = Contact::parse("Bob <not an address>");

        assert_eq!("Bob", contact.display_name);
        assert_eq!("not an address", contact.addr);
    }
}
