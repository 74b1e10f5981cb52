//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod validation;
mod value;

pub use message::Message;
pub use validation::ValidationError;
pub use value::{MessageText, Password, PhoneNumber, RawPhoneNumber, SenderId, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::HEADER
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::HEADER
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::ES), " 600111222 ").unwrap();
        assert_eq!(pn.raw(), "600111222");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::ES), "600111222").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+34600111222");
    }

    #[test]
    fn message_starts_with_no_recipients() {
        let msg = Message::new(MessageText::new("hi").unwrap());
        assert!(msg.recipients().is_empty());
        assert!(msg.sender_id().is_none());
    }
}
