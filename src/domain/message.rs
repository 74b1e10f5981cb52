use crate::domain::value::{MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound SMS: text, recipients, and optional routing metadata.
///
/// A message is assembled by the caller, queued on a `DescomClient`, and
/// rendered into its wire record at send time. The text is the message's
/// identity for batch deduplication and is compared byte for byte.
pub struct Message {
    to: Vec<RawPhoneNumber>,
    text: MessageText,
    sender_id: Option<SenderId>,
}

impl Message {
    /// Create a message with the given text and no recipients.
    pub fn new(text: MessageText) -> Self {
        Self {
            to: Vec::new(),
            text,
            sender_id: None,
        }
    }

    /// Add a recipient.
    pub fn add_to(&mut self, recipient: RawPhoneNumber) -> &mut Self {
        self.to.push(recipient);
        self
    }

    /// Set the sender identity for this message.
    ///
    /// When unset, the field is omitted from the wire record and the gateway
    /// picks the account default.
    pub fn set_sender_id(&mut self, sender_id: SenderId) -> &mut Self {
        self.sender_id = Some(sender_id);
        self
    }

    /// The message text as currently set.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Recipients in the order they were added.
    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.to
    }

    /// The sender identity, if one was set.
    pub fn sender_id(&self) -> Option<&SenderId> {
        self.sender_id.as_ref()
    }

    /// Reset the per-send fields (recipients and sender id) after the
    /// message has been rendered for transport.
    ///
    /// The text is kept: it is the dedupe identity of the message.
    pub fn clean(&mut self) {
        self.to.clear();
        self.sender_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_mutation_accumulates_recipients_in_order() {
        let mut msg = Message::new(MessageText::new("hello").unwrap());
        msg.add_to(RawPhoneNumber::new("+34600111222").unwrap())
            .add_to(RawPhoneNumber::new("+34600333444").unwrap())
            .set_sender_id(SenderId::new("MYBRAND").unwrap());

        assert_eq!(msg.text(), "hello");
        assert_eq!(
            msg.recipients()
                .iter()
                .map(RawPhoneNumber::raw)
                .collect::<Vec<_>>(),
            vec!["+34600111222", "+34600333444"]
        );
        assert_eq!(msg.sender_id().map(SenderId::as_str), Some("MYBRAND"));
    }

    #[test]
    fn clean_resets_per_send_fields_but_keeps_text() {
        let mut msg = Message::new(MessageText::new("hello").unwrap());
        msg.add_to(RawPhoneNumber::new("+34600111222").unwrap())
            .set_sender_id(SenderId::new("MYBRAND").unwrap());

        msg.clean();

        assert_eq!(msg.text(), "hello");
        assert!(msg.recipients().is_empty());
        assert!(msg.sender_id().is_none());
    }
}
