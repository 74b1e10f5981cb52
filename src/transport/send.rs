use serde_json::{Map, Value, json};

use super::DecodeError;
use crate::domain::{Message, MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Batch-level send flags.
///
/// Each flag is encoded into the request body only when true; absence is
/// the gateway's "off" signal.
pub struct SendFlags {
    pub dryrun: bool,
    pub sanitize: bool,
    pub sender_not_force: bool,
}

/// Render one message into its transport record.
///
/// Recipients and text are always present; optional fields are omitted
/// entirely when unset (never serialized as null).
pub fn encode_message_record(message: &Message) -> Value {
    let mut record = Map::new();
    let to = message
        .recipients()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>();
    record.insert(RawPhoneNumber::FIELD.to_owned(), json!(to));
    record.insert(MessageText::FIELD.to_owned(), json!(message.text()));
    if let Some(sender_id) = message.sender_id() {
        record.insert(SenderId::FIELD.to_owned(), json!(sender_id.as_str()));
    }
    Value::Object(record)
}

/// Assemble the `sms/send` request body from rendered message records.
pub fn encode_send_body(messages: Vec<Value>, flags: SendFlags) -> Value {
    let mut body = Map::new();
    body.insert("messages".to_owned(), Value::Array(messages));
    if flags.dryrun {
        body.insert("dryrun".to_owned(), json!(true));
    }
    if flags.sanitize {
        body.insert("sanitize".to_owned(), json!(true));
    }
    if flags.sender_not_force {
        body.insert("sender_not_force".to_owned(), json!(true));
    }
    Value::Object(body)
}

/// Decode the `sms/send` response payload.
///
/// The shape is gateway-defined and passed through unmodified.
pub fn decode_send_json_response(json: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use crate::domain::{MessageText, SenderId};

    use super::*;

    fn message(text: &str) -> Message {
        Message::new(MessageText::new(text).unwrap())
    }

    #[test]
    fn encode_record_includes_recipients_and_text() {
        let mut msg = message("hello");
        msg.add_to(RawPhoneNumber::new("+34600111222").unwrap())
            .add_to(RawPhoneNumber::new("+34600333444").unwrap());

        let record = encode_message_record(&msg);
        assert_eq!(
            record,
            json!({
                "to": ["+34600111222", "+34600333444"],
                "text": "hello",
            })
        );
    }

    #[test]
    fn encode_record_omits_sender_id_when_unset() {
        let record = encode_message_record(&message("hello"));
        assert!(record.get("senderID").is_none());

        let mut msg = message("hello");
        msg.set_sender_id(SenderId::new("MYBRAND").unwrap());
        let record = encode_message_record(&msg);
        assert_eq!(record.get("senderID"), Some(&json!("MYBRAND")));
    }

    #[test]
    fn encode_body_with_all_flags_off_has_only_messages() {
        let body = encode_send_body(Vec::new(), SendFlags::default());
        assert_eq!(body, json!({ "messages": [] }));
    }

    #[test]
    fn encode_body_includes_only_enabled_flags() {
        let flags = SendFlags {
            dryrun: true,
            sanitize: false,
            sender_not_force: true,
        };
        let body = encode_send_body(vec![encode_message_record(&message("hi"))], flags);

        assert_eq!(body.get("dryrun"), Some(&json!(true)));
        assert!(body.get("sanitize").is_none());
        assert_eq!(body.get("sender_not_force"), Some(&json!(true)));
        assert_eq!(body.get("messages").and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn decode_send_response_passes_payload_through() {
        let json = r#"{"sent": 2, "ids": ["a", "b"]}"#;
        let value = decode_send_json_response(json).unwrap();
        assert_eq!(value, json!({ "sent": 2, "ids": ["a", "b"] }));

        assert!(decode_send_json_response("{ not json }").is_err());
    }
}
