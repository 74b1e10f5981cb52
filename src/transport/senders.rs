use serde_json::{Value, json};

use super::DecodeError;

/// Request body for the detailed sender-ID listing.
pub fn encode_sender_details_body() -> Value {
    json!({ "details": 1 })
}

/// Decode the `senderID` response payload.
///
/// Without details the gateway returns an array of strings; with details
/// the shape is gateway-defined. Both are passed through unmodified.
pub fn decode_senders_json_response(json: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_body_matches_wire_shape() {
        assert_eq!(encode_sender_details_body(), json!({ "details": 1 }));
    }

    #[test]
    fn decode_senders_passes_array_and_object_payloads_through() {
        let array = decode_senders_json_response(r#"["MYBRAND", "600111222"]"#).unwrap();
        assert_eq!(array, json!(["MYBRAND", "600111222"]));

        let object =
            decode_senders_json_response(r#"{"senders": [{"id": "MYBRAND", "type": "alpha"}]}"#)
                .unwrap();
        assert_eq!(
            object,
            json!({ "senders": [{ "id": "MYBRAND", "type": "alpha" }] })
        );

        assert!(decode_senders_json_response("not json").is_err());
    }
}
