//! Transport layer: wire-format details (JSON bodies and response decoding).

mod balance;
mod send;
mod senders;

pub use balance::decode_balance_json_response;
pub use send::{SendFlags, decode_send_json_response, encode_message_record, encode_send_body};
pub use senders::{decode_senders_json_response, encode_sender_details_body};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("balance field is not numeric: {value}")]
    BalanceNotNumeric { value: String },
}
