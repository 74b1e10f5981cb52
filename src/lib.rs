//! Typed Rust client for the Descom SMS gateway HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport
//! layer for wire-format details, and a small client layer composing
//! headers, batching messages, and orchestrating requests.
//!
//! ```rust,no_run
//! use descom_sms::{Auth, DescomClient, Message, MessageText, RawPhoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), descom_sms::DescomError> {
//!     let mut client = DescomClient::new(Auth::user_password("user", "pass")?);
//!
//!     let mut message = Message::new(MessageText::new("hello")?);
//!     message.add_to(RawPhoneNumber::new("+34600111222")?);
//!
//!     client.add_message(message)?;
//!     let _receipt = client.send().await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, DescomClient, DescomClientBuilder, DescomError};
pub use domain::{
    Message, MessageText, Password, PhoneNumber, RawPhoneNumber, SenderId, Username,
    ValidationError,
};
