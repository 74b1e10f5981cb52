//! Client layer: header composition, batching, and transport orchestration.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{Message, Password, Username, ValidationError};
use crate::transport::{
    SendFlags, decode_balance_json_response, decode_send_json_response,
    decode_senders_json_response, encode_message_record, encode_send_body,
    encode_sender_details_body,
};

const DEFAULT_API_ENDPOINT: &str = "https://api.descomsms.com/api/";
const DEFAULT_APP: &str = concat!("rust-sms v", env!("CARGO_PKG_VERSION"));

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const APP_HEADER: &str = "DSMS-App";

const BALANCE_PATH: &str = "balance";
const SENDER_ID_PATH: &str = "senderID";
const SEND_PATH: &str = "sms/send";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send_http<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a str,
        headers: &'a BTreeMap<String, String>,
        body: Option<&'a Value>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send_http<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a str,
        headers: &'a BTreeMap<String, String>,
        body: Option<&'a Value>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = match method {
                HttpMethod::Get => self.client.get(url),
                HttpMethod::Post => self.client.post(url),
            };
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
            if let Some(body) = body {
                request = request.json(body);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
/// Authentication credentials for Descom API calls.
///
/// The gateway authenticates every request through headers; each variant
/// of this enum knows how to produce its own header set. Username/password
/// is the only scheme the gateway offers today.
pub enum Auth {
    /// Authenticate via account username/password headers.
    UserPassword {
        username: Username,
        password: Password,
    },
}

impl Auth {
    /// Create [`Auth::UserPassword`] and validate both parts.
    pub fn user_password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::UserPassword {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Produce the authentication headers for this scheme.
    ///
    /// For [`Auth::UserPassword`] this is exactly `DSMS-User` and
    /// `DSMS-Pass`.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        match self {
            Self::UserPassword { username, password } => {
                headers.insert(Username::HEADER.to_owned(), username.as_str().to_owned());
                headers.insert(Password::HEADER.to_owned(), password.as_str().to_owned());
            }
        }
        headers
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DescomClient`].
pub enum DescomError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with an HTTP status other than 200. The raw
    /// response body is carried verbatim as the message.
    #[error("request failed with HTTP status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// A message with the same text is already queued in the pending batch.
    #[error("a message with this text is already queued: {text}")]
    DuplicateMessageText { text: String },

    /// A status-200 body could not be decoded as the expected JSON payload.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint URL (or an operation path joined onto it)
    /// is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`DescomClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct DescomClientBuilder {
    auth: Auth,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DescomClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base endpoint.
    ///
    /// Operation paths (`balance`, `senderID`, `sms/send`) are joined onto
    /// this value, so it should end with a trailing slash.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`DescomClient`].
    pub fn build(self) -> Result<DescomClient, DescomError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| DescomError::Transport(Box::new(err)))?;

        Ok(DescomClient {
            headers: base_headers(&self.auth),
            dryrun: false,
            sanitize: false,
            sender_not_force: false,
            messages: Vec::new(),
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn base_headers(auth: &Auth) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert(
        CONTENT_TYPE_HEADER.to_owned(),
        "application/json".to_owned(),
    );
    headers.extend(auth.headers());
    headers.insert(APP_HEADER.to_owned(), DEFAULT_APP.to_owned());
    headers
}

#[derive(Clone)]
/// High-level Descom SMS client.
///
/// The client owns the merged request headers, the send flags, and the
/// pending message batch. Configuration methods mutate local state and
/// return `&mut Self` for chaining; the three remote operations
/// ([`get_balance`](Self::get_balance),
/// [`get_sender_ids`](Self::get_sender_ids), [`send`](Self::send)) each
/// issue one blocking request through the transport.
pub struct DescomClient {
    headers: BTreeMap<String, String>,
    dryrun: bool,
    sanitize: bool,
    sender_not_force: bool,
    messages: Vec<Message>,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl DescomClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`DescomClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            headers: base_headers(&auth),
            dryrun: false,
            sanitize: false,
            sender_not_force: false,
            messages: Vec::new(),
            endpoint: DEFAULT_API_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> DescomClientBuilder {
        DescomClientBuilder::new(auth)
    }

    /// Replace the `DSMS-App` client identifier header.
    pub fn set_app(&mut self, app: impl Into<String>) -> &mut Self {
        self.headers.insert(APP_HEADER.to_owned(), app.into());
        self
    }

    /// Ask the gateway to validate the batch without dispatching it.
    pub fn set_dryrun(&mut self, dryrun: bool) -> &mut Self {
        self.dryrun = dryrun;
        self
    }

    /// Ask the gateway to coerce message text to its restricted charset.
    pub fn set_sanitize(&mut self, sanitize: bool) -> &mut Self {
        self.sanitize = sanitize;
        self
    }

    /// Allow the gateway to substitute the sender id instead of requiring
    /// the exact one requested.
    pub fn set_sender_not_force(&mut self, sender_not_force: bool) -> &mut Self {
        self.sender_not_force = sender_not_force;
        self
    }

    /// Add or overwrite a request header.
    ///
    /// Header mutations are additive; prior entries are never removed.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Queue a message for the next [`send`](Self::send), rejecting
    /// duplicate text.
    ///
    /// The scan compares text byte for byte against every already-queued
    /// message; on a collision the message is not added and
    /// [`DescomError::DuplicateMessageText`] carries the offending text.
    /// Use [`add_message_unchecked`](Self::add_message_unchecked) to skip
    /// the check.
    pub fn add_message(&mut self, message: Message) -> Result<&mut Self, DescomError> {
        if self.messages.iter().any(|cur| cur.text() == message.text()) {
            return Err(DescomError::DuplicateMessageText {
                text: message.text().to_owned(),
            });
        }
        self.messages.push(message);
        Ok(self)
    }

    /// Queue a message without the duplicate-text check.
    pub fn add_message_unchecked(&mut self, message: Message) -> &mut Self {
        self.messages.push(message);
        self
    }

    /// Messages queued for the next send, in insertion order.
    pub fn pending_messages(&self) -> &[Message] {
        &self.messages
    }

    /// Query the account balance.
    ///
    /// Errors:
    /// - [`DescomError::RequestFailed`] for any non-200 HTTP status,
    /// - [`DescomError::Decode`] when the 200 body is not a balance payload.
    pub async fn get_balance(&self) -> Result<f64, DescomError> {
        let body = self.request(HttpMethod::Get, BALANCE_PATH, None).await?;
        decode_balance_json_response(&body).map_err(|err| DescomError::Decode(Box::new(err)))
    }

    /// List the sender identities authorized for the account.
    ///
    /// With `details` the gateway returns its detailed listing (shape owned
    /// by the remote API); without, an array of sender-id strings. The
    /// payload is passed through undecoded beyond JSON parsing.
    pub async fn get_sender_ids(&self, details: bool) -> Result<Value, DescomError> {
        let body = if details {
            self.request(
                HttpMethod::Post,
                SENDER_ID_PATH,
                Some(encode_sender_details_body()),
            )
            .await?
        } else {
            self.request(HttpMethod::Get, SENDER_ID_PATH, None).await?
        };
        decode_senders_json_response(&body).map_err(|err| DescomError::Decode(Box::new(err)))
    }

    /// Submit the pending batch to the gateway.
    ///
    /// Every queued message is rendered into the request body in insertion
    /// order and reset via [`Message::clean`]. The pending list is emptied
    /// before the request is issued, so a failed send does not restore the
    /// batch; re-add messages before retrying.
    pub async fn send(&mut self) -> Result<Value, DescomError> {
        let mut pending = std::mem::take(&mut self.messages);

        let mut records = Vec::with_capacity(pending.len());
        for message in &mut pending {
            records.push(encode_message_record(message));
            message.clean();
        }

        let flags = SendFlags {
            dryrun: self.dryrun,
            sanitize: self.sanitize,
            sender_not_force: self.sender_not_force,
        };
        let body = encode_send_body(records, flags);

        let response = self.request(HttpMethod::Post, SEND_PATH, Some(body)).await?;
        decode_send_json_response(&response).map_err(|err| DescomError::Decode(Box::new(err)))
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<String, DescomError> {
        let url = Url::parse(&self.endpoint)
            .and_then(|base| base.join(path))
            .map_err(DescomError::Endpoint)?;

        let response = self
            .http
            .send_http(method, url.as_str(), &self.headers, body.as_ref())
            .await
            .map_err(DescomError::Transport)?;

        if response.status != 200 {
            return Err(DescomError::RequestFailed {
                status: response.status,
                message: response.body,
            });
        }

        Ok(response.body)
    }
}
