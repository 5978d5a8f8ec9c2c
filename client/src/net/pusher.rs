//! Pusher channels protocol (v7) messages.
//!
//! DESIGN
//! ======
//! Pure encode/decode for the handful of messages the dashboard needs. The
//! socket lifecycle lives in `realtime`; everything here is testable without
//! a browser.
//!
//! Channel events carry `data` as a JSON-encoded string. Decoding unwraps
//! that second layer so callers always see structured data.

#[cfg(test)]
#[path = "pusher_test.rs"]
mod pusher_test;

use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

pub const PROTOCOL_VERSION: u8 = 7;
/// Event the backend publishes when a subscription is created or changed.
pub const NEW_SUBSCRIPTION_EVENT: &str = "new-subscription";
const CLIENT_NAME: &str = "tldr-site";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PusherError {
    #[error("malformed pusher message: {0}")]
    Malformed(String),
}

/// Decoded server-to-client message.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerMessage {
    ConnectionEstablished { socket_id: String, activity_timeout: Option<u64> },
    SubscriptionSucceeded { channel: String },
    Ping,
    Pong,
    Error { code: Option<u16>, message: String },
    ChannelEvent { channel: String, event: String, data: Value },
    /// Any other `pusher:`/`pusher_internal:` event.
    Other(String),
}

/// Payload of `new-subscription`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionNotice {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    data: Value,
}

#[derive(Deserialize)]
struct Established {
    socket_id: String,
    #[serde(default)]
    activity_timeout: Option<u64>,
}

#[derive(Deserialize)]
struct ErrorData {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
}

/// `wss://ws-<cluster>.pusher.com/app/<key>?protocol=7&...`
pub fn socket_url(key: &str, cluster: &str) -> String {
    format!(
        "wss://ws-{cluster}.pusher.com/app/{key}?protocol={PROTOCOL_VERSION}&client={CLIENT_NAME}&version={}&flash=false",
        env!("CARGO_PKG_VERSION")
    )
}

/// # Errors
///
/// Returns `PusherError::Malformed` when the text is not a Pusher envelope or
/// a known system event carries an unexpected payload.
pub fn parse_server_message(text: &str) -> Result<ServerMessage, PusherError> {
    let envelope: Envelope = serde_json::from_str(text).map_err(|e| PusherError::Malformed(e.to_string()))?;
    let data = unwrap_data(envelope.data);

    let message = match envelope.event.as_str() {
        "pusher:connection_established" => {
            let est: Established =
                serde_json::from_value(data).map_err(|e| PusherError::Malformed(e.to_string()))?;
            ServerMessage::ConnectionEstablished { socket_id: est.socket_id, activity_timeout: est.activity_timeout }
        }
        "pusher_internal:subscription_succeeded" => ServerMessage::SubscriptionSucceeded {
            channel: envelope.channel.unwrap_or_default(),
        },
        "pusher:ping" => ServerMessage::Ping,
        "pusher:pong" => ServerMessage::Pong,
        "pusher:error" => {
            let err: ErrorData = serde_json::from_value(data).unwrap_or(ErrorData { code: None, message: None });
            ServerMessage::Error { code: err.code, message: err.message.unwrap_or_default() }
        }
        other if other.starts_with("pusher:") || other.starts_with("pusher_internal:") => {
            ServerMessage::Other(other.to_owned())
        }
        _ => match envelope.channel {
            Some(channel) => ServerMessage::ChannelEvent { channel, event: envelope.event, data },
            None => ServerMessage::Other(envelope.event),
        },
    };
    Ok(message)
}

/// String payloads are JSON inside JSON; anything that does not parse stays a
/// plain string.
fn unwrap_data(data: Value) -> Value {
    match data {
        Value::String(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        other => other,
    }
}

pub fn subscribe_message(channel: &str) -> String {
    json!({ "event": "pusher:subscribe", "data": { "channel": channel } }).to_string()
}

pub fn unsubscribe_message(channel: &str) -> String {
    json!({ "event": "pusher:unsubscribe", "data": { "channel": channel } }).to_string()
}

pub fn ping_message() -> String {
    json!({ "event": "pusher:ping", "data": {} }).to_string()
}

pub fn pong_message() -> String {
    json!({ "event": "pusher:pong", "data": {} }).to_string()
}

/// Extract a `new-subscription` notice published on `channel`.
pub fn subscription_notice(message: &ServerMessage, channel: &str) -> Option<SubscriptionNotice> {
    match message {
        ServerMessage::ChannelEvent { channel: ch, event, data } if ch == channel && event == NEW_SUBSCRIPTION_EVENT => {
            serde_json::from_value(data.clone()).ok()
        }
        _ => None,
    }
}

/// Pusher reserves 4000-4099 for errors where reconnecting with the same
/// parameters will fail again (bad key, app disabled, SSL required).
pub fn should_reconnect(code: Option<u16>) -> bool {
    !matches!(code, Some(4000..=4099))
}
