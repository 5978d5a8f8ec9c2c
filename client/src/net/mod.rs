//! Networking modules for the account REST API and Pusher notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls over the `http` transport seam, `types` and
//! `error` define the wire schema and failures, and `realtime` manages the
//! Pusher websocket described by `pusher`.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod pusher;
pub mod realtime;
pub mod types;
