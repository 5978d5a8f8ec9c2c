//! Client-side state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` persists the bearer token and profile snapshot; `toast` is the
//! transient notification queue shared through context.

pub mod session;
pub mod toast;
