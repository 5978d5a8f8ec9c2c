//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and flow
//! logic so the flows stay testable natively.

pub mod browser;
pub mod markdown;
pub mod paddle;
pub mod script;
pub mod storage;
