//! Page-independent flow logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow takes an `ApiClient` and a `SessionStore` and returns an outcome
//! value. Pages apply outcomes to signals and navigation; nothing here touches
//! the DOM, so every flow runs natively under test against in-memory fakes.

pub mod auth;
pub mod checkout;
pub mod dashboard;
pub mod oauth;
pub mod validation;
