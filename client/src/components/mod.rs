//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dashboard panels. They take plain props
//! and callbacks; only `toast_host` reads shared state from context.

pub mod api_key_panel;
pub mod low_usage_modal;
pub mod plan_card;
pub mod site_footer;
pub mod site_header;
pub mod spinner;
pub mod tier_badge;
pub mod toast_host;
