//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped signals and effects and delegates decisions to
//! `flows` and rendering details to `components`.

pub mod auth_form;
pub mod auth_success;
pub mod checkout;
pub mod dashboard;
pub mod google_callback;
pub mod home;
pub mod login;
pub mod policy;
pub mod signup;
