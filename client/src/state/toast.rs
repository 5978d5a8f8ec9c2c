//! Transient notifications shown in the corner of the page.
//!
//! Pages push a toast and schedule its dismissal; the host component renders
//! whatever is in the queue. Ids are monotonic so a late timer never removes
//! a newer toast that happens to carry the same text.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays up unless dismissed earlier.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
