//! Toast notification queue

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification that has not been shown yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: ToastKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// A notification on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastState {
    /// Visible toasts, oldest first
    pub items: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind: notification.kind,
            message: notification.message,
        });
        id
    }

    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Notification::success(message))
    }

    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Notification::error(message))
    }

    /// Remove a toast. Unknown ids are ignored, since the timer and the
    /// dismiss button can both fire for the same toast.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
