//! Transient notification queue shared by every screen.
//!
//! DESIGN
//! ======
//! Screens produce `Notice` values from pure state transitions; the page layer
//! pushes them here and schedules dismissal. Keeping the queue a plain struct
//! lets the transitions be tested without a browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum toasts on screen; the oldest is dropped first.
pub const MAX_VISIBLE: usize = 5;

/// Auto-dismiss delay in the browser.
pub const TOAST_TTL_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

/// A message waiting to be shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == ToastKind::Success
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind: notice.kind, message: notice.message });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
