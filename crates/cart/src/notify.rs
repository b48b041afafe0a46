//! Transient user-feedback channel.
//!
//! Notices are fire-and-forget: the view never consumes a return value
//! and never fails because a notice could not be shown. Hosts decide
//! how a notice is rendered (toast, console line, log record).

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// Severity/styling class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Success,
}

/// Transient user-feedback channel.
pub trait Notifier {
    /// Show a notice to the user. Fire-and-forget.
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier that emits notices as tracing events.
///
/// `Warning` maps to `warn`, `Error` to `error`, and `Info`/`Success`
/// to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Warning => tracing::warn!(notice = ?kind, "{message}"),
            NoticeKind::Error => tracing::error!(notice = ?kind, "{message}"),
            NoticeKind::Info | NoticeKind::Success => {
                tracing::info!(notice = ?kind, "{message}");
            }
        }
    }
}

/// Notifier that buffers notices in memory.
///
/// Useful for hosts that render notices themselves after an operation,
/// and for asserting on emitted notices in tests. Single-threaded by
/// design, matching the engine's event-driven model.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl BufferedNotifier {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notices: RefCell::new(Vec::new()),
        }
    }

    /// All notices emitted so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.borrow().clone()
    }

    /// Drain and return the buffered notices.
    pub fn take(&self) -> Vec<(NoticeKind, String)> {
        self.notices.take()
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message);
    }
}
