//! Transient user-facing notifications ("toasts").
//!
//! Views receive a [`Notifier`] at construction instead of reaching for a
//! process-wide toast queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }
}

/// Sink for notifications raised by view actions.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

pub type SharedNotifier = Arc<dyn Notifier>;

/// Prints notifications to stderr and remembers whether any was an error.
#[derive(Debug, Default, Clone)]
pub struct TerminalNotifier {
    raised_error: Arc<AtomicBool>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raised_error(&self) -> bool {
        self.raised_error.load(Ordering::SeqCst)
    }

    fn line(toast: &Toast) -> String {
        let prefix = match toast.level {
            ToastLevel::Success => "ok",
            ToastLevel::Error => "error",
        };
        match &toast.description {
            Some(description) => format!("{}: {} ({})", prefix, toast.title, description),
            None => format!("{}: {}", prefix, toast.title),
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => debug!(title = %toast.title, "notification"),
            ToastLevel::Error => {
                self.raised_error.store(true, Ordering::SeqCst);
                debug!(title = %toast.title, "error notification");
            }
        }
        eprintln!("{}", Self::line(&toast));
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().last().cloned()
    }

    pub fn errors(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .iter()
            .filter(|t| t.is_error())
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.toasts.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
