//! User-facing notification seam.
//!
//! The host surfaces transient notifications (symbol-load failures, first
//! bar-request failures) however it likes; the core only talks to this trait.

use std::sync::Mutex;

/// Transient user-notification sink.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink that forwards notifications to tracing.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "chartfeed::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "chartfeed::notify", "{message}");
    }
}

/// Sink that drops everything.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Recording sink for tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    entries: Mutex<Vec<(NotifyLevel, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Success,
    Error,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(NotifyLevel, String)> {
        self.entries
            .lock()
            .expect("notifier store should not be poisoned")
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(level, _)| *level == NotifyLevel::Error)
            .map(|(_, message)| message)
            .collect()
    }

    fn push(&self, level: NotifyLevel, message: &str) {
        self.entries
            .lock()
            .expect("notifier store should not be poisoned")
            .push((level, message.to_owned()));
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(NotifyLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotifyLevel::Error, message);
    }
}
