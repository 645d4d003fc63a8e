//! Notification channel.
//!
//! Stores report the outcome of every mutation through this fire-and-forget
//! channel; they never depend on how (or whether) notifications are shown.

use mockall::automock;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Fire-and-forget notification sink.
#[automock]
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Notifier that emits notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!(title, body = message, "notification"),
            Severity::Error => tracing::error!(title, body = message, "notification"),
        }
    }
}
