//! Port for user-visible notices.
//!
//! Forms and boards report the outcome of every remote action through a
//! [`Notifier`]. Rendering (toasts, status bars) is left to the embedding
//! application.

/// Receives user-visible confirmation and error messages.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Reports a completed action.
    fn success(&self, message: &str);

    /// Reports a failed action.
    fn error(&self, message: &str);
}

/// Notifier that emits notices as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notice = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notice = "error", "{message}");
    }
}
