//! User-facing failure notifications.

/// Raises a blocking notification to the user.
///
/// Implementations may block until the user acknowledges the message.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// A [`Notifier`] that only writes the message to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        log::error!("{message}");
    }
}
