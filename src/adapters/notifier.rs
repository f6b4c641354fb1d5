use crate::domain::ports::Notifier;

/// Prints alerts to stderr, the CLI's stand-in for a dialog box.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!("{}: {}", title, message);
        eprintln!("❌ {}: {}", title, message);
    }
}
