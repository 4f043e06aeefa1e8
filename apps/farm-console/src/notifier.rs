use admin_console::Notifier;
use colored::Colorize;

/// Prints notifications to stderr, one coloured line each.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, message: &str) {
        eprintln!("{}", format!("\u{2713} {message}").green());
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{}", format!("\u{2717} {message}").red());
    }
}
