//! Terminal implementation of the host bridge.

use std::time::Duration;

use async_trait::async_trait;

use formdeck_app::HostBridge;

/// Bridge that maps host primitives onto the terminal.
///
/// Alerts and toasts go to stderr; external navigation prints the URL to
/// stdout so it can be piped. Confirmation is answered by the `--yes` flag —
/// there is no interactive prompt, matching the destructive-action default
/// of "do nothing unless explicitly confirmed".
#[derive(Debug, Clone, Copy, Default)]
pub struct TermBridge {
    assume_yes: bool,
}

impl TermBridge {
    /// Creates a bridge; `assume_yes` answers confirmations affirmatively.
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl HostBridge for TermBridge {
    fn alert(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn popup(&self, title: &str, message: &str) {
        println!("{title}\n\n{message}");
    }

    async fn request_confirmation(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprintln!("{prompt} (re-run with --yes to confirm)");
        false
    }

    fn toast(&self, text: &str, _duration: Duration) {
        eprintln!("{text}");
    }

    fn open_external(&self, url: &str) {
        println!("{url}");
    }
}
