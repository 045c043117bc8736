//! Spinner shown while a request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Text shown while waiting for the backend
pub const THINKING_MESSAGE: &str = "Pensando en los videos...";

/// Spinner shown while the assistant is thinking.
///
/// A disabled indicator is a no-op, so callers don't branch on `--quiet`.
pub struct ThinkingIndicator {
    bar: Option<ProgressBar>,
}

impl ThinkingIndicator {
    /// Start spinning immediately
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(THINKING_MESSAGE);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// An indicator that draws nothing
    pub fn disabled() -> Self {
        Self { bar: None }
    }

    /// Start when `enabled`, otherwise return a disabled indicator
    pub fn start_if(enabled: bool) -> Self {
        if enabled { Self::start() } else { Self::disabled() }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the spinner from the terminal
    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Drop for ThinkingIndicator {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
