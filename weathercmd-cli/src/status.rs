use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while network calls are in flight. Clearing happens in
/// `Drop`, so the status line never survives the request, success or error.
pub struct Status {
    bar: ProgressBar,
}

impl Status {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }
}

impl Drop for Status {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
