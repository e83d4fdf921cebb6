use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while waiting for a slow relay call
///
/// Component generation can take minutes upstream; the spinner only tells
/// the user the CLI is still waiting.
pub struct StderrSpinner {
    bar: ProgressBar,
}

impl StderrSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style =
            ProgressStyle::default_spinner().template("   {spinner:.green} {msg} ({elapsed})");
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
