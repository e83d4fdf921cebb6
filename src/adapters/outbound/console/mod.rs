/// Console adapters for user-facing output on stderr
mod notifier;
mod spinner;

pub use notifier::StderrNotifier;
pub use spinner::StderrSpinner;
