/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Destructive,
}

/// A transient notice shown to the user (the dashboard's toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            level: NoticeLevel::Info,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            level: NoticeLevel::Destructive,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_destructive(&self) -> bool {
        self.level == NoticeLevel::Destructive
    }
}

/// Notifier port for surfacing validation and failure notices
///
/// This port abstracts how notices reach the user (console, UI toast, ...)
/// so dashboard state can be driven headless in tests.
pub trait Notifier: Send + Sync {
    /// Shows a notice
    ///
    /// # Arguments
    /// * `notice` - The notice to display
    fn notify(&self, notice: Notice);
}
