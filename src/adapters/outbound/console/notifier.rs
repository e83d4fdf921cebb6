use crate::ports::outbound::{Notice, NoticeLevel, Notifier};
use owo_colors::{OwoColorize, Stream};

/// StderrNotifier adapter printing notices to stderr
///
/// Notices go to stderr so they never mix with command output on stdout.
/// Colors are only applied when stderr is a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl StderrNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Renders a notice as one or two plain lines
    pub fn render(notice: &Notice) -> String {
        let icon = match notice.level {
            NoticeLevel::Info => "✅",
            NoticeLevel::Destructive => "❌",
        };
        match &notice.description {
            Some(description) => format!("{} {}\n   {}", icon, notice.title, description),
            None => format!("{} {}", icon, notice.title),
        }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        let text = Self::render(&notice);
        match notice.level {
            NoticeLevel::Info => eprintln!(
                "{}",
                text.if_supports_color(Stream::Stderr, |t| t.green())
            ),
            NoticeLevel::Destructive => {
                eprintln!("{}", text.if_supports_color(Stream::Stderr, |t| t.red()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_description() {
        let notice = Notice::destructive("Failed to fetch projects")
            .with_description("Please check the parent directory and try again");
        assert_eq!(
            StderrNotifier::render(&notice),
            "❌ Failed to fetch projects\n   Please check the parent directory and try again"
        );
    }

    #[test]
    fn test_render_title_only() {
        assert_eq!(
            StderrNotifier::render(&Notice::info("Project created")),
            "✅ Project created"
        );
    }

    #[test]
    fn test_notify_does_not_panic() {
        StderrNotifier::new().notify(Notice::info("Parent directory updated"));
    }
}
