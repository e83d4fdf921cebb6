/// Dashboard state: project selection, chat transcript and the latest
/// component result, driven against the relay through the `InfrabotApi` port.
mod chat;
mod component_output;
mod project_context;

pub use chat::{
    generation_notes, summarize, ChatMessage, ChatSession, ChatTranscript, SendOutcome, Sender,
    CREATION_ERROR_TEXT, WELCOME_MESSAGE,
};
pub use component_output::ComponentOutputState;
pub use project_context::{ProjectContext, DEFAULT_DASHBOARD_PARENT_DIR};

use crate::ports::outbound::{InfrabotApi, Notifier};
use std::sync::Arc;

/// Dashboard - composition root owning the per-session state
///
/// The project context and the chat share one API client and one notifier.
/// The chat reads the selected project from the context at send time.
pub struct Dashboard<A, N> {
    pub projects: ProjectContext<A, N>,
    pub chat: ChatSession<A, N>,
}

impl<A, N> Dashboard<A, N>
where
    A: InfrabotApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        let api = Arc::new(api);
        let notifier = Arc::new(notifier);

        Self {
            projects: ProjectContext::new(Arc::clone(&api), Arc::clone(&notifier)),
            chat: ChatSession::new(api, notifier),
        }
    }

    pub fn with_parent_dir(self, dir: impl Into<String>) -> Self {
        Self {
            projects: self.projects.with_parent_dir(dir),
            chat: self.chat,
        }
    }

    /// Sends `message` to the currently selected project.
    pub async fn send_message(&mut self, message: impl Into<String>) -> SendOutcome {
        self.chat.set_draft(message);
        self.chat.send(self.projects.current_project()).await
    }
}
