use super::component_output::ComponentOutputState;
use crate::ports::outbound::{InfrabotApi, Notice, Notifier};
use crate::provisioning::domain::ComponentCreateResponse;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

pub const WELCOME_MESSAGE: &str = "Hi there! I'm your InfraBot assistant. I can help you create AWS infrastructure using natural language. Just tell me what you want to build, and I'll generate the Terraform code for you.\n\nExample: \"Create an S3 bucket with versioning enabled\" or \"Set up an EC2 instance with a security group\"";

/// Agent reply appended when a creation fails for any reason.
pub const CREATION_ERROR_TEXT: &str = "Error: Failed to create component";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only list of chat messages, in send order.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Transcript opening with the agent's welcome message.
    pub fn new() -> Self {
        let mut transcript = Self::empty();
        transcript.push(ChatMessage::new(WELCOME_MESSAGE, Sender::Agent));
        transcript
    }

    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::new(content, Sender::User))
    }

    pub fn push_agent(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::new(content, Sender::Agent))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one `ChatSession::send` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Validation failed; nothing was sent and the transcript is unchanged.
    Rejected,
    Created(ComponentCreateResponse),
    Failed(String),
}

/// ChatSession - chat transcript, draft and creation state of one view
pub struct ChatSession<A, N> {
    api: Arc<A>,
    notifier: Arc<N>,
    transcript: ChatTranscript,
    draft: String,
    output: ComponentOutputState,
}

impl<A, N> ChatSession<A, N>
where
    A: InfrabotApi,
    N: Notifier,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>) -> Self {
        Self::with_transcript(api, notifier, ChatTranscript::new())
    }

    pub fn with_transcript(api: Arc<A>, notifier: Arc<N>, transcript: ChatTranscript) -> Self {
        Self {
            api,
            notifier,
            transcript,
            draft: String::new(),
            output: ComponentOutputState::new(),
        }
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn is_loading(&self) -> bool {
        self.output.is_loading()
    }

    pub fn component_output(&self) -> Option<&ComponentCreateResponse> {
        self.output.output()
    }

    /// Sends the current draft as a component request for `project`.
    ///
    /// A blank draft or missing project only raises a notice. Otherwise the
    /// draft becomes a user message, is cleared, and exactly one agent
    /// message follows once the relay has answered.
    pub async fn send(&mut self, project: Option<&str>) -> SendOutcome {
        if self.draft.trim().is_empty() {
            self.notifier.notify(Notice::destructive("Please enter a message"));
            return SendOutcome::Rejected;
        }

        let project = match project.filter(|p| !p.is_empty()) {
            Some(project) => project,
            None => {
                self.notifier.notify(
                    Notice::destructive("Please select a project first")
                        .with_description("Choose a project from the project list"),
                );
                return SendOutcome::Rejected;
            }
        };

        let prompt = std::mem::take(&mut self.draft);
        self.transcript.push_user(prompt.as_str());

        match self
            .output
            .create_component(self.api.as_ref(), Some(project), &prompt)
            .await
        {
            Ok(response) => {
                self.transcript.push_agent(summarize(&response));
                SendOutcome::Created(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, "component creation failed");
                self.transcript.push_agent(CREATION_ERROR_TEXT);
                self.notifier.notify(
                    Notice::destructive("Error creating component")
                        .with_description("Please try again with a different description"),
                );
                SendOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Renders the agent's reply for a created component.
pub fn summarize(response: &ComponentCreateResponse) -> String {
    let mut lines = vec![format!("Component created: {}", response.component_name)];

    if !response.plan_summary.is_empty() {
        lines.push(response.plan_summary.clone());
    }

    if !response.outputs.is_empty() {
        lines.push("Outputs:".to_string());
        for (key, value) in &response.outputs {
            lines.push(format!("- {}: {}", key, render_output_value(value)));
        }
    }

    lines.join("\n")
}

/// Extra lines about how the component was produced: self-healing fixes and
/// whether a diagram came back. Empty when there is nothing to report.
pub fn generation_notes(response: &ComponentCreateResponse) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(attempts) = response.self_healing_attempts.filter(|n| *n > 0) {
        notes.push(format!("Self-healing attempts: {}", attempts));
    }

    if let Some(errors) = response.fixed_errors.as_deref().filter(|e| !e.is_empty()) {
        notes.push("Fixed errors:".to_string());
        notes.extend(errors.iter().map(|e| format!("- {}", e.description())));
    }

    if response.has_diagram() {
        notes.push("Architecture diagram included".to_string());
    }

    notes
}

fn render_output_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}
