use crate::ports::outbound::InfraBackend;
use crate::provisioning::domain::{
    BackendMode, ComponentCreateRequest, ProjectInitRequest, RelayReply,
};
use crate::shared::{RelayError, RelayResult, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

/// HttpInfraBackend adapter delegating every request to the InfraBot service
///
/// This adapter implements the InfraBackend port with one outbound HTTP call
/// per relayed request. Successful JSON replies are returned untouched
/// together with their status code. Anything else becomes
/// `RelayError::Upstream` carrying the failure detail.
///
/// No retries and no request timeout are applied; self-healing retries are
/// a parameter of the service, not of the relay.
pub struct HttpInfraBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInfraBackend {
    /// Creates a backend for the service at `base_url` (e.g. `http://localhost:8000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("infrabot-relay/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends a prepared request and turns the reply into a RelayReply
    async fn relay(&self, request: reqwest::RequestBuilder) -> RelayResult<RelayReply> {
        let response = request
            .send()
            .await
            .map_err(|e| RelayError::upstream(error_chain(&e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::upstream(error_chain(&e)))?;

        if !status.is_success() {
            return Err(RelayError::upstream(failure_detail(status, &text)));
        }

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            RelayError::upstream(format!("InfraBot service returned invalid JSON: {}", e))
        })?;

        Ok(RelayReply::new(status.as_u16(), body))
    }
}

#[async_trait]
impl InfraBackend for HttpInfraBackend {
    async fn init_project(&self, request: &ProjectInitRequest) -> RelayResult<RelayReply> {
        let url = self.endpoint("init");
        self.relay(self.client.post(&url).json(request)).await
    }

    async fn create_component(
        &self,
        request: &ComponentCreateRequest,
    ) -> RelayResult<RelayReply> {
        let url = self.endpoint("component/create");
        self.relay(self.client.post(&url).json(request)).await
    }

    async fn list_projects(&self, parent_dir: &str) -> RelayResult<RelayReply> {
        // URL encode the directory so paths with spaces or '&' survive the query string
        let url = format!(
            "{}?parent_dir={}",
            self.endpoint("projects"),
            urlencoding::encode(parent_dir)
        );
        self.relay(self.client.get(&url)).await
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Live
    }
}

/// Describes a non-success reply.
///
/// Prefers the `detail` field of FastAPI error bodies, then `message` and
/// `error`, then the raw text.
fn failure_detail(status: StatusCode, text: &str) -> String {
    let from_json = serde_json::from_str::<Value>(text).ok().and_then(|body| {
        ["detail", "message", "error"]
            .iter()
            .find_map(|key| match body.get(*key) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
    });

    let detail = from_json.unwrap_or_else(|| text.trim().to_string());
    if detail.is_empty() {
        format!("InfraBot service returned status {}", status)
    } else {
        format!("InfraBot service returned status {}: {}", status, detail)
    }
}

/// Flattens an error and its sources into one line
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
