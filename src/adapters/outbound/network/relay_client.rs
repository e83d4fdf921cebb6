use crate::ports::outbound::InfrabotApi;
use crate::provisioning::domain::{
    ComponentCreateRequest, ComponentCreateResponse, ProjectInitRequest, ProjectInitResponse,
    ProjectListResponse,
};
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// RelayHttpClient adapter for talking to a running relay's `/api` endpoints
///
/// This is the client half used by the dashboard state and the CLI. Replies
/// with a non-success status become errors carrying the envelope's message.
pub struct RelayHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayHttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .user_agent(format!("infrabot-relay-client/{}", version))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!(envelope_message(&text).unwrap_or_else(|| status.to_string()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl InfrabotApi for RelayHttpClient {
    async fn init_project(&self, request: &ProjectInitRequest) -> Result<ProjectInitResponse> {
        let response = self
            .client
            .post(self.api_url("init"))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn create_component(
        &self,
        request: &ComponentCreateRequest,
    ) -> Result<ComponentCreateResponse> {
        let response = self
            .client
            .post(self.api_url("component/create"))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn list_projects(&self, parent_dir: &str) -> Result<ProjectListResponse> {
        let url = format!(
            "{}?parent_dir={}",
            self.api_url("projects"),
            urlencoding::encode(parent_dir)
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Failed to list projects: {}",
                envelope_message(&text).unwrap_or_else(|| status.to_string())
            );
        }

        Ok(response.json().await?)
    }
}

/// Extracts the human-readable message from a relay error envelope
fn envelope_message(text: &str) -> Option<String> {
    let body: Value = serde_json::from_str(text).ok()?;
    ["message", "error_message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let client = RelayHttpClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(
            client.api_url("component/create"),
            "http://127.0.0.1:5000/api/component/create"
        );
    }

    #[test]
    fn test_envelope_message_keys() {
        assert_eq!(
            envelope_message(r#"{"success": false, "message": "workdir is required"}"#),
            Some("workdir is required".to_string())
        );
        assert_eq!(
            envelope_message(r#"{"success": false, "error_message": "prompt is required"}"#),
            Some("prompt is required".to_string())
        );
        assert_eq!(envelope_message("<html>oops</html>"), None);
        assert_eq!(envelope_message(r#"{"message": ""}"#), None);
    }
}
