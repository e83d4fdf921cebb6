use crate::ports::outbound::InfrabotApi;
use crate::provisioning::domain::{ComponentCreateRequest, ComponentCreateResponse};
use crate::shared::Result;
use anyhow::anyhow;

/// Latest component-creation result, owned by the view that issued it.
///
/// Each owner keeps its own copy; nothing is shared between views.
#[derive(Debug, Default)]
pub struct ComponentOutputState {
    is_loading: bool,
    output: Option<ComponentCreateResponse>,
}

impl ComponentOutputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn output(&self) -> Option<&ComponentCreateResponse> {
        self.output.as_ref()
    }

    /// Requests a component for `prompt` in the selected project.
    ///
    /// Self-healing is always requested. Whatever happens, `output` afterwards
    /// holds either the service's result or a synthesized `success: false`
    /// result carrying the failure text.
    ///
    /// # Errors
    /// Returns an error when no project is selected, when the relay call
    /// fails, or when the service reports `success: false`.
    pub async fn create_component<A>(
        &mut self,
        api: &A,
        project: Option<&str>,
        prompt: &str,
    ) -> Result<ComponentCreateResponse>
    where
        A: InfrabotApi + ?Sized,
    {
        self.is_loading = true;
        let result = Self::request(api, project, prompt).await;
        self.is_loading = false;

        match result {
            Ok(response) => {
                self.output = Some(response.clone());
                if response.success {
                    Ok(response)
                } else {
                    Err(anyhow!(response
                        .error_message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| "Component creation failed".to_string())))
                }
            }
            Err(e) => {
                self.output = Some(ComponentCreateResponse::failure(e.to_string()));
                Err(e)
            }
        }
    }

    async fn request<A>(
        api: &A,
        project: Option<&str>,
        prompt: &str,
    ) -> Result<ComponentCreateResponse>
    where
        A: InfrabotApi + ?Sized,
    {
        let workdir = project
            .filter(|p| !p.is_empty())
            .ok_or_else(|| anyhow!("No project selected"))?;

        let request = ComponentCreateRequest::new(prompt, workdir).with_self_healing(true);
        api.create_component(&request).await
    }
}
