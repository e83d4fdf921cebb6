use crate::provisioning::domain::{
    ComponentCreateRequest, ComponentCreateResponse, ProjectInitRequest, ProjectInitResponse,
    ProjectListResponse,
};
use crate::shared::Result;
use async_trait::async_trait;

/// InfrabotApi port used by the dashboard state to reach the relay
///
/// Mirrors the three relay endpoints with typed responses. A reply with a
/// non-success HTTP status is an error; a `success: false` body delivered
/// with a success status is returned as-is for the caller to interpret.
#[async_trait]
pub trait InfrabotApi: Send + Sync {
    async fn init_project(&self, request: &ProjectInitRequest) -> Result<ProjectInitResponse>;

    async fn create_component(
        &self,
        request: &ComponentCreateRequest,
    ) -> Result<ComponentCreateResponse>;

    async fn list_projects(&self, parent_dir: &str) -> Result<ProjectListResponse>;
}
