use crate::provisioning::domain::{
    BackendMode, ComponentCreateRequest, ProjectInitRequest, RelayReply,
};
use crate::shared::RelayResult;
use async_trait::async_trait;

/// InfraBackend port for answering relayed requests
///
/// This port abstracts where component artifacts come from: the live
/// InfraBot HTTP service, or a simulated generator used for demos and tests.
/// The relay endpoints only ever talk to this trait, so either implementation
/// can be swapped in without touching request handling.
///
/// # Async Support
/// Implementations must be `Send + Sync` so a single instance can serve
/// concurrent requests from the HTTP server.
#[async_trait]
pub trait InfraBackend: Send + Sync {
    /// Initializes a project working directory
    ///
    /// # Errors
    /// Returns `RelayError::Upstream` when the service is unreachable or
    /// answers with a non-success status.
    async fn init_project(&self, request: &ProjectInitRequest) -> RelayResult<RelayReply>;

    /// Generates an infrastructure component from a natural-language prompt
    ///
    /// # Errors
    /// Returns `RelayError::Upstream` when the service is unreachable or
    /// answers with a non-success status.
    async fn create_component(&self, request: &ComponentCreateRequest)
        -> RelayResult<RelayReply>;

    /// Lists InfraBot projects below `parent_dir`
    ///
    /// # Errors
    /// Returns `RelayError::Upstream` when the service is unreachable or
    /// answers with a non-success status.
    async fn list_projects(&self, parent_dir: &str) -> RelayResult<RelayReply>;

    /// Which mode this backend implements
    fn mode(&self) -> BackendMode;
}
