use crate::provisioning::domain::{
    BackendMode, CreateComponentPayload, InitProjectPayload, ProjectListQuery, RelayReply,
};
use crate::shared::RelayResult;
use async_trait::async_trait;

/// RelayPort - Inbound port for the relay use case
///
/// This port defines the interface that inbound adapters (the HTTP server)
/// use to relay dashboard requests. Payloads arrive unvalidated; the
/// implementation owns required-field checks and default values.
#[async_trait]
pub trait RelayPort: Send + Sync {
    /// Validates and relays a project initialization
    ///
    /// # Errors
    /// Returns an error if:
    /// - `workdir` is missing (`RelayError::MissingField`)
    /// - The backend fails (`RelayError::Upstream`)
    async fn init_project(&self, payload: InitProjectPayload) -> RelayResult<RelayReply>;

    /// Validates and relays a component creation
    ///
    /// # Errors
    /// Returns an error if:
    /// - `prompt` or `workdir` is missing (`RelayError::MissingField`)
    /// - The backend fails (`RelayError::Upstream`)
    async fn create_component(&self, payload: CreateComponentPayload) -> RelayResult<RelayReply>;

    /// Relays a project listing
    ///
    /// # Errors
    /// Returns an error if the backend fails
    async fn list_projects(&self, query: ProjectListQuery) -> RelayResult<RelayReply>;

    /// Mode of the backend behind this relay
    fn mode(&self) -> BackendMode;
}
