use crate::ports::inbound::RelayPort;
use crate::ports::outbound::InfraBackend;
use crate::provisioning::domain::{
    BackendMode, CreateComponentPayload, InitProjectPayload, ProjectListQuery, RelayReply,
};
use crate::provisioning::services::RequestValidator;
use crate::shared::RelayResult;
use async_trait::async_trait;

/// RelayUseCase - validates dashboard requests and hands them to a backend
///
/// The use case adds no domain logic of its own. It rejects requests with
/// missing required fields before any backend call, applies defaults, and
/// returns whatever the backend produced.
///
/// # Type Parameters
/// * `B` - InfraBackend implementation (live HTTP or simulated)
pub struct RelayUseCase<B> {
    backend: B,
}

impl<B> RelayUseCase<B>
where
    B: InfraBackend,
{
    /// Creates a new RelayUseCase with an injected backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B> RelayPort for RelayUseCase<B>
where
    B: InfraBackend,
{
    async fn init_project(&self, payload: InitProjectPayload) -> RelayResult<RelayReply> {
        let request = RequestValidator::init_request(payload)?;
        tracing::debug!(workdir = %request.workdir, local = %request.local, "relaying project init");

        self.backend.init_project(&request).await
    }

    async fn create_component(&self, payload: CreateComponentPayload) -> RelayResult<RelayReply> {
        let request = RequestValidator::component_request(payload)?;
        tracing::debug!(
            name = %request.name,
            model = %request.model,
            self_healing = %request.self_healing,
            workdir = %request.workdir,
            "relaying component creation"
        );

        self.backend.create_component(&request).await
    }

    async fn list_projects(&self, query: ProjectListQuery) -> RelayResult<RelayReply> {
        let parent_dir = query.parent_dir();
        tracing::debug!(parent_dir, "relaying project listing");

        self.backend.list_projects(parent_dir).await
    }

    fn mode(&self) -> BackendMode {
        self.backend.mode()
    }
}
