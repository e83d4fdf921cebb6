use async_trait::async_trait;
use infrabot_relay::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// One call received by the mock
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum ApiCall {
    Init(ProjectInitRequest),
    CreateComponent(ComponentCreateRequest),
    ListProjects(String),
}

/// Mock InfrabotApi for testing the dashboard state
///
/// Initialized projects are added to the listing. Component requests are
/// answered like mock mode unless a canned response or a failure is set.
#[derive(Default, Clone)]
pub struct MockInfrabotApi {
    calls: Arc<Mutex<Vec<ApiCall>>>,
    projects: Arc<Mutex<Vec<String>>>,
    component_response: Option<ComponentCreateResponse>,
    fail_init: bool,
    fail_create: bool,
    fail_list: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockInfrabotApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(self, projects: &[&str]) -> Self {
        *self.projects.lock().unwrap() = projects.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_component_response(mut self, response: ComponentCreateResponse) -> Self {
        self.component_response = Some(response);
        self
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_list(self) -> Self {
        self.set_list_failing(true);
        self
    }

    /// Toggles listing failures on a mock already handed to a dashboard
    pub fn set_list_failing(&self, failing: bool) {
        self.fail_list.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl InfrabotApi for MockInfrabotApi {
    async fn init_project(&self, request: &ProjectInitRequest) -> Result<ProjectInitResponse> {
        self.record(ApiCall::Init(request.clone()));
        if self.fail_init {
            anyhow::bail!("Mock init failure");
        }
        self.projects.lock().unwrap().push(request.workdir.clone());
        Ok(ProjectInitResponse::initialized(request.workdir.clone()))
    }

    async fn create_component(
        &self,
        request: &ComponentCreateRequest,
    ) -> Result<ComponentCreateResponse> {
        self.record(ApiCall::CreateComponent(request.clone()));
        if self.fail_create {
            anyhow::bail!("Mock component failure");
        }
        Ok(self
            .component_response
            .clone()
            .unwrap_or_else(|| SimulatedInfraBackend::component_for(request)))
    }

    async fn list_projects(&self, parent_dir: &str) -> Result<ProjectListResponse> {
        self.record(ApiCall::ListProjects(parent_dir.to_string()));
        if self.fail_list.load(Ordering::SeqCst) {
            anyhow::bail!("Mock list failure");
        }
        Ok(ProjectListResponse::found(
            self.projects.lock().unwrap().clone(),
        ))
    }
}
