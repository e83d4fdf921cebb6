use async_trait::async_trait;
use infrabot_relay::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock InfraBackend for testing the relay without a network
///
/// Records the requests that reached it and answers with a fixed reply,
/// or with the configured error.
#[derive(Clone)]
pub struct MockInfraBackend {
    pub init_requests: Arc<Mutex<Vec<ProjectInitRequest>>>,
    pub component_requests: Arc<Mutex<Vec<ComponentCreateRequest>>>,
    pub listed_dirs: Arc<Mutex<Vec<String>>>,
    reply: RelayReply,
    failure: Option<fn() -> RelayError>,
}

#[allow(dead_code)]
impl MockInfraBackend {
    pub fn replying(reply: RelayReply) -> Self {
        Self {
            init_requests: Arc::default(),
            component_requests: Arc::default(),
            listed_dirs: Arc::default(),
            reply,
            failure: None,
        }
    }

    pub fn failing(failure: fn() -> RelayError) -> Self {
        let mut backend = Self::replying(RelayReply::ok(serde_json::Value::Null));
        backend.failure = Some(failure);
        backend
    }

    pub fn request_count(&self) -> usize {
        self.init_requests.lock().unwrap().len()
            + self.component_requests.lock().unwrap().len()
            + self.listed_dirs.lock().unwrap().len()
    }

    fn answer(&self) -> RelayResult<RelayReply> {
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.reply.clone()),
        }
    }
}

#[async_trait]
impl InfraBackend for MockInfraBackend {
    async fn init_project(&self, request: &ProjectInitRequest) -> RelayResult<RelayReply> {
        self.init_requests.lock().unwrap().push(request.clone());
        self.answer()
    }

    async fn create_component(
        &self,
        request: &ComponentCreateRequest,
    ) -> RelayResult<RelayReply> {
        self.component_requests.lock().unwrap().push(request.clone());
        self.answer()
    }

    async fn list_projects(&self, parent_dir: &str) -> RelayResult<RelayReply> {
        self.listed_dirs.lock().unwrap().push(parent_dir.to_string());
        self.answer()
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Live
    }
}
