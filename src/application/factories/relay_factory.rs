use crate::adapters::outbound::network::HttpInfraBackend;
use crate::adapters::outbound::simulated::SimulatedInfraBackend;
use crate::application::use_cases::RelayUseCase;
use crate::ports::inbound::RelayPort;
use crate::provisioning::domain::BackendMode;
use crate::shared::Result;
use std::sync::Arc;

/// Factory for creating the relay behind the HTTP endpoints
///
/// This factory encapsulates the choice between the live InfraBot backend
/// and the simulated one, so endpoint code never sees which is in use.
pub struct RelayFactory;

impl RelayFactory {
    /// Creates a relay for the given mode
    ///
    /// # Arguments
    /// * `mode` - Live (delegate to the service) or Mock (canned responses)
    /// * `upstream_url` - Base URL of the InfraBot service; ignored in mock mode
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn create(mode: BackendMode, upstream_url: &str) -> Result<Arc<dyn RelayPort>> {
        let relay: Arc<dyn RelayPort> = match mode {
            BackendMode::Live => {
                Arc::new(RelayUseCase::new(HttpInfraBackend::new(upstream_url)?))
            }
            BackendMode::Mock => Arc::new(RelayUseCase::new(SimulatedInfraBackend::new())),
        };
        Ok(relay)
    }

    /// Returns the startup message for the specified mode
    pub fn startup_message(mode: BackendMode, upstream_url: &str) -> String {
        match mode {
            BackendMode::Live => format!(
                "🔗 Relaying requests to InfraBot service at {}",
                upstream_url
            ),
            BackendMode::Mock => "🧪 Mock mode: answering with simulated responses".to_string(),
        }
    }
}
