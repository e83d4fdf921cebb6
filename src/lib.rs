//! infrabot-relay - relay server and dashboard state for InfraBot
//!
//! This library relays natural-language infrastructure requests from a
//! dashboard to the InfraBot service (or answers them with simulated
//! responses in mock mode), following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`provisioning`): Request and response models, validation
//!   and prompt classification
//! - **Application Layer** (`application`): The relay use case, the backend
//!   factory and the dashboard state
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): The axum HTTP surface, the InfraBot and relay
//!   HTTP clients, the simulated backend and console output
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use infrabot_relay::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let relay = RelayFactory::create(BackendMode::Mock, "http://localhost:8000")?;
//! let server = RelayServer::new("127.0.0.1:5000".parse()?, AppState::new(relay));
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod provisioning;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{build_router, AppState, RelayServer};
    pub use crate::adapters::outbound::console::{StderrNotifier, StderrSpinner};
    pub use crate::adapters::outbound::network::{HttpInfraBackend, RelayHttpClient};
    pub use crate::adapters::outbound::simulated::SimulatedInfraBackend;
    pub use crate::application::dashboard::{
        ChatSession, ChatTranscript, Dashboard, ProjectContext, SendOutcome, Sender,
    };
    pub use crate::application::factories::RelayFactory;
    pub use crate::application::use_cases::RelayUseCase;
    pub use crate::ports::inbound::RelayPort;
    pub use crate::ports::outbound::{InfraBackend, InfrabotApi, Notice, NoticeLevel, Notifier};
    pub use crate::provisioning::domain::{
        BackendMode, ComponentCreateRequest, ComponentCreateResponse, CreateComponentPayload,
        InitProjectPayload, ProjectInitRequest, ProjectInitResponse, ProjectListQuery,
        ProjectListResponse, RelayReply,
    };
    pub use crate::provisioning::services::{PromptClassifier, RequestValidator};
    pub use crate::shared::{RelayError, RelayResult, Result};
}
