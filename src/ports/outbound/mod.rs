/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (InfraBot service, relay, console).
pub mod infra_backend;
pub mod infrabot_api;
pub mod notifier;

pub use infra_backend::InfraBackend;
pub use infrabot_api::InfrabotApi;
pub use notifier::{Notice, NoticeLevel, Notifier};
