/// Mock implementations for testing
mod mock_infra_backend;
mod mock_infrabot_api;
mod mock_notifier;

#[allow(unused_imports)]
pub use mock_infra_backend::MockInfraBackend;
#[allow(unused_imports)]
pub use mock_infrabot_api::{ApiCall, MockInfrabotApi};
#[allow(unused_imports)]
pub use mock_notifier::MockNotifier;
