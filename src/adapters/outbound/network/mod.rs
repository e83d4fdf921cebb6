/// Network adapters for external API calls
mod infrabot_client;
mod relay_client;

pub use infrabot_client::HttpInfraBackend;
pub use relay_client::RelayHttpClient;
