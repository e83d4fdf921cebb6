/// Inbound adapters - entry points that drive the application core
pub mod http;
