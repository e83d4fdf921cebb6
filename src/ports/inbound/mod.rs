/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the
/// HTTP server) use to interact with the application core.
pub mod relay_port;

pub use relay_port::RelayPort;
