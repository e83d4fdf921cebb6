/// Adapters layer - Infrastructure implementations
///
/// Inbound: the axum HTTP surface of the relay.
/// Outbound: InfraBot and relay HTTP clients, the simulated backend and
/// console output.
pub mod inbound;
pub mod outbound;
