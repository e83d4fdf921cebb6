/// Simulated adapters used in mock mode
mod keyword_backend;

pub use keyword_backend::SimulatedInfraBackend;
