/// Application layer - Use cases and dashboard state
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dashboard;
pub mod factories;
pub mod use_cases;
