/// Provisioning domain: the data that flows between dashboard, relay and
/// the InfraBot service, plus the stateless rules applied to it.
pub mod domain;
pub mod services;
